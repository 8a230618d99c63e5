/// Pure frame geometry shared by drawing and mouse hit-testing.
///
/// The renderer rebuilds the whole frame from the store every cycle;
/// keeping all placement here means the event handler resolves clicks
/// against exactly the geometry that was drawn.
use ratatui::layout::Rect;

pub const HEADER_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 3;

/// Minimum gap the context menu keeps from the viewport edges.
pub const MENU_MARGIN: u16 = 2;
/// Fixed menu width, sized for the widest label plus borders.
pub const MENU_WIDTH: u16 = 18;

/// The swatch row: everything between the header and footer bars.
pub fn palette_area(viewport: Rect) -> Rect {
    let chrome = HEADER_HEIGHT + FOOTER_HEIGHT;
    Rect {
        x: viewport.x,
        y: viewport.y + HEADER_HEIGHT.min(viewport.height),
        width: viewport.width,
        height: viewport.height.saturating_sub(chrome),
    }
}

/// Split the palette area into one column per swatch, in store order.
/// Returns an empty vec when nothing fits.
pub fn swatch_rects(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 || area.height == 0 {
        return Vec::new();
    }
    let count_u16 = u16::try_from(count).unwrap_or(u16::MAX);
    let width = area.width / count_u16;
    if width == 0 {
        return Vec::new();
    }
    (0..count_u16)
        .map(|i| {
            // Last swatch absorbs the division remainder.
            let w = if i == count_u16 - 1 {
                area.width - width * i
            } else {
                width
            };
            Rect {
                x: area.x + width * i,
                y: area.y,
                width: w,
                height: area.height,
            }
        })
        .collect()
}

/// Index of the swatch containing the given cell, if any.
pub fn hit_swatch(area: Rect, count: usize, x: u16, y: u16) -> Option<usize> {
    swatch_rects(area, count)
        .iter()
        .position(|rect| rect.contains((x, y).into()))
}

/// Rows inside a swatch holding the name, hex, and copy-hint text,
/// centered as a block within the swatch.
pub fn swatch_text_rows(rect: Rect) -> (u16, u16, u16) {
    let name_row = rect.y + rect.height.saturating_sub(3) / 2;
    (name_row, name_row + 1, name_row + 2)
}

/// True when a click at `y` inside a swatch lands on its hex-copy text.
pub fn is_copy_row(rect: Rect, y: u16) -> bool {
    let (_, hex_row, hint_row) = swatch_text_rows(rect);
    y == hex_row || y == hint_row
}

/// Place the context menu relative to its anchor cell.
///
/// Default is anchored at the click point, vertically centered on the
/// click row. If that would sit within `MENU_MARGIN` of the left edge
/// the menu is pinned to the margin; within the margin of the right
/// edge, pinned to `width - menu_width - margin`. Vertical centering
/// is preserved in both pinned cases, clamped to the viewport.
pub fn menu_rect(anchor: (u16, u16), item_count: usize, viewport: Rect) -> Rect {
    let height = u16::try_from(item_count).unwrap_or(u16::MAX) + 2;
    let width = MENU_WIDTH.min(viewport.width);

    let mut x = anchor.0;
    if x < MENU_MARGIN {
        x = MENU_MARGIN;
    } else if x + width > viewport.width.saturating_sub(MENU_MARGIN) {
        x = viewport.width.saturating_sub(width + MENU_MARGIN);
    }

    let mut y = anchor.1.saturating_sub(height / 2);
    let max_y = viewport.height.saturating_sub(height);
    if y > max_y {
        y = max_y;
    }

    Rect {
        x,
        y,
        width,
        height: height.min(viewport.height),
    }
}

/// Which menu item (by position) a click at `(x, y)` lands on.
pub fn menu_item_at(menu: Rect, item_count: usize, x: u16, y: u16) -> Option<usize> {
    if x <= menu.x || x >= menu.x + menu.width.saturating_sub(1) {
        return None;
    }
    let first_row = menu.y + 1;
    if y < first_row {
        return None;
    }
    let index = usize::from(y - first_row);
    (index < item_count).then_some(index)
}
