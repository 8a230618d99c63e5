use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use ratatui::layout::Rect;

use crate::clipboard::ClipboardWriter;
use crate::layout;
use crate::palette::{ColorRecord, PaletteStore};

use super::{AppEvent, MenuItem, MenuState};

/// Palette shipped when no `--seed` colors are given. The first entry
/// gets the name "rebeccapurple".
pub const DEFAULT_SEED: &[&str] = &["#639", "#CC77CC", "#CCA8B8", "#CCCC99", "#996633"];

/// Hex used for colors inserted from the context menu.
const TEMPLATE_COLOR: &str = "#DDD";

/// How long the copy feedback label stays up.
const COPY_FEEDBACK: Duration = Duration::from_millis(3000);

/// In-progress rename of one swatch. Keystrokes apply to the store
/// immediately; closing the editor is just a mode switch.
#[derive(Clone, Debug)]
pub struct NameEdit {
    pub color_id: String,
    pub buffer: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed,
}

/// Transient label shown on a swatch after a clipboard write.
#[derive(Clone, Debug)]
pub struct CopyFeedback {
    pub color_id: String,
    pub outcome: CopyOutcome,
    started: Instant,
}

/// The top-level application state.
pub struct App {
    pub running: bool,
    pub store: PaletteStore,
    pub viewport: Rect,
    pub selected_index: usize,
    pub menu: MenuState,
    pub name_edit: Option<NameEdit>,
    pub copy_feedback: Option<CopyFeedback>,
    pub status: Option<String>,
    clipboard: Box<dyn ClipboardWriter>,
}

impl App {
    pub fn new(seed: &[String], clipboard: Box<dyn ClipboardWriter>) -> Self {
        let (mut store, skipped) = if seed.is_empty() {
            PaletteStore::seed(DEFAULT_SEED)
        } else {
            PaletteStore::seed(seed)
        };
        if seed.is_empty() {
            if let Some(first_id) = store.get(0).map(|record| record.id.clone()) {
                let _ = store.rename(&first_id, "rebeccapurple");
            }
        }

        let status = (!skipped.is_empty())
            .then(|| format!("Skipped invalid seed colors: {}", skipped.join(", ")));

        Self {
            running: true,
            store,
            viewport: Rect::default(),
            selected_index: 0,
            menu: MenuState::Closed,
            name_edit: None,
            copy_feedback: None,
            status,
            clipboard,
        }
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => self.expire_copy_feedback(),
            AppEvent::Resize(width, height) => {
                self.viewport = Rect::new(0, 0, width, height);
            }
            AppEvent::KeyPress(key) => self.handle_key(key),
            AppEvent::LeftClick(x, y) => self.handle_left_click(x, y),
            AppEvent::RightClick(x, y) => self.handle_right_click(x, y),
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        if self.name_edit.is_some() {
            self.handle_name_edit_key(key);
            return;
        }
        if self.menu != MenuState::Closed {
            self.handle_menu_key(key);
            return;
        }

        match key {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Left => self.move_selection_left(),
            KeyCode::Right => self.move_selection_right(),
            KeyCode::Enter | KeyCode::Char('r') => self.begin_rename(),
            KeyCode::Char('c') => self.copy_index(self.selected_index),
            KeyCode::Char('m') => self.open_menu_for_selected(),
            KeyCode::Esc => self.status = None,
            _ => {}
        }
    }

    fn handle_name_edit_key(&mut self, key: KeyCode) {
        match key {
            // The buffer is already applied; Enter/Esc only leave the mode.
            KeyCode::Enter | KeyCode::Esc => self.name_edit = None,
            KeyCode::Backspace | KeyCode::Delete => {
                if let Some(edit) = self.name_edit.as_mut() {
                    edit.buffer.pop();
                }
                self.apply_name_edit();
            }
            KeyCode::Char(ch) => {
                if ch.is_control() {
                    return;
                }
                if let Some(edit) = self.name_edit.as_mut() {
                    edit.buffer.push(ch);
                }
                self.apply_name_edit();
            }
            _ => {}
        }
    }

    fn handle_menu_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.menu = MenuState::Closed,
            KeyCode::Up => {
                if let MenuState::Open { highlighted, .. } = &mut self.menu {
                    if *highlighted == 0 {
                        *highlighted = MenuItem::ALL.len() - 1;
                    } else {
                        *highlighted -= 1;
                    }
                }
            }
            KeyCode::Down => {
                if let MenuState::Open { highlighted, .. } = &mut self.menu {
                    *highlighted = (*highlighted + 1) % MenuItem::ALL.len();
                }
            }
            KeyCode::Enter => {
                let item = match &self.menu {
                    MenuState::Open { highlighted, .. } => Some(MenuItem::ALL[*highlighted]),
                    MenuState::Closed => None,
                };
                if let Some(item) = item {
                    self.activate_menu_item(item);
                }
            }
            _ => {}
        }
    }

    fn handle_left_click(&mut self, x: u16, y: u16) {
        if let MenuState::Open { anchor, .. } = &self.menu {
            let menu = layout::menu_rect(*anchor, MenuItem::ALL.len(), self.viewport);
            if let Some(index) = layout::menu_item_at(menu, MenuItem::ALL.len(), x, y) {
                self.activate_menu_item(MenuItem::ALL[index]);
                return;
            }
            // Any primary click off the menu buttons closes the menu,
            // then the click is handled normally.
            self.menu = MenuState::Closed;
        }
        if self.name_edit.is_some() {
            // Clicking away commits the rename (it applied live).
            self.name_edit = None;
        }

        let area = layout::palette_area(self.viewport);
        let Some(index) = layout::hit_swatch(area, self.store.len(), x, y) else {
            return;
        };
        self.selected_index = index;
        let rects = layout::swatch_rects(area, self.store.len());
        if rects
            .get(index)
            .is_some_and(|rect| layout::is_copy_row(*rect, y))
        {
            self.copy_index(index);
        }
    }

    fn handle_right_click(&mut self, x: u16, y: u16) {
        if self.name_edit.is_some() {
            self.name_edit = None;
        }

        let area = layout::palette_area(self.viewport);
        match layout::hit_swatch(area, self.store.len(), x, y) {
            Some(index) => {
                self.selected_index = index;
                if let Some(record) = self.store.get(index) {
                    self.menu = MenuState::Open {
                        color_id: record.id.clone(),
                        anchor: (x, y),
                        highlighted: 0,
                    };
                }
            }
            // Right-click off every swatch closes an open menu.
            None => self.menu = MenuState::Closed,
        }
    }

    fn activate_menu_item(&mut self, item: MenuItem) {
        let MenuState::Open { color_id, .. } =
            std::mem::replace(&mut self.menu, MenuState::Closed)
        else {
            return;
        };
        match item {
            MenuItem::AddToLeft => self.insert_relative(&color_id, 0),
            MenuItem::AddToRight => self.insert_relative(&color_id, 1),
            // Deliberate placeholder, kept visible rather than dropped.
            MenuItem::Edit => self.status = Some("Edit is not implemented yet.".to_string()),
        }
    }

    /// Insert a template-colored record next to the given swatch.
    /// `offset` 0 inserts to its left, 1 to its right.
    fn insert_relative(&mut self, color_id: &str, offset: usize) {
        let index = match self.store.find_index_by_id(color_id) {
            Ok(index) => index,
            Err(err) => {
                self.status = Some(format!("Failed to insert color: {err}"));
                return;
            }
        };
        let record = match ColorRecord::create(TEMPLATE_COLOR) {
            Ok(record) => record,
            Err(err) => {
                self.status = Some(format!("Failed to create color: {err}"));
                return;
            }
        };
        if let Err(err) = self.store.insert_at(index + offset, record) {
            self.status = Some(format!("Failed to insert color: {err}"));
        }
    }

    fn move_selection_left(&mut self) {
        if self.store.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.store.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    fn move_selection_right(&mut self) {
        if self.store.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.store.len();
    }

    fn begin_rename(&mut self) {
        let Some(record) = self.store.get(self.selected_index) else {
            return;
        };
        self.name_edit = Some(NameEdit {
            color_id: record.id.clone(),
            buffer: record.name.clone().unwrap_or_default(),
        });
    }

    fn apply_name_edit(&mut self) {
        let Some(edit) = &self.name_edit else {
            return;
        };
        let (id, buffer) = (edit.color_id.clone(), edit.buffer.clone());
        if let Err(err) = self.store.rename(&id, &buffer) {
            self.status = Some(format!("Failed to rename color: {err}"));
            self.name_edit = None;
        }
    }

    fn open_menu_for_selected(&mut self) {
        let Some(record) = self.store.get(self.selected_index) else {
            return;
        };
        let area = layout::palette_area(self.viewport);
        let rects = layout::swatch_rects(area, self.store.len());
        let anchor = rects
            .get(self.selected_index)
            .map(|rect| (rect.x + rect.width / 2, rect.y + rect.height / 2))
            .unwrap_or((self.viewport.width / 2, self.viewport.height / 2));
        self.menu = MenuState::Open {
            color_id: record.id.clone(),
            anchor,
            highlighted: 0,
        };
    }

    fn copy_index(&mut self, index: usize) {
        let Some(record) = self.store.get(index) else {
            return;
        };
        let (color_id, hex) = (record.id.clone(), record.hex.clone());
        let outcome = match self.clipboard.write(&hex) {
            Ok(()) => CopyOutcome::Copied,
            Err(_) => CopyOutcome::Failed,
        };
        self.copy_feedback = Some(CopyFeedback {
            color_id,
            outcome,
            started: Instant::now(),
        });
    }

    fn expire_copy_feedback(&mut self) {
        if self
            .copy_feedback
            .as_ref()
            .is_some_and(|feedback| feedback.started.elapsed() >= COPY_FEEDBACK)
        {
            self.copy_feedback = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::clipboard::ClipboardError;

    struct MockClipboard {
        wrote: Rc<RefCell<Vec<String>>>,
        fail: bool,
    }

    impl ClipboardWriter for MockClipboard {
        fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::WriteError("mock".to_string()));
            }
            self.wrote.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    fn test_app(seed: &[&str]) -> (App, Rc<RefCell<Vec<String>>>) {
        let wrote = Rc::new(RefCell::new(Vec::new()));
        let clipboard = MockClipboard {
            wrote: Rc::clone(&wrote),
            fail: false,
        };
        let seed: Vec<String> = seed.iter().map(|s| s.to_string()).collect();
        let mut app = App::new(&seed, Box::new(clipboard));
        app.update(AppEvent::Resize(80, 24));
        (app, wrote)
    }

    fn hexes(app: &App) -> Vec<&str> {
        app.store.records().iter().map(|r| r.hex.as_str()).collect()
    }

    #[test]
    fn default_seed_names_rebeccapurple() {
        let (app, _) = test_app(&[]);
        assert_eq!(app.store.len(), 5);
        assert_eq!(app.store.get(0).unwrap().hex, "#663399");
        assert_eq!(
            app.store.get(0).unwrap().name.as_deref(),
            Some("rebeccapurple")
        );
        assert!(app.status.is_none());
    }

    #[test]
    fn bad_seed_entries_surface_on_the_status_line() {
        let (app, _) = test_app(&["#663399", "zzz", "#00FFFF"]);
        assert_eq!(app.store.len(), 2);
        assert!(app.status.as_deref().unwrap().contains("zzz"));
    }

    #[test]
    fn add_to_right_from_keyboard_menu() {
        let (mut app, _) = test_app(&["#663399", "#660000", "#00FFFF"]);

        app.update(AppEvent::KeyPress(KeyCode::Right));
        assert_eq!(app.selected_index, 1);
        app.update(AppEvent::KeyPress(KeyCode::Char('m')));
        assert!(matches!(app.menu, MenuState::Open { .. }));

        // Highlight "Add to Right" (third item) and activate it.
        app.update(AppEvent::KeyPress(KeyCode::Down));
        app.update(AppEvent::KeyPress(KeyCode::Down));
        app.update(AppEvent::KeyPress(KeyCode::Enter));

        assert_eq!(app.store.len(), 4);
        assert_eq!(app.store.get(2).unwrap().hex, "#DDDDDD");
        assert_eq!(app.menu, MenuState::Closed);
        assert_eq!(
            hexes(&app),
            vec!["#663399", "#660000", "#DDDDDD", "#00FFFF"]
        );
    }

    #[test]
    fn add_to_left_via_mouse() {
        let (mut app, _) = test_app(&["#663399", "#660000", "#00FFFF"]);

        // Right-click the middle of swatch 1 (80 wide / 3 swatches).
        app.update(AppEvent::RightClick(39, 12));
        let MenuState::Open { anchor, .. } = app.menu.clone() else {
            panic!("menu should be open");
        };

        // Click the first menu row: "Add to Left".
        let menu = layout::menu_rect(anchor, MenuItem::ALL.len(), app.viewport);
        app.update(AppEvent::LeftClick(menu.x + 2, menu.y + 1));

        assert_eq!(app.menu, MenuState::Closed);
        assert_eq!(
            hexes(&app),
            vec!["#663399", "#DDDDDD", "#660000", "#00FFFF"]
        );
    }

    #[test]
    fn edit_is_an_explicit_no_op() {
        let (mut app, _) = test_app(&["#663399", "#660000"]);
        app.update(AppEvent::KeyPress(KeyCode::Char('m')));
        app.update(AppEvent::KeyPress(KeyCode::Down));
        app.update(AppEvent::KeyPress(KeyCode::Enter));

        assert_eq!(app.store.len(), 2);
        assert_eq!(app.menu, MenuState::Closed);
        assert!(app.status.as_deref().unwrap().contains("not implemented"));
    }

    #[test]
    fn off_swatch_right_click_closes_the_menu() {
        let (mut app, _) = test_app(&["#663399", "#660000"]);
        app.update(AppEvent::RightClick(10, 12));
        assert!(matches!(app.menu, MenuState::Open { .. }));

        // Header row is outside every swatch.
        app.update(AppEvent::RightClick(10, 0));
        assert_eq!(app.menu, MenuState::Closed);
    }

    #[test]
    fn off_menu_primary_click_closes_the_menu() {
        let (mut app, _) = test_app(&["#663399", "#660000"]);
        app.update(AppEvent::RightClick(10, 12));
        app.update(AppEvent::LeftClick(0, 0));
        assert_eq!(app.menu, MenuState::Closed);
        assert_eq!(app.store.len(), 2);
    }

    #[test]
    fn rename_applies_live_and_keeps_whitespace_as_empty() {
        let (mut app, _) = test_app(&["#663399"]);

        app.update(AppEvent::KeyPress(KeyCode::Enter));
        assert!(app.name_edit.is_some());
        app.update(AppEvent::KeyPress(KeyCode::Char('s')));
        app.update(AppEvent::KeyPress(KeyCode::Char('k')));
        app.update(AppEvent::KeyPress(KeyCode::Char('y')));
        // Applied before the editor closes.
        assert_eq!(app.store.get(0).unwrap().name.as_deref(), Some("sky"));
        app.update(AppEvent::KeyPress(KeyCode::Enter));
        assert!(app.name_edit.is_none());

        // Clearing down to whitespace stores the empty string.
        app.update(AppEvent::KeyPress(KeyCode::Char('r')));
        for _ in 0..3 {
            app.update(AppEvent::KeyPress(KeyCode::Backspace));
        }
        app.update(AppEvent::KeyPress(KeyCode::Char(' ')));
        app.update(AppEvent::KeyPress(KeyCode::Esc));
        assert_eq!(app.store.get(0).unwrap().name.as_deref(), Some(""));
    }

    #[test]
    fn rename_with_stale_id_posts_status_and_closes_editor() {
        let (mut app, _) = test_app(&["#663399"]);
        app.name_edit = Some(NameEdit {
            color_id: "#663399-gone".to_string(),
            buffer: String::new(),
        });

        app.update(AppEvent::KeyPress(KeyCode::Char('x')));

        assert!(app.name_edit.is_none());
        assert!(app.status.as_deref().unwrap().contains("Failed to rename"));
        // The store is untouched by the aborted mutation.
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.get(0).unwrap().name, None);
    }

    #[test]
    fn copy_records_hex_and_shows_feedback() {
        let (mut app, wrote) = test_app(&["#663399", "#660000"]);
        app.update(AppEvent::KeyPress(KeyCode::Char('c')));

        assert_eq!(wrote.borrow().as_slice(), ["#663399".to_string()]);
        let feedback = app.copy_feedback.as_ref().unwrap();
        assert_eq!(feedback.outcome, CopyOutcome::Copied);
        assert_eq!(feedback.color_id, app.store.get(0).unwrap().id);
    }

    #[test]
    fn clipboard_failure_shows_failed_feedback() {
        let clipboard = MockClipboard {
            wrote: Rc::new(RefCell::new(Vec::new())),
            fail: true,
        };
        let mut app = App::new(&["#663399".to_string()], Box::new(clipboard));
        app.update(AppEvent::Resize(80, 24));

        app.update(AppEvent::KeyPress(KeyCode::Char('c')));
        assert_eq!(
            app.copy_feedback.as_ref().unwrap().outcome,
            CopyOutcome::Failed
        );
    }

    #[test]
    fn copy_feedback_expires_after_three_seconds() {
        let (mut app, _) = test_app(&["#663399"]);
        app.update(AppEvent::KeyPress(KeyCode::Char('c')));

        // Fresh feedback survives a tick.
        app.update(AppEvent::Tick);
        assert!(app.copy_feedback.is_some());

        let earlier = Instant::now()
            .checked_sub(Duration::from_secs(4))
            .expect("clock predates test");
        app.copy_feedback.as_mut().unwrap().started = earlier;
        app.update(AppEvent::Tick);
        assert!(app.copy_feedback.is_none());
    }

    #[test]
    fn copy_via_click_on_the_hex_row() {
        let (mut app, wrote) = test_app(&["#663399", "#660000"]);
        let area = layout::palette_area(app.viewport);
        let rects = layout::swatch_rects(area, 2);
        let (_, hex_row, _) = layout::swatch_text_rows(rects[1]);

        app.update(AppEvent::LeftClick(rects[1].x + 2, hex_row));
        assert_eq!(app.selected_index, 1);
        assert_eq!(wrote.borrow().as_slice(), ["#660000".to_string()]);
    }

    #[test]
    fn selection_wraps_both_ways() {
        let (mut app, _) = test_app(&["#111111", "#222222", "#333333"]);
        app.update(AppEvent::KeyPress(KeyCode::Left));
        assert_eq!(app.selected_index, 2);
        app.update(AppEvent::KeyPress(KeyCode::Right));
        assert_eq!(app.selected_index, 0);
    }
}
