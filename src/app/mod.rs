mod state;

use crossterm::event::KeyCode;

pub use state::{App, CopyFeedback, CopyOutcome, DEFAULT_SEED, NameEdit};

/// Possible input events the app reacts to.
pub enum AppEvent {
    Tick,
    KeyPress(KeyCode),
    LeftClick(u16, u16),
    RightClick(u16, u16),
    Resize(u16, u16),
}

/// Context menu visibility. At most one swatch's menu is open at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuState {
    Closed,
    Open {
        /// Id of the swatch the menu belongs to.
        color_id: String,
        /// Cell the opening click landed on; drives positioning.
        anchor: (u16, u16),
        /// Keyboard-highlighted item position.
        highlighted: usize,
    },
}

/// Entries of the swatch context menu, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuItem {
    AddToLeft,
    Edit,
    AddToRight,
}

impl MenuItem {
    pub const ALL: [MenuItem; 3] = [Self::AddToLeft, Self::Edit, Self::AddToRight];

    pub fn label(self) -> &'static str {
        match self {
            Self::AddToLeft => "Add to Left",
            Self::Edit => "Edit",
            Self::AddToRight => "Add to Right",
        }
    }
}
