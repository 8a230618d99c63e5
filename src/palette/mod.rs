/// Palette domain: color records and the ordered store.
mod record;
mod store;

pub use record::ColorRecord;
pub use store::{PaletteError, PaletteStore};
