//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod nominatim_search_adapter;
mod osc52_clipboard;
mod system_url_opener;

pub use nominatim_search_adapter::NominatimSearchAdapter;
pub use osc52_clipboard::{Osc52Clipboard, osc52_sequence};
pub use system_url_opener::SystemUrlOpener;
