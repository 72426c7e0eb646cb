//! Output formatting: collection listings, BibTeX and the debug dump.

pub mod dump;
pub mod listing;

pub use dump::write_dump;
pub use listing::{render_collections, write_bibliography};
