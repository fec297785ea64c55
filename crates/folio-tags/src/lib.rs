//! folio-tags: Category enumerations, selections, and tallies.
//!
//! Gallery items carry labels drawn from fixed enumerations: project
//! categories, technology categories, and certification tags. This crate
//! owns those enumerations plus the set-like `Selection` used by gallery
//! filters and the tally helpers behind tag pickers.

pub mod category;
pub mod selection;
pub mod tally;

pub use category::*;
pub use selection::*;
pub use tally::*;
