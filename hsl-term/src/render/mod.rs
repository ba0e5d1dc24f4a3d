//! Terminal rendering: banner, colored departure tables and screens.

mod banner;
mod color;
mod screen;
mod table;

pub use banner::banner;
pub use color::{Color, Painted, Style, UnknownColor};
pub use screen::{Screen, TerminalScreen};
pub use table::{BoardRenderer, TableTemplate, ZERO_RESULTS};
