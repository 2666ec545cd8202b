//! Terminal presentation helpers.

mod theme;

pub use theme::Style;
