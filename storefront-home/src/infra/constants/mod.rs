//! Constants module for centralized layout and motion values

pub mod hero;
pub mod layout;
pub mod product_rail;

pub use layout::{breakpoints, page};
