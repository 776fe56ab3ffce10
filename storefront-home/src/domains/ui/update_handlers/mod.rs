pub mod rail_updates;

pub use rail_updates::{advance_rails, handle_rail_message};
