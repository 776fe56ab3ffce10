//! Home page UI: theme, collaborators (links, previews), section views and
//! their update handlers.

pub mod links;
pub mod preview;
pub mod theme;
pub mod update_handlers;
pub mod views;
