//! Infrastructure shared by the UI domains.

pub mod constants;
