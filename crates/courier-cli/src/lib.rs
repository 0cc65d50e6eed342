//! CLI library components for the carrier status tool.

pub mod input;
pub mod logging;
pub mod lookup;
pub mod summary;
