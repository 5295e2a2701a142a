//! Command implementations.

pub mod config_cmd;
pub mod launch;
pub mod load;
pub mod text;
