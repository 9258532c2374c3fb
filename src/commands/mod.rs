//! Command implementations for wayfind

pub mod dispatch;
pub mod mincut;
pub mod path;
