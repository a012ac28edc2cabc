//! CLI commands for shuttle

pub mod dispatch;
pub mod helpers;
pub mod opposite;
pub mod outgoing;
pub mod route;
pub mod show;
