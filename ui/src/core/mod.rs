//! Renderer-independent pieces of the dashboard shell.

pub mod config;
pub mod geometry;
pub mod handles;
pub mod route;
pub mod tab_bar;
pub mod timing;
pub mod viewport;
