pub mod config;
pub mod consts;
pub mod error;
pub mod geometry;
pub mod loader;
pub mod preview;
pub mod session;
pub mod source;
