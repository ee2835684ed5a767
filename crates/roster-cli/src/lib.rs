//! Library side of the roster CLI: settings, logging, the file-backed
//! session, and terminal rendering.

pub mod config;
pub mod logging;
pub mod render;
pub mod session;
