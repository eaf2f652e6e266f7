//! Food Park site library
//!
//! Exposes the cache, Places client, rendering and server modules for the
//! binary and for integration tests.

pub mod cache;
pub mod cli;
pub mod clock;
pub mod config;
pub mod contact;
pub mod data;
pub mod format;
pub mod server;
pub mod site;
