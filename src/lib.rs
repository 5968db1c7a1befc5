//! Library exports for console-session, shared between the binary and tests.

pub mod api;
pub mod config;
pub mod client;
pub mod models;
pub mod repository;
pub mod session;
pub mod startup;
pub mod store;
pub mod utils;
