//! Configuration, data types and secret resolution shared by the handler
//! and the entry point.

pub mod config;
pub mod models;
pub mod secrets;
