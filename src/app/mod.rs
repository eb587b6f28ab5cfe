//! Application layer: CLI and configuration management

pub mod cli;
pub mod config;
