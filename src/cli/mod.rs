//! CLI command handlers

pub mod commands;

pub use commands::{employees, export, fetch, serial, submit, whoami, TOKEN_ENV_VAR};
