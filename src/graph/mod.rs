//! Microsoft Graph workbook access: bearer-credential capability and a thin
//! async HTTP client over the table-row endpoints

pub mod auth;
pub mod client;

pub use auth::{EnvToken, StaticToken, TokenProvider};
pub use client::GraphClient;
