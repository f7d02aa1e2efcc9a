//! Single-route greeting service.
//!
//! `GET /` answers with a fixed sentence that ends in the deployment
//! environment name, taken from the `ENV` variable on every request
//! (`dev` when unset). The server listens on `0.0.0.0:5000`.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`env`]: Environment variable lookup
//! - [`greeting`]: Greeting text
//! - [`api`]: HTTP router and handler
//! - [`server`]: Listener and serve loop
//! - [`metrics`]: Request metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod env;
pub mod error;
pub mod greeting;
pub mod metrics;
pub mod server;
pub mod utils;

pub use config::Config;
pub use error::{GreeterError, Result};
