//! Smart Market AI API.
//!
//! A small axum service whose only application route is `GET /health`.
//! The binary in `main.rs` drives [`app::run`]; tests build the router
//! through [`app::build_router`].

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod state;

/// Title reported by the service in its startup log.
pub const SERVICE_TITLE: &str = "Smart Market AI API";
