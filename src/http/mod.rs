//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, state)
//!     → pipeline.rs (ordered stages: request id, trace, timeout,
//!                    root redirect, locale gate, localization)
//!     → routing::router (page dispatch)
//!     → response.rs (HTML page or 302)
//!     → Send to client
//! ```

pub mod middleware;
pub mod pipeline;
pub mod request;
pub mod response;
pub mod server;

pub use middleware::RequestCulture;
pub use request::{RequestIdExt, UuidRequestId, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
