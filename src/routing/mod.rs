//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path, query)
//!     → path.rs (split into RequestPath)
//!     → matcher.rs (locale prefix / locale-shaped segment)
//!     → redirect.rs (gate: Pass or Redirect)
//!     → router.rs (page dispatch)
//!
//! Language switcher:
//!     current URI + target locale
//!     → rewrite.rs (strip old locale, apply new one)
//!     → LocalizedPath
//! ```
//!
//! # Design Decisions
//! - Allow-list built at startup, immutable at runtime
//! - Deterministic: same input always yields the same decision
//! - Locale comparisons are case-insensitive; emitted codes are lowercase

pub mod matcher;
pub mod path;
pub mod redirect;
pub mod rewrite;
pub mod router;

pub use path::{LocalizedPath, RequestPath};
pub use redirect::{GateDecision, LocaleRedirector};
pub use rewrite::CultureRewriter;
