//! Request-processing middleware.
//!
//! Each function here is one stage of the pipeline declared in
//! `http::pipeline`; none of them knows its own position.

pub mod locale_gate;
pub mod localization;
pub mod root_redirect;

pub use locale_gate::locale_gate;
pub use localization::{localization, RequestCulture};
pub use root_redirect::root_redirect;
