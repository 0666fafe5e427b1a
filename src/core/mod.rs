//! Core application primitives (wiring, HTTP surface, refresh runtime)

pub mod bootstrap;
pub mod http;
pub mod runtime;

pub use bootstrap::*;
pub use http::*;
pub use runtime::*;
