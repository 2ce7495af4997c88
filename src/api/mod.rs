//! REST API Bindings
//!
//! Typed wrappers over the server's endpoints, organized by domain.
//! Request plans are pure values (see `http`), so the wire contract is
//! covered by native tests.

mod export;
mod http;
mod jira;
mod portfolios;
mod projects;
mod reports;
mod roles;
mod teams;
mod telemetry;
mod users;
mod worklogs;

// Re-export all public items
pub use export::*;
pub use http::{csrf_token, ApiError};
pub use jira::*;
pub use portfolios::*;
pub use projects::*;
pub use reports::*;
pub use roles::*;
pub use teams::*;
pub use telemetry::*;
pub use users::*;
pub use worklogs::*;
