//! REST API exposing the engine to UI/API callers
//!
//! The handlers are thin async delegates: parse the request, call the
//! engine, map the domain result onto an [`ApiResponse`] envelope. All
//! authorization is the caller's concern.

pub mod common;
pub mod handlers;
pub mod router;

pub use common::ApiResponse;
pub use router::{create_router, AppState};
