//! Request guards.
//!
//! - [`session::SessionGuard`] -- Extracts the caller's session id from the session cookie.

pub mod session;
