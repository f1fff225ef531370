//! Request authentication.
//!
//! - `session` - Extracts the caller's user id from a bearer header or cookie token
//! - `auth` - `AuthGuard` checks the caller against the permissions a route requires

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
