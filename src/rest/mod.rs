//! A blocking REST client bound to a base URL.
//!
//! The endpoint selection hands one of these to the transfer pipeline for reading user ACLs,
//! either on the Chef Server root or on the account service.
//! Requests are not signed here; the Chef Server side authentication is done by the caller's credential layer.
//!
mod functions;

pub use functions::*;
