//! Module for probing the account service at `http://127.0.0.1:9465`.
//!
//! Enterprise Chef 11.0.x does not serve user ACLs through the Chef Server API,
//! but the internal account service does. It only listens on the loopback
//! interface of the Chef Server, so it is reachable only when running on the server itself.
//!
mod functions;

pub use functions::*;
