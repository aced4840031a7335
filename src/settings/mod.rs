//! The settings of a single backup or restore invocation.
//!
//! [Settings] is built once from the command line options, the environment and `.env`,
//! and then passed by reference to the preflight steps.
//! The only change after construction is `skip_useracl`, set by the endpoint selection
//! when no endpoint for user ACLs is available.
//!
mod structs;
mod functions;

pub use structs::*;
