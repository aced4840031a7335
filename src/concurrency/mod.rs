//! Request concurrency for the transfer pipeline.
//!
//! `--concurrency` is the maximum number of simultaneous requests.
//! One of these is the main thread, the others are the workers of the [WorkerPool]:
//! a concurrency of 10 gives 9 workers, a concurrency of 1 gives no workers,
//! and then all work runs on the main thread.
//!
mod structs;
mod functions;

pub use structs::*;
