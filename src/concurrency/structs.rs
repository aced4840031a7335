//! The structs
//!
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConcurrencyLevel {
    pub concurrency: usize,
    pub pool_size: usize,
}
/// Worker threads bounded by [ConcurrencyLevel::pool_size].
///
/// With a pool size of zero there is no thread pool.
#[derive(Debug)]
pub struct WorkerPool {
    pub(crate) pool: Option<rayon::ThreadPool>,
    pub(crate) size: usize,
}
