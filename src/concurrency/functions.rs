//! The impls and functions
//!
use std::{sync::mpsc::channel, time::Instant};
use log::*;
use anyhow::{bail, Context, Result};
use crate::concurrency::{ConcurrencyLevel, WorkerPool};
use crate::DEFAULT_CONCURRENCY;

impl ConcurrencyLevel {
    pub fn configure(
        requested: Option<usize>,
    ) -> Result<ConcurrencyLevel>
    {
        let concurrency = requested.unwrap_or(DEFAULT_CONCURRENCY);
        if concurrency == 0 {
            bail!("Invalid concurrency: 0, at least 1 simultaneous request is needed");
        }
        let level = ConcurrencyLevel { concurrency, pool_size: concurrency - 1 };
        info!("concurrency: {}, worker pool size: {}", level.concurrency, level.pool_size);
        Ok(level)
    }
}

impl WorkerPool {
    pub fn new(
        level: &ConcurrencyLevel,
    ) -> Result<WorkerPool>
    {
        // rayon takes 0 threads as "one per cpu", so no pool is built at all.
        let pool = if level.pool_size == 0 {
            None
        } else {
            Some(rayon::ThreadPoolBuilder::new()
                .num_threads(level.pool_size)
                .thread_name(|index| format!("ec-worker-{}", index))
                .build()
                .with_context(|| format!("Unable to create worker pool of {} threads", level.pool_size))?)
        };
        Ok(WorkerPool { pool, size: level.pool_size })
    }
    pub fn size(&self) -> usize {
        self.size
    }
    /// Run `work` for every item, on at most [WorkerPool::size] threads at the same time.
    ///
    /// The results are returned in order of completion, not in the order of `items`.
    pub fn run<T, R, F>(
        &self,
        items: Vec<T>,
        work: F,
    ) -> Vec<R>
    where
        T: Send,
        R: Send,
        F: Fn(T) -> R + Sync,
    {
        info!("begin worker pool run: {} items, {} workers", items.len(), self.size);
        let timer = Instant::now();

        let results: Vec<R> = match &self.pool {
            None => items.into_iter().map(&work).collect(),
            Some(pool) => {
                let work = &work;
                let (tx, rx) = channel();
                pool.scope(move |s| {
                    for item in items {
                        let tx = tx.clone();
                        s.spawn(move |_| {
                            tx.send(work(item)).expect("error sending data via tx");
                        });
                    }
                });
                rx.iter().collect()
            }
        };

        info!("end worker pool run: {:?}", timer.elapsed());
        results
    }
}
