#[cfg(test)]
#[path = "../../tests/unit/utils/environment_test.rs"]
mod environment_test;

use crate::utils::{GenericResult, ThreadPool};
use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the solver.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Specifies how many threads are used when independent problems are solved together.
#[derive(Clone, Default)]
pub struct Parallelism {
    thread_pool: Option<Arc<ThreadPool>>,
}

impl Parallelism {
    /// Creates a new instance of `Parallelism` which runs work on a dedicated pool of given size.
    pub fn new(num_threads: usize) -> GenericResult<Self> {
        if num_threads == 0 {
            return Err("amount of threads should be positive".into());
        }

        Ok(Self { thread_pool: Some(Arc::new(ThreadPool::new(num_threads)?)) })
    }

    /// Returns amount of threads in the dedicated pool, if any.
    pub fn num_threads(&self) -> Option<usize> {
        self.thread_pool.as_ref().map(|pool| pool.num_threads())
    }

    /// Executes operation on the dedicated pool or on the global one when no pool is configured.
    pub fn execute<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        match self.thread_pool.as_ref() {
            Some(pool) => pool.execute(op),
            None => op(),
        }
    }
}

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// Keeps data parallelism settings.
    pub parallelism: Parallelism,

    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment`.
    pub fn new(parallelism: Parallelism, logger: InfoLogger) -> Self {
        Self { parallelism, logger }
    }

    /// Creates an instance of `Environment` which writes nothing to the log.
    pub fn new_silent() -> Self {
        Self { logger: Arc::new(|_| ()), ..Self::default() }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(Parallelism::default(), Arc::new(|msg| println!("{msg}")))
    }
}
