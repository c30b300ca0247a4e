use std::sync::Arc;

use deadpool_sqlite::Pool;

use crate::cli::Cli;

mod pool;

/// Everything the handlers need, built once in `main` and cloned per request
#[derive(Debug, Clone)]
pub struct AppState {
    pub pool: Pool,
    pub args: Arc<Cli>,
}

impl AppState {
    pub fn new(pool: Pool, args: Cli) -> Self {
        Self {
            pool,
            args: Arc::new(args),
        }
    }
}
