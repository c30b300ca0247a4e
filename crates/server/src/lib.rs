pub mod cli;

pub mod db;

mod errors;
pub use errors::*;

mod payload;
pub use payload::*;

mod state;
pub use state::*;

pub mod routes;
