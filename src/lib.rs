pub mod api;
pub mod config;
pub mod error;
pub mod fitness;
pub mod ga;
pub mod pool;
pub mod ranking;
// cmd and reports are binary modules (wired up in main.rs),
// the library surface ends at api.rs.
