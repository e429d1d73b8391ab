//! rollcall - in-memory student records over HTTP
//!
//! - `store`: the record store and its CRUD/search contract
//! - `http_server`: JSON API, management UI, health and metrics
//! - `client`: typed Rust client for the JSON API
//! - `observability`: events and counters
//! - `cli`: command line entry points

pub mod cli;
pub mod client;
pub mod http_server;
pub mod observability;
pub mod store;
