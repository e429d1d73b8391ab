//! # Student API Client
//!
//! Rust counterpart of the browser client: the same operations, over HTTP,
//! with typed results.
//!
//! ```ignore
//! use rollcall::client::StudentClient;
//!
//! let client = StudentClient::new("http://127.0.0.1:9393")?;
//! let students = client.search_records("jo").await?;
//! ```

mod errors;
mod student_client;

pub use errors::{ClientError, ClientResult};
pub use student_client::StudentClient;
