//! HTTP protocol implementation.
//!
//! This module implements the small slice of HTTP/1.1 the server needs:
//! one GET request per connection, answered and then closed.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: Drives a single connection through the request-response state machine
//! - **`parser`**: Extracts the request line from the raw bytes
//! - **`request`**: HTTP request and method representation
//! - **`response`**: Status codes and response representation
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`mime`**: MIME type detection based on file extensions
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for the request line (bounded, with timeout)
//!        └──────┬──────┘
//!               │ Request line received (or timeout with bytes buffered)
//!               ├─ Malformed → Writing (400)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Resolve target, build response
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response, shut down, drain unread input
//!        └──────┬───────────┘
//!               │ Response sent
//!               ▼
//!            Closed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//! use webroot::http::connection::Connection;
//! use webroot::static_files::DocumentRoot;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let root = Arc::new(DocumentRoot::new("./www")?);
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let root = Arc::clone(&root);
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, root, Duration::from_secs(5));
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
