//! Static file serving
//!
//! This module maps request targets onto files below the document root
//! and decides which response each request gets.

pub mod responder;
pub mod root;

pub use responder::respond;
pub use root::{DocumentRoot, Resolved};
