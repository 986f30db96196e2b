//! Webroot - Static File Server
//!
//! Core library for serving files below a document root over HTTP/1.1.

pub mod config;
pub mod http;
pub mod server;
pub mod static_files;
