//! Staticd - Minimal HTTP/1.0 Static File Server
//!
//! Core library for connection handling and static file serving.

pub mod config;
pub mod http;
pub mod server;
pub mod static_files;
