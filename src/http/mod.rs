//! HTTP protocol implementation.
//!
//! This module implements a minimal HTTP/1.0 server: one request per
//! connection, no keep-alive, no pipelining.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The main connection handler implementing the request-response state machine
//! - **`parser`**: Parses incoming HTTP requests from byte buffers
//! - **`request`**: HTTP request representation
//! - **`response`**: HTTP response representation, including the canned error responses
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`mime`**: Content-Type detection based on file extensions
//!
//! # Connection State Machine
//!
//! Each client connection makes exactly one pass through a state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │  Receiving  │ ← One read of the incoming request data
//!        └──────┬──────┘
//!               │ Request bytes received (valid or not)
//!               ▼
//!        ┌──────────────────┐
//!        │   Responding     │ ← Resolve the target against the document root
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               └─ Closed (always; HTTP/1.0, no keep-alive)
//! ```
//!
//! A peer that closes before sending anything, or any socket/file I/O error,
//! short-circuits straight to Closed with nothing sent.

pub mod request;
pub mod response;
pub mod parser;
pub mod connection;
pub mod writer;
pub mod mime;
