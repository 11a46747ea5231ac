//! Static file serving
//!
//! This module resolves request targets against the document root and turns
//! them into responses: access checks first, then a whole-file read.

pub mod responder;

pub use responder::StaticResponder;
