//! Query-string extraction for record-processing pipelines.
//!
//! The core is [`extract::QueryParamExtractor`], a stateless parser that turns
//! a URL or bare query string into a map of parameters. Everything else in the
//! crate adapts that core to a host: the record model, a transform trait with
//! an explicit registry, line sources, and the `qpx` command-line tool.

pub mod config;
pub mod extract;
pub mod models;
pub mod services;
pub mod transform;
pub mod utils;
