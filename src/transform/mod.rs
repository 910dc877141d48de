//! Adapters between the extractor and a record-processing host
//!
//! A host drives transforms through the [`RecordTransform`] trait and finds
//! them through a [`TransformRegistry`] it owns. Nothing is registered
//! implicitly: the host calls [`register_builtin`] once at startup.
//!
//! ```
//! use qpx::models::Record;
//! use qpx::transform::{register_builtin, TransformRegistry, EXTRACT_QUERY_PARAMS};
//!
//! let mut registry = TransformRegistry::new();
//! register_builtin(&mut registry);
//!
//! let transform = registry.create(EXTRACT_QUERY_PARAMS, &["UTF-8", "true"]).unwrap();
//! let out = transform.apply(Some(&Record::single("?foo=baz"))).unwrap();
//! assert_eq!(out, Some(serde_json::json!({"foo": "baz"})));
//! ```

mod extract_query_params;
mod registry;

use serde_json::Value;

use crate::extract::ExtractError;
use crate::models::{FieldSchema, Record};

pub use extract_query_params::{ExtractQueryParams, EXTRACT_QUERY_PARAMS};
pub use registry::{register_builtin, TransformFactory, TransformRegistry};

/// A per-record transform as seen by the host
pub trait RecordTransform: Send + Sync {
    /// Name the transform is registered under
    fn name(&self) -> &'static str;

    /// Schema of the output field, given the input schema if the host has one
    fn output_schema(&self, input: Option<&[FieldSchema]>) -> FieldSchema;

    /// Transform one record. `Ok(None)` means the record carried no data.
    fn apply(&self, record: Option<&Record>) -> Result<Option<Value>, ExtractError>;
}
