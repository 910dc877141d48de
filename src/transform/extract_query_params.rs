use serde_json::Value;

use super::RecordTransform;
use crate::config::DEFAULT_OUTPUT_FIELD;
use crate::extract::{ExtractError, QueryParamExtractor, DEFAULT_ENCODING};
use crate::models::{FieldSchema, Record};
use crate::utils::parse_flag;

/// Registered name of [`ExtractQueryParams`]
pub const EXTRACT_QUERY_PARAMS: &str = "ExtractQueryParams";

/// Record transform that parses a single text field into a parameter map
///
/// The output field takes the name of the input field, or `query` when the
/// host has no schema for its input.
#[derive(Debug, Clone, Default)]
pub struct ExtractQueryParams {
    extractor: QueryParamExtractor,
}

impl ExtractQueryParams {
    pub fn new(extractor: QueryParamExtractor) -> Self {
        Self { extractor }
    }

    /// Build from the string arguments a host passes at definition time
    ///
    /// Accepts `[]`, `[encoding]` or `[encoding, detect_double_encoding]`.
    ///
    /// # Errors
    ///
    /// Returns `ExtractError::Configuration` for an unknown encoding or more
    /// than two arguments.
    pub fn from_args(args: &[&str]) -> Result<Self, ExtractError> {
        if args.len() > 2 {
            return Err(ExtractError::Configuration(format!(
                "{} takes at most 2 arguments (encoding, detect double encoding), got {}",
                EXTRACT_QUERY_PARAMS,
                args.len()
            )));
        }

        let encoding = args.first().copied().unwrap_or(DEFAULT_ENCODING);
        let detect = parse_flag(args.get(1).copied(), false);
        let extractor = QueryParamExtractor::new(encoding, detect)?;
        tracing::debug!(
            charset = extractor.charset().name(),
            detect_double_encoding = detect,
            "configured {}",
            EXTRACT_QUERY_PARAMS
        );
        Ok(Self::new(extractor))
    }

    pub fn extractor(&self) -> &QueryParamExtractor {
        &self.extractor
    }
}

impl RecordTransform for ExtractQueryParams {
    fn name(&self) -> &'static str {
        EXTRACT_QUERY_PARAMS
    }

    fn output_schema(&self, input: Option<&[FieldSchema]>) -> FieldSchema {
        input
            .and_then(|fields| fields.first())
            .and_then(|field| field.alias.clone())
            .map(FieldSchema::named)
            .unwrap_or_else(|| FieldSchema::named(DEFAULT_OUTPUT_FIELD))
    }

    fn apply(&self, record: Option<&Record>) -> Result<Option<Value>, ExtractError> {
        Ok(self.extractor.extract(record)?.map(|params| params.to_json()))
    }
}
