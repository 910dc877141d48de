use std::collections::HashMap;

use super::{ExtractQueryParams, RecordTransform, EXTRACT_QUERY_PARAMS};
use crate::extract::ExtractError;

/// Builds a transform from its definition-time arguments
pub type TransformFactory = fn(&[&str]) -> Result<Box<dyn RecordTransform>, ExtractError>;

/// Transforms available to a host, by name
///
/// The registry is an ordinary value owned by the host; there is no
/// process-wide instance.
#[derive(Default)]
pub struct TransformRegistry {
    factories: HashMap<String, TransformFactory>,
}

impl TransformRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `factory` under `name`
    ///
    /// Returns `false`, leaving the existing entry in place, if the name is
    /// already taken.
    pub fn register(&mut self, name: &str, factory: TransformFactory) -> bool {
        if self.factories.contains_key(name) {
            tracing::warn!(name, "transform already registered");
            return false;
        }
        self.factories.insert(name.to_string(), factory);
        tracing::debug!(name, "registered transform");
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Instantiate the transform registered under `name`
    ///
    /// # Errors
    ///
    /// Returns `ExtractError::Configuration` if nothing is registered under
    /// `name`, or whatever the factory returns for bad arguments.
    pub fn create(&self, name: &str, args: &[&str]) -> Result<Box<dyn RecordTransform>, ExtractError> {
        let factory = self.factories.get(name).ok_or_else(|| {
            ExtractError::Configuration(format!("Unknown transform: {}", name))
        })?;
        factory(args)
    }
}

fn extract_query_params_factory(args: &[&str]) -> Result<Box<dyn RecordTransform>, ExtractError> {
    Ok(Box::new(ExtractQueryParams::from_args(args)?))
}

/// Register the transforms this crate provides
pub fn register_builtin(registry: &mut TransformRegistry) {
    registry.register(EXTRACT_QUERY_PARAMS, extract_query_params_factory);
}
