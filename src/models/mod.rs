pub mod field_schema;
pub mod query_params;
pub mod record;

pub use field_schema::FieldSchema;
pub use query_params::QueryParams;
pub use record::Record;
