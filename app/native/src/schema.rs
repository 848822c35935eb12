//! JSON Schema generation for the configuration file.
//!
//! Editors that understand JSON Schema can validate and autocomplete a
//! `config.jsonc` that references this schema through `$schema`.

use schemars::{Schema, schema_for};

use crate::config::PixelpanesConfig;

/// Identifier embedded in the generated schema, relative to the repository
/// root where `pixelpanes schema` output is kept.
pub const SCHEMA_ID: &str = "pixelpanes.schema.json";

/// Generates the configuration JSON Schema.
#[must_use]
pub fn generate_schema() -> Schema {
    let mut schema = schema_for!(PixelpanesConfig);
    schema.insert("$id".to_string(), SCHEMA_ID.into());
    schema
}

/// Generates the configuration JSON Schema as pretty-printed JSON.
#[must_use]
pub fn print_schema() -> String {
    serde_json::to_string_pretty(&generate_schema()).unwrap_or_else(|_| "{}".to_string())
}
