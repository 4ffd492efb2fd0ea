use serde::Serialize;

/// A selectable JSON schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SchemaOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Schemas the validator service knows about. Changing this list requires a new release.
pub const SCHEMAS: [SchemaOption; 4] = [
    SchemaOption { value: "plans", label: "Plans" },
    SchemaOption { value: "providers", label: "Providers" },
    SchemaOption { value: "drugs", label: "Drugs" },
    SchemaOption { value: "index", label: "Index" },
];

/// Supported schema years.
pub const YEARS: [u16; 2] = [2016, 2017];

/// Initial panel selection.
pub const DEFAULT_SCHEMA: &str = "plans";
pub const DEFAULT_YEAR: u16 = 2017;

/// Selection applied by the "load example" action.
pub const EXAMPLE_SCHEMA: &str = "plans";
pub const EXAMPLE_YEAR: u16 = 2016;

/// Service paths, relative to the configured base URL.
pub const VALIDATE_PATH: &str = "validate";
pub const EXAMPLE_PATH: &str = "example.json";
pub const DOCS_PATH: &str = "docs";

/// Path of the raw schema dump for `schema`, relative to the base URL.
pub fn schema_dump_path(schema: &str) -> String {
    format!("schema/{schema}")
}
