use reqwest::Url;

use crate::catalog::{schema_dump_path, DOCS_PATH, SCHEMAS};
use crate::protocol::{Links, SchemaLink};

/// Handle `links`: schema dump and documentation URLs under `base`.
pub fn handle(base: &Url) -> Links {
    let resolve = |path: &str| {
        base.join(path)
            .map(String::from)
            .unwrap_or_else(|_| path.to_string())
    };
    Links {
        schemas: SCHEMAS
            .iter()
            .map(|s| SchemaLink {
                value: s.value.to_string(),
                label: s.label.to_string(),
                url: resolve(&schema_dump_path(s.value)),
            })
            .collect(),
        docs: resolve(DOCS_PATH),
    }
}
