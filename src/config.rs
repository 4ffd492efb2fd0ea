use reqwest::Url;

use crate::catalog::EXAMPLE_PATH;

/// Default validator service address.
const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// How frames are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderFormat {
    #[default]
    Json,
    Text,
}

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    pub example_url: Url,
    pub render: RenderFormat,
}

impl ClientConfig {
    /// Load configuration from environment.
    ///
    /// - `VALIDATOR_BASE_URL` (optional, default `http://localhost:8080`): validator service
    /// - `VALIDATOR_EXAMPLE_URL` (optional, default `{base}/example.json`): example document
    /// - `VALIDATOR_RENDER` (optional, `json` or `text`, default `json`): frame format
    pub fn from_env() -> Result<Self, String> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Same as [`ClientConfig::from_env`], reading variables through `lookup`.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let base = lookup("VALIDATOR_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&base)
            .map_err(|e| format!("VALIDATOR_BASE_URL is not a valid URL ({e}): {base}"))
            .and_then(with_trailing_slash)?;

        let example_url = match lookup("VALIDATOR_EXAMPLE_URL") {
            Some(raw) => Url::parse(&raw)
                .map_err(|e| format!("VALIDATOR_EXAMPLE_URL is not a valid URL ({e}): {raw}"))?,
            None => base_url
                .join(EXAMPLE_PATH)
                .map_err(|e| format!("cannot derive example URL from {base_url}: {e}"))?,
        };

        let render = match lookup("VALIDATOR_RENDER").as_deref() {
            None | Some("json") => RenderFormat::Json,
            Some("text") => RenderFormat::Text,
            Some(other) => {
                return Err(format!("VALIDATOR_RENDER must be `json` or `text`, got `{other}`"))
            }
        };

        Ok(Self {
            base_url,
            example_url,
            render,
        })
    }
}

/// Endpoint paths are joined relative to the base, so its path must end in
/// `/` or the last segment would be replaced.
fn with_trailing_slash(mut url: Url) -> Result<Url, String> {
    if url.cannot_be_a_base() {
        return Err(format!("VALIDATOR_BASE_URL cannot carry a path: {url}"));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
