//! Backend location and credentials.
//!
//! Values are baked in at build time (`EQUIPVIZ_API_URL`, `EQUIPVIZ_API_TOKEN`) because the
//! WASM build has no process environment. Native builds additionally honour the same
//! variables at runtime so a packaged desktop binary can be pointed elsewhere.

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api/";

pub const URL_VAR: &str = "EQUIPVIZ_API_URL";
pub const TOKEN_VAR: &str = "EQUIPVIZ_API_TOKEN";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    token: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let mut base_url = base_url.into().trim().to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            base_url,
            token: token.into().trim().to_string(),
        }
    }

    /// Resolve configuration from build-time values, overridden by the runtime
    /// environment on native targets.
    pub fn from_env() -> Self {
        let base_url = runtime_var(URL_VAR)
            .or_else(|| option_env!("EQUIPVIZ_API_URL").map(str::to_string))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let token = runtime_var(TOKEN_VAR)
            .or_else(|| option_env!("EQUIPVIZ_API_TOKEN").map(str::to_string))
            .unwrap_or_default();

        if token.is_empty() {
            tracing::warn!("{TOKEN_VAR} is not set; backend requests will be unauthenticated");
        }

        Self::new(base_url, token)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `path` is relative to the base URL, e.g. `summary/7/`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Value of the `Authorization` header sent with every request.
    pub fn authorization(&self) -> String {
        format!("Token {}", self.token)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, "")
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(target_arch = "wasm32")]
fn runtime_var(_name: &str) -> Option<String> {
    None
}
