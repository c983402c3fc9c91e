use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub stores: StoresConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ApiConfig {
    /// Full server origin, e.g. `http://backoffice.local:8080`.
    pub base_url: Option<String>,
    /// Talks to the page's own host on this port instead of its origin.
    /// Ignored when `base_url` is set.
    pub port: Option<u16>,
}

/// Which record store backs a module.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    #[default]
    Remote,
    Local,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default)]
pub struct StoresConfig {
    pub guest_requests: StoreKind,
    pub inventory: StoreKind,
    pub maintenance: StoreKind,
    pub housekeeping: StoreKind,
    pub purchase_orders: StoreKind,
    pub accounts: StoreKind,
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[api]

[stores]
guest_requests = "remote"
inventory = "remote"
maintenance = "remote"
housekeeping = "remote"
purchase_orders = "remote"
accounts = "remote"
"#;

impl AppConfig {
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        Ok(config)
    }

    pub fn embedded() -> anyhow::Result<Self> {
        Self::from_toml_str(DEFAULT_CONFIG)
    }

    /// Parses an override document, falling back to the embedded default
    /// when there is none or it does not parse.
    pub fn with_override(contents: Option<&str>) -> anyhow::Result<Self> {
        if let Some(contents) = contents {
            match Self::from_toml_str(contents) {
                Ok(config) => {
                    log::info!("Using configuration override");
                    return Ok(config);
                }
                Err(e) => log::warn!("Ignoring invalid configuration override: {}", e),
            }
        }
        Self::embedded()
    }

    /// Server origin for REST calls.
    ///
    /// `origin` is the page's `location.origin`, `protocol` its
    /// `location.protocol` (with trailing colon) and `hostname` its
    /// `location.hostname`. Without `base_url` or `port` the page's own
    /// origin is used.
    pub fn api_base(&self, origin: &str, protocol: &str, hostname: &str) -> String {
        if let Some(url) = self.api.base_url.as_deref().map(str::trim) {
            if !url.is_empty() {
                return url.trim_end_matches('/').to_string();
            }
        }
        match self.api.port {
            Some(port) => format!("{}//{}:{}", protocol, hostname, port),
            None => origin.trim_end_matches('/').to_string(),
        }
    }
}
