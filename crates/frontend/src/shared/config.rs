//! Runtime configuration of the back office.
//!
//! The embedded TOML default can be overridden per browser by storing a TOML
//! document under the `hotelOpsConfig` localStorage key.

use contracts::shared::config::AppConfig;
use leptos::prelude::*;

pub const CONFIG_OVERRIDE_KEY: &str = "hotelOpsConfig";

fn read_override() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(CONFIG_OVERRIDE_KEY)
        .ok()?
}

pub fn load_config() -> AppConfig {
    match AppConfig::with_override(read_override().as_deref()) {
        Ok(config) => {
            log::debug!("Configuration loaded: {:?}", config.stores);
            config
        }
        Err(e) => {
            log::error!("Embedded configuration is invalid: {}", e);
            AppConfig::default()
        }
    }
}

/// Configuration provided by `App`, read afresh when rendered outside it.
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_else(load_config)
}
