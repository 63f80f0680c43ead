mod components;

use designhub_client::config::{ANON_KEY_VAR, URL_VAR};
use designhub_client::{BackendConfig, ConfigError};

use components::app::{App, ConfigFailure, ConfigProblem};

/// Backend credentials baked in at build time. Browser builds have no process
/// environment, so these come from `option_env!` when the bundle is compiled.
fn build_time_config() -> Result<BackendConfig, ConfigError> {
    BackendConfig::from_lookup(|var| {
        let value = match var {
            URL_VAR => option_env!("DESIGNHUB_SUPABASE_URL"),
            ANON_KEY_VAR => option_env!("DESIGNHUB_SUPABASE_ANON_KEY"),
            _ => None,
        };
        value.map(String::from)
    })
}

fn main() {
    match build_time_config() {
        Ok(config) => dioxus::LaunchBuilder::new().with_context(config).launch(App),
        Err(e) => dioxus::LaunchBuilder::new()
            .with_context(ConfigProblem(e.to_string()))
            .launch(ConfigFailure),
    }
}
