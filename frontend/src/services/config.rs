use shared::ClientConfig;

use super::logging::Logger;

/// Prefix of the `<meta name="...">` tags the host page can set
const META_PREFIX: &str = "expense-tracker:";

/// Read the client configuration from the host page, falling back to the
/// defaults when a value is malformed.
pub fn load_config() -> ClientConfig {
    match ClientConfig::from_lookup(meta_content) {
        Ok(config) => {
            Logger::debug_with_component(
                "config",
                &format!(
                    "api base url {:?}, {} expenses, window {:?}",
                    config.api_base_url, config.expenses_limit, config.statistics_window
                ),
            );
            config
        }
        Err(e) => {
            Logger::warn_with_component("config", &format!("Invalid configuration, using defaults: {}", e));
            ClientConfig::default()
        }
    }
}

fn meta_content(key: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}{}\"]", META_PREFIX, key);
    document
        .query_selector(&selector)
        .ok()
        .flatten()?
        .get_attribute("content")
}
