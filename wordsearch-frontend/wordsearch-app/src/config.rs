use leptos::prelude::*;
use wordsearch_api_types::API_PATH;

/// Search backend host used when `WORDSEARCH_API_URL` isn't set at build time.
pub const DEFAULT_API_HOST: &str = "http://localhost:8888";
pub const DEFAULT_RESULTS_TARGET: &str = "hidden-block";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Full url of the search endpoint, without a query string.
    pub api_base: String,
    /// Element id that receives the rendered result.
    pub results_target: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        // wasm has no process environment, so the override is baked in at compile time
        let api_base = option_env!("WORDSEARCH_API_URL")
            .filter(|url| !url.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("{DEFAULT_API_HOST}{API_PATH}"));
        Self {
            api_base,
            results_target: DEFAULT_RESULTS_TARGET.to_string(),
        }
    }
}

pub fn provide_widget_config(config: WidgetConfig) {
    provide_context(config);
}

pub fn use_widget_config() -> WidgetConfig {
    use_context::<WidgetConfig>().unwrap_or_default()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults_point_at_local_backend() {
        let config = WidgetConfig::default();
        if option_env!("WORDSEARCH_API_URL").is_none() {
            assert_eq!(config.api_base, "http://localhost:8888/api");
        }
        assert_eq!(config.results_target, "hidden-block");
    }

    #[test]
    fn falls_back_without_context() {
        let owner = Owner::new();
        owner.with(|| {
            assert_eq!(use_widget_config(), WidgetConfig::default());
            let custom = WidgetConfig {
                api_base: "http://search.internal/api".to_string(),
                results_target: "results".to_string(),
            };
            provide_widget_config(custom.clone());
            assert_eq!(use_widget_config(), custom);
        });
    }
}
