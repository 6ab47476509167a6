// API client configuration
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub api: ApiSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    /// Base origin of the prediction service, e.g. "http://localhost:8000".
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_seconds: u64,
}

/// Load the API configuration: built-in defaults, then an optional
/// `config/api` file, then `AGRI`-prefixed environment variables
/// (`AGRI__API__BASE_URL` overrides everything).
pub fn load_api_config() -> anyhow::Result<ApiConfig> {
    let settings = config::Config::builder()
        .set_default("api.base_url", "http://localhost:8000")?
        .set_default("api.timeout_seconds", 30)?
        .add_source(config::File::with_name("config/api").required(false))
        .add_source(
            config::Environment::with_prefix("AGRI")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_settings_deserialize() {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(
                "[api]\nbase_url = \"https://predict.example.org\"\ntimeout_seconds = 10\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();
        let cfg: ApiConfig = settings.try_deserialize().unwrap();
        assert_eq!(cfg.api.base_url, "https://predict.example.org");
        assert_eq!(cfg.api.timeout_seconds, 10);
    }

    #[test]
    fn defaults_apply_without_a_file() {
        let settings = config::Config::builder()
            .set_default("api.base_url", "http://localhost:8000")
            .unwrap()
            .set_default("api.timeout_seconds", 30)
            .unwrap()
            .build()
            .unwrap();
        let cfg: ApiConfig = settings.try_deserialize().unwrap();
        assert_eq!(cfg.api.base_url, "http://localhost:8000");
        assert_eq!(cfg.api.timeout_seconds, 30);
    }
}
