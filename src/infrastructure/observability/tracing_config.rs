use crate::presentation::config::Environment;

/// Configuration for tracing initialization. JSON output defaults on in
/// production, where the platform log pipeline expects structured lines.
pub struct TracingConfig {
    pub environment: Environment,
    pub json_format: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            json_format: std::env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or_else(|_| environment.is_prod()),
        }
    }
}
