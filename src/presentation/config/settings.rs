use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    pub server: ServerSettings,
    pub azure_openai: AzureOpenAiSettings,
    pub session: SessionSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Connection and sampling settings for the chat endpoint. The connection
/// values stay optional here; the client validates them at call time so a
/// misconfigured server still boots and reports itself unconfigured on
/// `/health`.
#[derive(Debug, Clone, Deserialize)]
pub struct AzureOpenAiSettings {
    pub endpoint: Option<String>,
    pub deployment: Option<String>,
    pub api_key: Option<String>,
    pub temperature: f32,
    pub top_p: f32,
    pub disable_sampling: bool,
    pub sampling_deny_patterns: Vec<String>,
}

impl Default for AzureOpenAiSettings {
    fn default() -> Self {
        Self {
            endpoint: None,
            deployment: None,
            api_key: None,
            temperature: 0.3,
            top_p: 0.95,
            disable_sampling: false,
            // Reasoning-model families accept only default sampling.
            sampling_deny_patterns: vec!["^o[0-9]".to_string(), "reasoning".to_string()],
        }
    }
}

impl AzureOpenAiSettings {
    pub fn is_configured(&self) -> bool {
        let set = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
        set(&self.endpoint) && set(&self.deployment) && set(&self.api_key)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    pub max_age_days: i64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self { max_age_days: 90 }
    }
}

impl Settings {
    /// Build settings from environment variables, falling back to defaults.
    /// Azure injects these via App Settings in production.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            server: ServerSettings {
                host: env_or("SERVER_HOST", defaults.server.host),
                port: env_parsed("SERVER_PORT", defaults.server.port),
            },
            azure_openai: AzureOpenAiSettings {
                endpoint: std::env::var("AZURE_OPENAI_ENDPOINT").ok(),
                deployment: std::env::var("AZURE_OPENAI_DEPLOYMENT_NAME").ok(),
                api_key: std::env::var("AZURE_OPENAI_API_KEY").ok(),
                temperature: env_parsed(
                    "AZURE_OPENAI_TEMPERATURE",
                    defaults.azure_openai.temperature,
                ),
                top_p: env_parsed("AZURE_OPENAI_TOP_P", defaults.azure_openai.top_p),
                disable_sampling: std::env::var("AZURE_OPENAI_DISABLE_SAMPLING")
                    .map(|v| v.to_lowercase() == "true")
                    .unwrap_or(defaults.azure_openai.disable_sampling),
                sampling_deny_patterns: std::env::var("AZURE_OPENAI_SAMPLING_DENY_PATTERNS")
                    .map(|v| {
                        v.split(',')
                            .map(|p| p.trim().to_string())
                            .filter(|p| !p.is_empty())
                            .collect()
                    })
                    .unwrap_or(defaults.azure_openai.sampling_deny_patterns),
            },
            session: SessionSettings {
                max_age_days: env_parsed("SESSION_MAX_AGE_DAYS", defaults.session.max_age_days),
            },
        }
    }
}

fn env_or(key: &str, default: String) -> String {
    std::env::var(key).unwrap_or(default)
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
