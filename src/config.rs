use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub supabase: SupabaseSettings,
    #[serde(default)]
    pub fcm: FcmSettings,
    #[serde(default)]
    pub tables: TableSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}

/// Backend credentials; the server boots without them and the handlers
/// answer with configuration errors instead
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SupabaseSettings {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub service_role_key: Option<String>,
}

/// FCM service-account credential, as the raw JSON blob Google issues
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FcmSettings {
    #[serde(default)]
    pub service_account: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TableSettings {
    #[serde(default = "default_profiles_table")]
    pub profiles: String,
    #[serde(default = "default_push_tokens_table")]
    pub push_tokens: String,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            profiles: default_profiles_table(),
            push_tokens: default_push_tokens_table(),
        }
    }
}

fn default_profiles_table() -> String {
    "profiles".to_string()
}
fn default_push_tokens_table() -> String {
    "fcm_tokens".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml, config/local.toml)
    /// 3. Environment variables (prefixed with SERVICELINK__)
    /// 4. The unprefixed variables the original deployment used
    ///    (SUPABASE_URL, SUPABASE_SERVICE_ROLE_KEY, FIREBASE_SERVICE_ACCOUNT)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("SERVICELINK")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }
}

/// Apply the platform environment variables the original functions read
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let supabase_url = env::var("SUPABASE_URL").ok();
    let service_role_key = env::var("SUPABASE_SERVICE_ROLE_KEY").ok();
    let service_account = env::var("FIREBASE_SERVICE_ACCOUNT").ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(url) = supabase_url {
        builder = builder.set_override("supabase.url", url)?;
    }
    if let Some(key) = service_role_key {
        builder = builder.set_override("supabase.service_role_key", key)?;
    }
    if let Some(account) = service_account {
        builder = builder.set_override("fcm.service_account", account)?;
    }

    builder.build()
}
