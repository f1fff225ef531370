use serde::Deserialize;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_JWT_REALM: &str = "cardstore";
const DEFAULT_CARDS_PAGE_SIZE: u64 = 20;
const DEFAULT_QUERY_KEYWORD_LIMIT: usize = 10;

/// Runtime configuration.
///
/// Read from the JSON file named by `CONFIG_FILE` when that variable is set, otherwise
/// from environment variables. Call `dotenvy::dotenv()` first to pick up a `.env` file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,

    pub database_url: String,
    /// Redis URL. Caching is disabled when absent.
    #[serde(default)]
    pub cache_url: Option<String>,

    /// HMAC key used to sign session tokens.
    pub auth_key: String,
    #[serde(default = "default_jwt_realm")]
    pub jwt_realm: String,

    #[serde(default = "default_cards_page_size")]
    pub cards_page_size: u64,
    #[serde(default = "default_query_keyword_limit")]
    pub query_keyword_limit: usize,
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        match std::env::var("CONFIG_FILE") {
            Ok(path) => Self::from_file(&path),
            Err(_) => Self::from_env(),
        }
    }

    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_file(path: &str) -> Result<Self, AppError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_string(),
            source,
        })?;

        let config = serde_json::from_str(&contents).map_err(|source| ConfigError::ParseFile {
            path: path.to_string(),
            source,
        })?;

        Ok(config)
    }

    /// Builds the configuration from an arbitrary variable source.
    fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(default_host),
            port: parse_var("PORT", &required("PORT")?)?,
            database_url: required("DB_CONNECTION_URI")?,
            cache_url: lookup("CACHE_CONNECTION_URI").filter(|url| !url.is_empty()),
            auth_key: required("AUTH_KEY")?,
            jwt_realm: lookup("JWT_REALM").unwrap_or_else(default_jwt_realm),
            cards_page_size: match lookup("DB_CARDS_PAGE_SIZE") {
                Some(value) => parse_var("DB_CARDS_PAGE_SIZE", &value)?,
                None => DEFAULT_CARDS_PAGE_SIZE,
            },
            query_keyword_limit: match lookup("STORE_QUERY_KEYWORD_LIMIT") {
                Some(value) => parse_var("STORE_QUERY_KEYWORD_LIMIT", &value)?,
                None => DEFAULT_QUERY_KEYWORD_LIMIT,
            },
        })
    }

    /// Socket address string the server binds to.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
    })
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_jwt_realm() -> String {
    DEFAULT_JWT_REALM.to_string()
}

fn default_cards_page_size() -> u64 {
    DEFAULT_CARDS_PAGE_SIZE
}

fn default_query_keyword_limit() -> usize {
    DEFAULT_QUERY_KEYWORD_LIMIT
}
