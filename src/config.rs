//! Client Configuration
//!
//! Settings supplied by the hosting page next to its data. Every field has a
//! default; invalid values fall back to it with a warning.

use log::{warn, LevelFilter};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

pub const DEFAULT_VALIDATE_ENDPOINT: &str = "/api/private/validate_voter/";
pub const DEFAULT_VOTER_ROWS_PER_PAGE: usize = 10;
pub const DEFAULT_USER_ROWS_PER_PAGE: usize = 3;
pub const DEFAULT_TEAM_ROWS_PER_PAGE: usize = 3;
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 10_000;

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Path of the validate/invalidate endpoint, relative to the page origin
    pub validate_endpoint: String,
    pub voter_rows_per_page: usize,
    pub user_rows_per_page: usize,
    pub team_rows_per_page: usize,
    pub request_timeout_ms: u32,
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            validate_endpoint: DEFAULT_VALIDATE_ENDPOINT.to_string(),
            voter_rows_per_page: DEFAULT_VOTER_ROWS_PER_PAGE,
            user_rows_per_page: DEFAULT_USER_ROWS_PER_PAGE,
            team_rows_per_page: DEFAULT_TEAM_ROWS_PER_PAGE,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            log_level: "info".to_string(),
        }
    }
}

impl ClientConfig {
    /// Read the page's `config` object field by field.
    ///
    /// Missing fields take their default. A field of the wrong type (or a
    /// `config` that is not an object at all) is logged and also defaulted,
    /// so a bad setting never costs the rest of the page data.
    pub fn from_value(value: Value) -> Self {
        let defaults = Self::default();
        let map = match value {
            Value::Object(map) => map,
            Value::Null => return defaults,
            other => {
                warn!("[Config] Expected a config object, got {other}; using defaults");
                return defaults;
            }
        };

        Self {
            validate_endpoint: field(&map, "validate_endpoint", defaults.validate_endpoint),
            voter_rows_per_page: field(&map, "voter_rows_per_page", defaults.voter_rows_per_page),
            user_rows_per_page: field(&map, "user_rows_per_page", defaults.user_rows_per_page),
            team_rows_per_page: field(&map, "team_rows_per_page", defaults.team_rows_per_page),
            request_timeout_ms: field(&map, "request_timeout_ms", defaults.request_timeout_ms),
            log_level: field(&map, "log_level", defaults.log_level),
        }
    }

    /// Replace unusable values with their defaults
    pub fn sanitized(mut self) -> Self {
        self.voter_rows_per_page =
            positive_or_default("voter_rows_per_page", self.voter_rows_per_page, DEFAULT_VOTER_ROWS_PER_PAGE);
        self.user_rows_per_page =
            positive_or_default("user_rows_per_page", self.user_rows_per_page, DEFAULT_USER_ROWS_PER_PAGE);
        self.team_rows_per_page =
            positive_or_default("team_rows_per_page", self.team_rows_per_page, DEFAULT_TEAM_ROWS_PER_PAGE);

        if self.request_timeout_ms == 0 {
            warn!("[Config] request_timeout_ms must be positive, using default: {DEFAULT_REQUEST_TIMEOUT_MS}");
            self.request_timeout_ms = DEFAULT_REQUEST_TIMEOUT_MS;
        }

        if self.validate_endpoint.trim().is_empty() {
            warn!("[Config] validate_endpoint is empty, using default: {DEFAULT_VALIDATE_ENDPOINT}");
            self.validate_endpoint = DEFAULT_VALIDATE_ENDPOINT.to_string();
        }

        if self.log_level.parse::<LevelFilter>().is_err() {
            warn!("[Config] Invalid log_level {:?}, using default: info", self.log_level);
            self.log_level = "info".to_string();
        }

        self
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    /// Absolute endpoint URL for the given page origin (e.g. `https://example.org`)
    pub fn validate_url(&self, origin: &str) -> String {
        let origin = origin.trim_end_matches('/');
        if self.validate_endpoint.starts_with('/') {
            format!("{origin}{}", self.validate_endpoint)
        } else {
            format!("{origin}/{}", self.validate_endpoint)
        }
    }
}

fn field<T: DeserializeOwned + std::fmt::Debug>(map: &Map<String, Value>, key: &str, default: T) -> T {
    let Some(raw) = map.get(key) else {
        return default;
    };
    match T::deserialize(raw) {
        Ok(value) => value,
        Err(e) => {
            warn!("[Config] Invalid {key} {raw}: {e}; using default: {default:?}");
            default
        }
    }
}

fn positive_or_default(key: &str, value: usize, default: usize) -> usize {
    if value == 0 {
        warn!("[Config] {key} must be positive, using default: {default}");
        default
    } else {
        value
    }
}
