//! Server settings from environment variables.
//!
//! The canvas server is configured through its process environment,
//! optionally merged with a `.env` file. Values that are missing, empty or
//! unparsable fall back to built-in defaults.
//!
//! Numbers are read with [`parse_int`], but the result is typed. A value
//! outside the target type's range (a negative `CAPTCHA_TIME`, a `PORT`
//! above 65535) falls back to the default instead of being kept, and
//! `ADMIN_IDS` entries without a leading integer are dropped rather than
//! kept as placeholders.
//!
//! Uses the `dotenvy` crate for `.env` file parsing.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Environment variable names.
pub mod keys {
    pub const PORT: &str = "PORT";
    pub const HOST: &str = "HOST";
    pub const GMAIL_USER: &str = "GMAIL_USER";
    pub const GMAIL_PW: &str = "GMAIL_PW";
    pub const TILE_FOLDER: &str = "TILE_FOLDER";
    pub const ASSET_SERVER: &str = "ASSET_SERVER";
    pub const CAPTCHA_URL: &str = "CAPTCHA_URL";
    pub const USE_XREALIP: &str = "USE_XREALIP";
    pub const BACKUP_URL: &str = "BACKUP_URL";
    pub const BACKUP_DIR: &str = "BACKUP_DIR";
    pub const USE_PROXYCHECK: &str = "USE_PROXYCHECK";
    pub const REDIS_URL: &str = "REDIS_URL";
    pub const MYSQL_HOST: &str = "MYSQL_HOST";
    pub const MYSQL_DATABASE: &str = "MYSQL_DATABASE";
    pub const MYSQL_USER: &str = "MYSQL_USER";
    pub const MYSQL_PW: &str = "MYSQL_PW";
    pub const GUILDED_INVITE: &str = "GUILDED_INVITE";
    pub const LOG_MYSQL: &str = "LOG_MYSQL";
    pub const HOURLY_EVENT: &str = "HOURLY_EVENT";
    pub const APISOCKET_KEY: &str = "APISOCKET_KEY";
    pub const ADMIN_IDS: &str = "ADMIN_IDS";
    pub const GOOGLE_TRACKING_ID: &str = "GOOGLE_TRACKING_ID";
    pub const CAPTCHA_TIME: &str = "CAPTCHA_TIME";
    pub const CAPTCHA_TIMEOUT: &str = "CAPTCHA_TIMEOUT";
    pub const SESSION_SECRET: &str = "SESSION_SECRET";
}

/// Parses an environment file and returns a map of key-value pairs.
///
/// Returns an empty map if the file doesn't exist or can't be read.
#[must_use]
pub fn parse_env_file(path: &Path) -> HashMap<String, String> {
    match dotenvy::from_path_iter(path) {
        Ok(iter) => iter.filter_map(Result::ok).collect(),
        Err(err) => {
            if path.exists() {
                tracing::warn!(path = %path.display(), error = %err, "failed to read env file");
            }
            HashMap::new()
        }
    }
}

/// Parses the leading integer of `value`.
///
/// Leading whitespace and a sign are accepted and parsing stops at the first
/// non-digit, so `"42px"` is `42`. Returns `None` when no digit leads.
#[must_use]
pub fn parse_int(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    let magnitude: i64 = rest[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// An OAuth application registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthClient {
    pub client_id: String,
    pub client_secret: String,
}

/// OAuth registrations per login provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthConfig {
    pub facebook: OAuthClient,
    pub discord: OAuthClient,
    pub google: OAuthClient,
    pub vk: OAuthClient,
    pub reddit: OAuthClient,
}

/// Resolved server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub gmail_user: Option<String>,
    pub gmail_pw: Option<String>,
    pub tile_folder: PathBuf,
    pub asset_server: String,
    pub captcha_url: Option<String>,
    pub use_xrealip: bool,
    pub backup_url: Option<String>,
    pub backup_dir: Option<String>,
    pub use_proxycheck: bool,
    pub redis_url: String,
    pub mysql_host: String,
    pub mysql_database: String,
    pub mysql_user: String,
    pub mysql_pw: String,
    pub guilded_invite: String,
    pub log_mysql: bool,
    pub hourly_event: bool,
    pub apisocket_key: String,
    pub admin_ids: Vec<i64>,
    pub google_tracking_id: Option<String>,
    pub auth: AuthConfig,
    /// Minutes after which a captcha is shown again.
    pub captcha_time: u32,
    /// Seconds a user has to solve a captcha.
    pub captcha_timeout: u32,
    pub session_secret: String,
}

/// Lookup over a key/value source where empty values count as unset.
struct Vars<'a>(&'a HashMap<String, String>);

impl Vars<'_> {
    fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str).filter(|v| !v.is_empty())
    }

    fn string(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or(default).to_string()
    }

    fn optional(&self, key: &str) -> Option<String> { self.get(key).map(str::to_string) }

    /// Integer flag: set when the value parses to a non-zero integer.
    fn flag(&self, key: &str) -> bool { self.get(key).and_then(parse_int).is_some_and(|v| v != 0) }

    /// Leading integer of the value as `T`, or `default` when the value is
    /// missing, unparsable, zero or out of range for `T`.
    fn number<T: TryFrom<i64>>(&self, key: &str, default: T) -> T {
        self.get(key)
            .and_then(parse_int)
            .filter(|v| *v != 0)
            .and_then(|v| T::try_from(v).ok())
            .unwrap_or(default)
    }

    fn oauth(&self, id_key: &str, secret_key: &str) -> OAuthClient {
        OAuthClient {
            client_id: self.string(id_key, "dummy"),
            client_secret: self.string(secret_key, "dummy"),
        }
    }
}

impl ServerConfig {
    /// Resolve settings from a key/value source.
    #[must_use]
    pub fn from_vars(vars: &HashMap<String, String>) -> Self {
        let vars = Vars(vars);

        Self {
            port: vars.number(keys::PORT, 80),
            host: vars.string(keys::HOST, "localhost"),
            gmail_user: vars.optional(keys::GMAIL_USER),
            gmail_pw: vars.optional(keys::GMAIL_PW),
            tile_folder: PathBuf::from(vars.string(keys::TILE_FOLDER, "tiles")),
            asset_server: vars.string(keys::ASSET_SERVER, "."),
            captcha_url: vars.optional(keys::CAPTCHA_URL),
            use_xrealip: vars.get(keys::USE_XREALIP).is_some(),
            backup_url: vars.optional(keys::BACKUP_URL),
            backup_dir: vars.optional(keys::BACKUP_DIR),
            use_proxycheck: vars.flag(keys::USE_PROXYCHECK),
            redis_url: vars.string(keys::REDIS_URL, "redis://localhost:6380"),
            mysql_host: vars.string(keys::MYSQL_HOST, "localhost"),
            mysql_database: vars.string(keys::MYSQL_DATABASE, "pixelplanet"),
            mysql_user: vars.string(keys::MYSQL_USER, "pixelplanet"),
            mysql_pw: vars.string(keys::MYSQL_PW, "password"),
            guilded_invite: vars.string(keys::GUILDED_INVITE, "https://www.guilded.gg/"),
            log_mysql: vars.flag(keys::LOG_MYSQL),
            hourly_event: vars.flag(keys::HOURLY_EVENT),
            apisocket_key: vars.string(keys::APISOCKET_KEY, "changethis"),
            admin_ids: vars
                .get(keys::ADMIN_IDS)
                .map(|ids| ids.split(',').filter_map(parse_int).collect())
                .unwrap_or_default(),
            google_tracking_id: vars.optional(keys::GOOGLE_TRACKING_ID),
            auth: AuthConfig {
                facebook: vars.oauth("FACEBOOK_APP_ID", "FACEBOOK_APP_SECRET"),
                discord: vars.oauth("DISCORD_CLIENT_ID", "DISCORD_CLIENT_SECRET"),
                google: vars.oauth("GOOGLE_CLIENT_ID", "GOOGLE_CLIENT_SECRET"),
                vk: vars.oauth("VK_CLIENT_ID", "VK_CLIENT_SECRET"),
                reddit: vars.oauth("REDDIT_CLIENT_ID", "REDDIT_CLIENT_SECRET"),
            },
            captcha_time: vars.number(keys::CAPTCHA_TIME, 30),
            captcha_timeout: vars.number(keys::CAPTCHA_TIMEOUT, 120),
            session_secret: vars.string(keys::SESSION_SECRET, "dummy"),
        }
    }

    /// Resolve settings from the process environment, on top of an optional
    /// `.env` file. Process variables win over the file.
    #[must_use]
    pub fn load(env_file: Option<&Path>) -> Self {
        let mut vars = env_file.map(parse_env_file).unwrap_or_default();
        vars.extend(std::env::vars());
        Self::from_vars(&vars)
    }
}

impl Default for ServerConfig {
    fn default() -> Self { Self::from_vars(&HashMap::new()) }
}
