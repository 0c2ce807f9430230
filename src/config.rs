/*
 * Responsibility
 * - 環境変数の読み込み (PORT, APP_ENV, 認証失敗時のステータス方針, HTTP 制限値)
 * - 設定値のバリデーション (不正なら起動失敗)
 */
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(value: Option<String>) -> Self {
        match value
            .unwrap_or_else(|| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// `Authorization` が `ApiKey <token>` として読めなかった時に返すステータス
///
/// - ヘッダ自体が無い場合は常に 401
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedStatus {
    #[default]
    Unauthorized,
    BadRequest,
}

impl MalformedStatus {
    fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "401" => Some(Self::Unauthorized),
            "400" => Some(Self::BadRequest),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpLimits {
    pub body_limit_bytes: usize,
    pub timeout: Duration,
}

impl Default for HttpLimits {
    fn default() -> Self {
        Self {
            body_limit_bytes: 1024 * 1024,
            timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub malformed_status: MalformedStatus,
    pub http: HttpLimits,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `lookup` で値を引いて Config を組み立てる (テストでは環境変数を触らずに使う)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = match lookup("PORT") {
            Some(v) => v.trim().parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => 3000,
        };
        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        let app_env = AppEnv::parse(lookup("APP_ENV"));

        let malformed_status = match lookup("AUTH_MALFORMED_STATUS") {
            Some(v) => MalformedStatus::parse(&v)
                .ok_or(ConfigError::Invalid("AUTH_MALFORMED_STATUS"))?,
            None => MalformedStatus::default(),
        };

        let defaults = HttpLimits::default();

        let body_limit_bytes = match lookup("HTTP_BODY_LIMIT_BYTES") {
            Some(v) => v
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::Invalid("HTTP_BODY_LIMIT_BYTES"))?,
            None => defaults.body_limit_bytes,
        };

        let timeout = match lookup("HTTP_TIMEOUT_SECONDS") {
            Some(v) => v
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .ok_or(ConfigError::Invalid("HTTP_TIMEOUT_SECONDS"))?,
            None => defaults.timeout,
        };

        Ok(Self {
            addr,
            app_env,
            malformed_status,
            http: HttpLimits {
                body_limit_bytes,
                timeout,
            },
        })
    }
}
