//! # Contact Service 設定
//!
//! 環境変数から問い合わせ受付サーバーの設定を読み込む。
//!
//! 読み込みは [`ContactConfig::from_lookup`] に集約し、テストでは
//! プロセス環境変数を書き換えずに任意の値を渡せるようにしている。

use std::{env, str::FromStr, time::Duration};

use thiserror::Error;

/// 送信元の既定値
const DEFAULT_FROM_ADDRESS: &str = "Rajo Solutions <onboarding@resend.dev>";
/// 運営者の宛先の既定値
const DEFAULT_OPERATOR_ADDRESS: &str = "info.rajosolutions@gmail.com";
/// ブランド名の既定値
const DEFAULT_BRAND_NAME: &str = "Rajo Solutions";
/// Resend API の既定エンドポイント
const DEFAULT_RESEND_API_BASE_URL: &str = "https://api.resend.com";
/// メール送信のタイムアウト既定値（秒）
const DEFAULT_MAIL_API_TIMEOUT_SECS: u64 = 10;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// 数値として解釈できない
    #[error("{name} は有効な数値である必要があります: {value}")]
    InvalidNumber { name: &'static str, value: String },

    /// タイムアウトに 0 が指定された
    #[error("MAIL_API_TIMEOUT_SECS は 1 以上である必要があります")]
    ZeroTimeout,

    /// 未知の送信バックエンド
    #[error("NOTIFICATION_BACKEND は resend / smtp / noop のいずれかである必要があります: {0}")]
    UnknownBackend(String),
}

/// Contact Service サーバーの設定
#[derive(Debug, Clone)]
pub struct ContactConfig {
    /// バインドアドレス
    pub host:         String,
    /// ポート番号
    pub port:         u16,
    /// 通知設定
    pub notification: NotificationConfig,
}

/// 送信バックエンド
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum NotificationBackend {
    /// Resend の HTTP API 経由で送信（本番）
    Resend,
    /// Mailpit（開発）/ SMTP サーバー経由で送信
    Smtp,
    /// 送信しない（ログ出力のみ）
    Noop,
}

/// 通知機能の設定
///
/// `NOTIFICATION_BACKEND` 環境変数で送信バックエンドを切り替える:
/// - `resend`: Resend API 経由で送信（既定）
/// - `smtp`: Mailpit（開発）/ SMTP サーバー経由で送信
/// - `noop`: 送信しない（ログ出力のみ）
#[derive(Clone)]
pub struct NotificationConfig {
    pub backend:             NotificationBackend,
    /// Resend API キー。未設定ならリクエスト時に「未設定」エラーを返す
    pub resend_api_key:      Option<String>,
    pub resend_api_base_url: String,
    /// 1 通あたりの送信タイムアウト
    pub timeout:             Duration,
    /// SMTP ホスト（backend=smtp の場合に使用）
    pub smtp_host:           String,
    /// SMTP ポート（backend=smtp の場合に使用）
    pub smtp_port:           u16,
    /// 送信元（表示名付きアドレス）
    pub from_address:        String,
    /// 運営者の宛先
    pub operator_address:    String,
    /// 件名・本文に埋め込むブランド名
    pub brand_name:          String,
}

impl std::fmt::Debug for NotificationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationConfig")
            .field("backend", &self.backend)
            .field(
                "resend_api_key",
                &self.resend_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("resend_api_base_url", &self.resend_api_base_url)
            .field("timeout", &self.timeout)
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("from_address", &self.from_address)
            .field("operator_address", &self.operator_address)
            .field("brand_name", &self.brand_name)
            .finish()
    }
}

impl ContactConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の参照関数から設定を読み込む
    ///
    /// 空文字の値は未設定として扱う。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Ok(Self {
            host:         get("CONTACT_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port:         parse_or("CONTACT_PORT", get("CONTACT_PORT"), 8080)?,
            notification: NotificationConfig::from_lookup(&get)?,
        })
    }
}

impl NotificationConfig {
    /// 環境変数から通知設定を読み込む
    fn from_lookup(get: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let backend = match get("NOTIFICATION_BACKEND") {
            Some(value) => NotificationBackend::from_str(value.trim())
                .map_err(|_| ConfigError::UnknownBackend(value))?,
            None => NotificationBackend::Resend,
        };

        let timeout_secs = parse_or(
            "MAIL_API_TIMEOUT_SECS",
            get("MAIL_API_TIMEOUT_SECS"),
            DEFAULT_MAIL_API_TIMEOUT_SECS,
        )?;
        if timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(Self {
            backend,
            resend_api_key: get("RESEND_API_KEY"),
            resend_api_base_url: get("RESEND_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_RESEND_API_BASE_URL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
            smtp_host: get("SMTP_HOST").unwrap_or_else(|| "localhost".to_string()),
            smtp_port: parse_or("SMTP_PORT", get("SMTP_PORT"), 1025)?,
            from_address: get("NOTIFICATION_FROM_ADDRESS")
                .unwrap_or_else(|| DEFAULT_FROM_ADDRESS.to_string()),
            operator_address: get("NOTIFICATION_OPERATOR_ADDRESS")
                .unwrap_or_else(|| DEFAULT_OPERATOR_ADDRESS.to_string()),
            brand_name: get("NOTIFICATION_BRAND_NAME")
                .unwrap_or_else(|| DEFAULT_BRAND_NAME.to_string()),
        })
    }
}

fn parse_or<T: FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ContactConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ContactConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_未設定の場合は既定値を使う() {
        let config = load(&[]).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.notification.backend, NotificationBackend::Resend);
        assert_eq!(config.notification.resend_api_key, None);
        assert_eq!(
            config.notification.resend_api_base_url,
            "https://api.resend.com"
        );
        assert_eq!(config.notification.timeout, Duration::from_secs(10));
        assert_eq!(
            config.notification.from_address,
            "Rajo Solutions <onboarding@resend.dev>"
        );
        assert_eq!(
            config.notification.operator_address,
            "info.rajosolutions@gmail.com"
        );
        assert_eq!(config.notification.brand_name, "Rajo Solutions");
    }

    #[test]
    fn test_環境変数の値で上書きできる() {
        let config = load(&[
            ("CONTACT_PORT", "3000"),
            ("NOTIFICATION_BACKEND", "smtp"),
            ("RESEND_API_KEY", "re_123"),
            ("MAIL_API_TIMEOUT_SECS", "3"),
            ("SMTP_PORT", "2525"),
            ("NOTIFICATION_OPERATOR_ADDRESS", "ops@example.com"),
        ])
        .unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.notification.backend, NotificationBackend::Smtp);
        assert_eq!(config.notification.resend_api_key.as_deref(), Some("re_123"));
        assert_eq!(config.notification.timeout, Duration::from_secs(3));
        assert_eq!(config.notification.smtp_port, 2525);
        assert_eq!(config.notification.operator_address, "ops@example.com");
    }

    #[test]
    fn test_空のapiキーは未設定として扱う() {
        let config = load(&[("RESEND_API_KEY", "  ")]).unwrap();

        assert_eq!(config.notification.resend_api_key, None);
    }

    #[test]
    fn test_不正なポート番号はエラーになる() {
        let result = load(&[("CONTACT_PORT", "eighty")]);

        assert_eq!(
            result.unwrap_err(),
            ConfigError::InvalidNumber {
                name:  "CONTACT_PORT",
                value: "eighty".to_string(),
            }
        );
    }

    #[test]
    fn test_タイムアウトに0を指定するとエラーになる() {
        let result = load(&[("MAIL_API_TIMEOUT_SECS", "0")]);

        assert_eq!(result.unwrap_err(), ConfigError::ZeroTimeout);
    }

    #[test]
    fn test_未知のバックエンドはエラーになる() {
        let result = load(&[("NOTIFICATION_BACKEND", "ses")]);

        assert_eq!(
            result.unwrap_err(),
            ConfigError::UnknownBackend("ses".to_string())
        );
    }

    #[test]
    fn test_debug出力でapiキーがマスクされる() {
        let config = load(&[("RESEND_API_KEY", "re_secret")]).unwrap();

        let debug = format!("{:?}", config.notification);

        assert!(!debug.contains("re_secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
