use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub mail: MailConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
    /// Include the provider's error text as `details` in 500 responses.
    /// Meant for local development only.
    pub expose_error_details: bool,
}

/// Transactional email provider settings
#[derive(Debug, Clone)]
pub struct MailConfig {
    /// Bearer credential for the provider API
    pub api_key: String,
    /// Full URL of the provider's send endpoint
    pub api_url: String,
    /// Sender address shown on notifications
    pub from_address: String,
    /// Fixed recipients of every notification
    pub recipients: Vec<String>,
    /// Site name rendered in the notification header and footer
    pub site_name: String,
    /// UTC offset used for the "Sent at" timestamp, in minutes
    pub timezone_offset_minutes: i32,
    /// Suffix printed after the timestamp (e.g. "IST")
    pub timezone_label: String,
    /// Optional transport timeout; the HTTP client default applies when unset
    pub request_timeout: Option<Duration>,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub enabled: bool,
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    /// Reads the process environment; `.env` is loaded by `main` beforehand.
    pub fn from_env() -> Result<Self, String> {
        Ok(Config {
            app: AppConfig::from_env()?,
            mail: MailConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_PORT: u16 = 3001;
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 100 * 1024; // 100KB
    const DEFAULT_CORS_ALLOWED_ORIGINS: &'static str =
        "http://localhost:5173,http://localhost:3000,http://127.0.0.1:5173";

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| Self::DEFAULT_PORT.to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        let cors_allowed_origins = split_list(
            &env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| Self::DEFAULT_CORS_ALLOWED_ORIGINS.to_string()),
        );

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        let expose_error_details = parse_bool("EXPOSE_ERROR_DETAILS", false)?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
            expose_error_details,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl MailConfig {
    const DEFAULT_API_URL: &'static str = "https://api.resend.com/emails";
    const DEFAULT_FROM_ADDRESS: &'static str = "onboarding@resend.dev";
    const DEFAULT_RECIPIENTS: &'static str = "raomigule@gmail.com";
    const DEFAULT_SITE_NAME: &'static str = "TopAi24";
    const DEFAULT_TIMEZONE_OFFSET_MINUTES: i32 = 330; // UTC+05:30
    const DEFAULT_TIMEZONE_LABEL: &'static str = "IST";

    pub fn from_env() -> Result<Self, String> {
        let api_key = env::var("RESEND_API_KEY")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| "RESEND_API_KEY environment variable is required".to_string())?;

        let api_url = env::var("MAIL_API_URL").unwrap_or_else(|_| Self::DEFAULT_API_URL.into());

        let from_address =
            env::var("MAIL_FROM").unwrap_or_else(|_| Self::DEFAULT_FROM_ADDRESS.to_string());

        let recipients =
            split_list(&env::var("MAIL_TO").unwrap_or_else(|_| Self::DEFAULT_RECIPIENTS.into()));
        if recipients.is_empty() {
            return Err("MAIL_TO must contain at least one recipient".to_string());
        }

        let site_name =
            env::var("MAIL_SITE_NAME").unwrap_or_else(|_| Self::DEFAULT_SITE_NAME.to_string());

        let timezone_offset_minutes = env::var("MAIL_TIMEZONE_OFFSET_MINUTES")
            .unwrap_or_else(|_| Self::DEFAULT_TIMEZONE_OFFSET_MINUTES.to_string())
            .parse::<i32>()
            .map_err(|_| "MAIL_TIMEZONE_OFFSET_MINUTES must be a valid number".to_string())?;
        if timezone_offset_minutes.abs() >= 24 * 60 {
            return Err("MAIL_TIMEZONE_OFFSET_MINUTES must be within +/- 1439".to_string());
        }

        let timezone_label = env::var("MAIL_TIMEZONE_LABEL")
            .unwrap_or_else(|_| Self::DEFAULT_TIMEZONE_LABEL.to_string());

        let request_timeout = env::var("MAIL_REQUEST_TIMEOUT_SECS")
            .ok()
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<u64>()
                    .map(Duration::from_secs)
                    .map_err(|_| "MAIL_REQUEST_TIMEOUT_SECS must be a valid number".to_string())
            })
            .transpose()?;

        Ok(Self {
            api_key,
            api_url,
            from_address,
            recipients,
            site_name,
            timezone_offset_minutes,
            timezone_label,
            request_timeout,
        })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        let enabled = parse_bool("SWAGGER_ENABLED", true)?;
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "TopAi24 Contact API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "Contact form relay for the TopAi24 website".to_string());

        Ok(Self {
            enabled,
            title,
            version,
            description,
        })
    }
}

/// Split a comma-separated list, trimming entries and dropping empty ones
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_bool(key: &str, default: bool) -> Result<bool, String> {
    match env::var(key) {
        Ok(value) => parse_bool_value(&value).ok_or_else(|| format!("{} must be true or false", key)),
        Err(_) => Ok(default),
    }
}

fn parse_bool_value(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list_trims_and_drops_empty() {
        assert_eq!(
            split_list(" a@b.com, ,c@d.com,"),
            vec!["a@b.com".to_string(), "c@d.com".to_string()]
        );
        assert!(split_list("").is_empty());
    }

    #[test]
    fn test_parse_bool_value() {
        assert_eq!(parse_bool_value("true"), Some(true));
        assert_eq!(parse_bool_value(" ON "), Some(true));
        assert_eq!(parse_bool_value("0"), Some(false));
        assert_eq!(parse_bool_value(""), Some(false));
        assert_eq!(parse_bool_value("development"), None);
    }

    #[test]
    fn test_server_address() {
        let config = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 3001,
            cors_allowed_origins: vec![],
            max_request_body_size: 1024,
            expose_error_details: false,
        };
        assert_eq!(config.server_address(), "0.0.0.0:3001");
    }
}
