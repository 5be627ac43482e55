use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub overpass: OverpassConfig,
    pub search: SearchConfig,
    pub integrations: IntegrationsConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

/// Settings for the Overpass interpreter used by the nearby search
#[derive(Debug, Clone)]
pub struct OverpassConfig {
    pub api_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

/// Search radius bounds, in meters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub default_radius: u32,
    pub max_radius: u32,
}

/// Optional third-party integrations.
///
/// These are loaded so deployments can carry their settings, but no endpoint
/// calls them yet.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)]
pub struct IntegrationsConfig {
    pub twilio: Option<TwilioConfig>,
    pub sendgrid: Option<SendGridConfig>,
    pub google_maps_api_key: Option<String>,
    pub firebase: Option<FirebaseConfig>,
}

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: String,
    pub phone_number: String,
    pub emergency_phone: String,
}

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct SendGridConfig {
    pub api_key: String,
    pub from_email: String,
}

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct FirebaseConfig {
    pub api_key: String,
    pub project_id: String,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            overpass: OverpassConfig::from_env()?,
            search: SearchConfig::from_env()?,
            integrations: IntegrationsConfig::from_env(),
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 1024 * 1024; // 1MB

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        let cors_allowed_origins = parse_origins(
            &env::var("CORS_ALLOWED_ORIGINS")
                .or_else(|_| env::var("ALLOWED_ORIGINS"))
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
        );

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    const DEFAULT_URL: &'static str = "sqlite://database.db?mode=rwc";
    const DEFAULT_MAX_CONNECTIONS: u32 = 5;
    const DEFAULT_MIN_CONNECTIONS: u32 = 1;
    const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
    const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600; // 10 minutes
    const DEFAULT_MAX_LIFETIME_SECS: u64 = 1800; // 30 minutes

    pub fn from_env() -> Result<Self, String> {
        let url = env::var("DATABASE_URL").unwrap_or_else(|_| Self::DEFAULT_URL.to_string());

        let max_connections = env_number("DB_MAX_CONNECTIONS", Self::DEFAULT_MAX_CONNECTIONS)?;
        let min_connections = env_number("DB_MIN_CONNECTIONS", Self::DEFAULT_MIN_CONNECTIONS)?;
        let acquire_timeout_secs =
            env_number("DB_ACQUIRE_TIMEOUT_SECS", Self::DEFAULT_ACQUIRE_TIMEOUT_SECS)?;
        let idle_timeout_secs = env_number("DB_IDLE_TIMEOUT_SECS", Self::DEFAULT_IDLE_TIMEOUT_SECS)?;
        let max_lifetime_secs = env_number("DB_MAX_LIFETIME_SECS", Self::DEFAULT_MAX_LIFETIME_SECS)?;

        Ok(Self {
            url,
            max_connections,
            min_connections,
            acquire_timeout_secs,
            idle_timeout_secs,
            max_lifetime_secs,
        })
    }
}

impl OverpassConfig {
    pub const DEFAULT_API_URL: &'static str = "https://overpass-api.de/api/interpreter";
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    pub fn from_env() -> Result<Self, String> {
        let api_url =
            env::var("OVERPASS_API_URL").unwrap_or_else(|_| Self::DEFAULT_API_URL.to_string());
        let timeout_secs = env_number("OVERPASS_TIMEOUT", Self::DEFAULT_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err("OVERPASS_TIMEOUT must be greater than zero".to_string());
        }

        let user_agent = env::var("OVERPASS_USER_AGENT").unwrap_or_else(|_| {
            format!("FacilityFinderCore/{}", env!("CARGO_PKG_VERSION"))
        });

        Ok(Self {
            api_url,
            timeout: Duration::from_secs(timeout_secs),
            user_agent,
        })
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_radius: Self::DEFAULT_RADIUS,
            max_radius: Self::DEFAULT_MAX_RADIUS,
        }
    }
}

impl SearchConfig {
    const DEFAULT_RADIUS: u32 = 5000;
    const DEFAULT_MAX_RADIUS: u32 = 15000;

    pub fn from_env() -> Result<Self, String> {
        let default_radius = env_number("DEFAULT_SEARCH_RADIUS", Self::DEFAULT_RADIUS)?;
        let max_radius = env_number("MAX_SEARCH_RADIUS", Self::DEFAULT_MAX_RADIUS)?;
        Self::new(default_radius, max_radius)
    }

    pub fn new(default_radius: u32, max_radius: u32) -> Result<Self, String> {
        if default_radius == 0 || max_radius == 0 {
            return Err("Search radius settings must be greater than zero".to_string());
        }
        if default_radius > max_radius {
            return Err(format!(
                "DEFAULT_SEARCH_RADIUS ({}) must not exceed MAX_SEARCH_RADIUS ({})",
                default_radius, max_radius
            ));
        }

        Ok(Self {
            default_radius,
            max_radius,
        })
    }
}

impl IntegrationsConfig {
    pub fn from_env() -> Self {
        let twilio = env_flag("TWILIO_ENABLED").then(|| TwilioConfig {
            account_sid: env::var("TWILIO_ACCOUNT_SID").unwrap_or_default(),
            auth_token: env::var("TWILIO_AUTH_TOKEN").unwrap_or_default(),
            phone_number: env::var("TWILIO_PHONE_NUMBER").unwrap_or_default(),
            emergency_phone: env::var("TWILIO_EMERGENCY_PHONE").unwrap_or_default(),
        });

        let sendgrid = env_flag("SENDGRID_ENABLED").then(|| SendGridConfig {
            api_key: env::var("SENDGRID_API_KEY").unwrap_or_default(),
            from_email: env::var("SENDGRID_FROM_EMAIL").unwrap_or_default(),
        });

        let google_maps_api_key = env::var("GOOGLE_MAPS_API_KEY")
            .ok()
            .filter(|s| !s.is_empty());

        let firebase = env_flag("FIREBASE_ENABLED").then(|| FirebaseConfig {
            api_key: env::var("FIREBASE_API_KEY").unwrap_or_default(),
            project_id: env::var("FIREBASE_PROJECT_ID").unwrap_or_default(),
        });

        Self {
            twilio,
            sendgrid,
            google_maps_api_key,
            firebase,
        }
    }

    /// Names of the integrations that are switched on, for the startup log
    pub fn enabled(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.twilio.is_some() {
            names.push("twilio");
        }
        if self.sendgrid.is_some() {
            names.push("sendgrid");
        }
        if self.google_maps_api_key.is_some() {
            names.push("google_maps");
        }
        if self.firebase.is_some() {
            names.push("firebase");
        }
        names
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title =
            env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Facility Finder API".to_string());
        let version =
            env::var("SWAGGER_VERSION").unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string());
        let description = env::var("SWAGGER_DESCRIPTION").unwrap_or_else(|_| {
            "Nearby medical facility search, appointments and emergency alerts".to_string()
        });

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

fn env_number<T>(key: &str, default: T) -> Result<T, String>
where
    T: std::str::FromStr + ToString,
{
    env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .trim()
        .parse::<T>()
        .map_err(|_| format!("{} must be a valid number", key))
}

fn env_flag(key: &str) -> bool {
    env::var(key)
        .map(|v| v.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_trims_and_skips_empty() {
        let origins = parse_origins(" http://localhost:3000 ,,https://example.com ");
        assert_eq!(
            origins,
            vec![
                "http://localhost:3000".to_string(),
                "https://example.com".to_string()
            ]
        );
    }

    #[test]
    fn test_search_config_rejects_default_above_max() {
        assert!(SearchConfig::new(20_000, 15_000).is_err());
        assert!(SearchConfig::new(0, 15_000).is_err());
        assert_eq!(
            SearchConfig::new(3000, 15_000),
            Ok(SearchConfig {
                default_radius: 3000,
                max_radius: 15_000
            })
        );
    }

    #[test]
    fn test_swagger_credentials_require_both_parts() {
        let mut swagger = SwaggerConfig {
            username: Some("admin".to_string()),
            password: None,
            title: String::new(),
            version: String::new(),
            description: String::new(),
        };
        assert_eq!(swagger.credentials(), None);

        swagger.password = Some("secret".to_string());
        assert_eq!(swagger.credentials(), Some("admin:secret".to_string()));
    }
}
