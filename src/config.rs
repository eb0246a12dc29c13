use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: u64,
}

/// Credentials for the seeded admin account. Optional; when absent no admin
/// is created and /admin routes are unreachable.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
    pub admin: Option<AdminConfig>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "haryawn".into()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "haryawn-users".into()),
            // Single expiry policy for every issued token: one day.
            ttl_minutes: parse_ttl_minutes(std::env::var("JWT_TTL_MINUTES").ok()),
        };
        let admin = match (std::env::var("ADMIN_EMAIL"), std::env::var("ADMIN_PASSWORD")) {
            (Ok(email), Ok(password)) => Some(AdminConfig { email, password }),
            _ => None,
        };
        Ok(Self {
            database_url,
            jwt,
            admin,
        })
    }
}

const DEFAULT_TTL_MINUTES: u64 = 60 * 24;

/// Non-numeric, negative or zero values fall back to the default rather than
/// wrapping into a huge TTL.
fn parse_ttl_minutes(raw: Option<String>) -> u64 {
    raw.and_then(|v| v.parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(DEFAULT_TTL_MINUTES)
}
