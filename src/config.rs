/// Runtime configuration, loaded once at startup from environment
/// variables (with `.env` support via dotenvy in `main`).
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// Public base URL used when building confirm/reject links.
    pub public_url: String,
    /// Fixed operator address that receives collaboration notifications.
    pub operator_email: String,
    /// TikTok handle scraped for the follower/likes stats.
    pub tiktok_username: String,
    /// Base URL of the scraped site. Overridable for test setups.
    pub tiktok_base_url: String,
    /// HTTP mail relay endpoint. Absent means the mailer runs in
    /// disabled mode (logs instead of sending).
    pub mail_api_url: Option<String>,
    pub mail_api_token: Option<String>,
    pub mail_from: String,
}

impl Config {
    pub fn from_env() -> Self {
        let mail_api_url = std::env::var("MAIL_API_URL").ok().filter(|v| !v.is_empty());
        if mail_api_url.is_none() {
            log::warn!("No MAIL_API_URL set — notifications will be logged, not sent");
        }
        Self {
            bind_addr: env_or("BIND_ADDR", "127.0.0.1:8080"),
            public_url: env_or("PUBLIC_URL", "http://127.0.0.1:8080"),
            operator_email: env_or("OPERATOR_EMAIL", "syintyamustika@gmail.com"),
            tiktok_username: env_or("TIKTOK_USERNAME", "ssyinnnn"),
            tiktok_base_url: env_or("TIKTOK_BASE_URL", "https://www.tiktok.com"),
            mail_api_url,
            mail_api_token: std::env::var("MAIL_API_TOKEN").ok().filter(|v| !v.is_empty()),
            mail_from: env_or("MAIL_FROM", "noreply@localhost"),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    match std::env::var(key) {
        Ok(val) if !val.is_empty() => val,
        _ => default.to_string(),
    }
}
