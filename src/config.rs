use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    /// Pause before a chat reply is delivered, shown as "typing".
    pub reply_delay_ms: u64,
    pub session_ttl_minutes: i64,
    pub contact_form_url: String,
    pub estimate_form_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            reply_delay_ms: env::var("REPLY_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            session_ttl_minutes: env::var("SESSION_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|m: &i64| *m > 0)
                .unwrap_or(30),
            contact_form_url: env::var("CONTACT_FORM_URL").unwrap_or_default(),
            estimate_form_url: env::var("ESTIMATE_FORM_URL").unwrap_or_default(),
        }
    }
}
