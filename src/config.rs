/// Runtime configuration, read once at startup from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// Public base URL embedded in invitation deep links.
    pub base_url: String,
    /// Sender address stamped on outbound invitations.
    pub from_email: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr = match std::env::var("BIND_ADDR") {
            Ok(val) if !val.is_empty() => val,
            _ => {
                log::warn!("No BIND_ADDR set — defaulting to 127.0.0.1:8080");
                "127.0.0.1:8080".to_string()
            }
        };

        let base_url = match std::env::var("BASE_URL") {
            Ok(val) if !val.is_empty() => val.trim_end_matches('/').to_string(),
            _ => {
                log::warn!("No BASE_URL set — form links will point at http://localhost:8080");
                "http://localhost:8080".to_string()
            }
        };

        let from_email = match std::env::var("FROM_EMAIL") {
            Ok(val) if !val.is_empty() => val,
            _ => "no-reply@formbox.local".to_string(),
        };

        AppConfig { bind_addr, base_url, from_email }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            bind_addr: "127.0.0.1:8080".to_string(),
            base_url: "http://localhost:8080".to_string(),
            from_email: "no-reply@formbox.local".to_string(),
        }
    }
}
