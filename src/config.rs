//! Runtime configuration for the DetectFake service.
//!
//! Configuration comes from CLI flags with environment-variable fallbacks;
//! all fields have sensible defaults so the server starts with no arguments.

use clap::Parser;

/// Command-line and environment configuration for the server binary.
#[derive(Parser, Debug, Clone)]
#[command(name = "detectfake", about = "Chat screenshot authenticity analysis service")]
pub struct ServerConfig {
    /// Host address to bind the HTTP server to.
    #[arg(long, env = "DETECTFAKE_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind the HTTP server to.
    #[arg(long, env = "DETECTFAKE_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Message returned by the `/api/ping` health route.
    #[arg(long, env = "PING_MESSAGE", default_value = "ping")]
    pub ping_message: String,

    /// Emit logs as JSON instead of human-readable lines.
    #[arg(long, env = "DETECTFAKE_LOG_JSON")]
    pub log_json: bool,
}

impl ServerConfig {
    /// The socket address string the server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            ping_message: "ping".to_string(),
            log_json: false,
        }
    }
}
