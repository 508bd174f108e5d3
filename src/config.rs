use anyhow::{Context, Result};
use std::net::SocketAddr;

#[derive(Debug, Clone)]
pub struct Config {
    // HTTP server
    pub host: String,
    pub port: u16,

    // Static export
    pub export_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: match std::env::var("PORT") {
                Ok(v) => v
                    .parse()
                    .with_context(|| format!("PORT must be a port number, got '{}'", v))?,
                Err(_) => 8080,
            },

            export_dir: std::env::var("EXPORT_DIR").unwrap_or_else(|_| "dist".to_string()),
        })
    }

    /// Address the server binds to.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid bind address {}:{}", self.host, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");
        std::env::remove_var("EXPORT_DIR");
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = Config::from_env().expect("defaults should load");

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.export_dir, "dist");
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        std::env::set_var("HOST", "127.0.0.1");
        std::env::set_var("PORT", "3000");
        std::env::set_var("EXPORT_DIR", "public");

        let config = Config::from_env().expect("overrides should load");
        clear_env();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.export_dir, "public");
    }

    #[test]
    #[serial]
    fn test_invalid_port_is_error() {
        clear_env();
        std::env::set_var("PORT", "eighty");

        let result = Config::from_env();
        clear_env();

        let err = result.expect_err("non-numeric port should fail");
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_bind_addr() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8081,
            export_dir: "dist".to_string(),
        };
        assert_eq!(config.bind_addr().unwrap().port(), 8081);
    }

    #[test]
    fn test_bind_addr_rejects_hostname() {
        let config = Config {
            host: "not a host".to_string(),
            port: 80,
            export_dir: "dist".to_string(),
        };
        assert!(config.bind_addr().is_err());
    }
}
