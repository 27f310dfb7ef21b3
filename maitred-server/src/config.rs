// Server configuration from environment variables.

use std::env;

use anyhow::Context;
use maitred_auth::AuthOptions;

/// Runtime configuration, read once at startup. Every value has a
/// development default.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    /// Seed credentials for the platform account created on first boot.
    pub admin_email: String,
    pub admin_password: String,
    pub bcrypt_cost: u32,
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = var_or("MAITRED_PORT", "3000")
            .parse::<u16>()
            .context("MAITRED_PORT must be a valid port number")?;
        let bcrypt_cost = var_or("MAITRED_BCRYPT_COST", "12")
            .parse::<u32>()
            .context("MAITRED_BCRYPT_COST must be an integer")?;

        Ok(Self {
            host: var_or("MAITRED_HOST", "127.0.0.1"),
            port,
            jwt_secret: var_or("MAITRED_JWT_SECRET", "maitred-dev-secret"),
            admin_email: var_or("MAITRED_ADMIN_EMAIL", "admin@maitred.dev"),
            admin_password: var_or("MAITRED_ADMIN_PASSWORD", "change-me"),
            bcrypt_cost,
        })
    }

    pub fn auth_options(&self) -> AuthOptions {
        AuthOptions {
            secret: self.jwt_secret.clone(),
            bcrypt_cost: self.bcrypt_cost,
            ..AuthOptions::default()
        }
    }
}
