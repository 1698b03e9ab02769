//! # config: Environment Variables
//!
//! | Variable              | Default                          | Description                           |
//! |-----------------------|----------------------------------|---------------------------------------|
//! | `BIND_ADDR`           | `0.0.0.0:3000`                   | Address Axum listens on               |
//! | `REDIS_URL`           | *(unset)*                        | Feed cache, e.g. `redis://host:6379`  |
//! | `REDIS_PASSWORD`      | *(unset)*                        | Required together with `REDIS_URL`    |
//! | `CONTRACT_KEY_PREFIX` | *(empty)*                        | Namespace before `ZS` / `ZC`          |
//! | `CURRENCY_KEY_PREFIX` | `FX:`                            | Prefix of FX quote keys               |
//! | `RENDER_URL`          | `http://localhost:3001/render`   | Rasterizer endpoint                   |
//! | `FEED_NAME`           | `Broadcast`                      | Shown in the table footer             |
//! | `TABLE_LOGO_URL`      | built-in logo                    | Logo in the table title bar           |
//! | `RUST_LOG`            | `graopainel=debug`               | Tracing filter                        |

use std::net::SocketAddr;

use anyhow::Context;

use crate::layout::builder::DEFAULT_FEED_NAME;

#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub url:      String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr:       SocketAddr,
    /// `None` when either Redis variable is missing. The data endpoint then
    /// answers with its error shape instead of failing.
    pub redis:           Option<RedisConfig>,
    pub contract_prefix: String,
    pub currency_prefix: String,
    pub render_url:      String,
    pub feed_name:       String,
    pub logo_url:        Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr = env_or("BIND_ADDR", "0.0.0.0:3000")
            .parse()
            .context("BIND_ADDR must be a socket address, e.g. 0.0.0.0:3000")?;

        Ok(Self {
            bind_addr,
            redis:           redis_from_env(),
            contract_prefix: env_or("CONTRACT_KEY_PREFIX", ""),
            currency_prefix: env_or("CURRENCY_KEY_PREFIX", "FX:"),
            render_url:      env_or("RENDER_URL", "http://localhost:3001/render"),
            feed_name:       env_or("FEED_NAME", DEFAULT_FEED_NAME),
            logo_url:        non_empty_env("TABLE_LOGO_URL"),
        })
    }
}

fn redis_from_env() -> Option<RedisConfig> {
    Some(RedisConfig {
        url:      non_empty_env("REDIS_URL")?,
        password: non_empty_env("REDIS_PASSWORD")?,
    })
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
