//! application entry point

use crate::server::model::config::ServerConfig;
use anyhow::Context;
use derive_more::Display;
use log::{info, warn};
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::str::FromStr;

mod server;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "4000";
const DEFAULT_DB_FILE: &str = "db.json";

#[actix_web::main()]
async fn main() -> anyhow::Result<()> {
    // bootstrap
    // a. env
    let env = env::var("APP_ENV")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(Env::Dev); // default dev env if absent

    let dotenv = match env {
        Env::Prod | Env::Stg => None, // provided by the deployment
        Env::Dev => Some(dotenvy::from_path(Path::new(".env.dev"))),
    };

    // b. logging
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    if let Some(Err(e)) = dotenv {
        warn!("no env loaded from .env.dev, {}", e);
    }

    // c. run app
    let config = config_from_env()?;
    info!("App is starting in env={}", env);

    server::run(config).await
}

fn config_from_env() -> anyhow::Result<ServerConfig> {
    let host = env::var("HOST").unwrap_or(DEFAULT_HOST.to_string());
    let port = env::var("PORT").unwrap_or(DEFAULT_PORT.to_string());
    let addr = SocketAddr::new(
        IpAddr::from_str(&host).with_context(|| format!("failed to parse HOST={host}"))?,
        port.parse().with_context(|| format!("failed to parse PORT={port}"))?,
    );
    let store_path = PathBuf::from(env::var("DB_FILE").unwrap_or(DEFAULT_DB_FILE.to_string()));
    Ok(ServerConfig::new(addr, store_path))
}

#[derive(Debug, Display)]
#[non_exhaustive]
enum Env {
    Dev,
    Stg,
    Prod,
}

impl FromStr for Env {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Self::Dev),
            "stg" => Ok(Self::Stg),
            "prod" => Ok(Self::Prod),
            s => Err(format!("Invalid Env: {s}")),
        }
    }
}
