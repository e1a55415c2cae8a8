use crate::{
    modules::{dish, order},
    utils::repository::{InMemoryRepository, Repository},
};
use async_trait::async_trait;
use std::env;
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u16,
    pub url: String,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub dishes: Arc<dyn Repository<dish::repository::Dish>>,
    pub orders: Arc<dyn Repository<order::repository::Order>>,
}

#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u16,
    pub url: String,
}

#[derive(Clone)]
pub struct DataConfig {
    pub seed: bool,
}

#[derive(Clone)]
pub struct Config {
    pub app: AppConfig,
    pub data: DataConfig,
}

const DEFAULT_PORT: u16 = 5000;

fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

impl Default for Config {
    fn default() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let environment = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|port| port.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let url = env::var("URL").unwrap_or_else(|_| format!("http://{}:{}", host, port));
        let seed = env::var("SEED_DATA")
            .map(|raw| parse_flag(&raw))
            .unwrap_or(true);

        Self {
            app: AppConfig {
                host,
                environment: AppEnvironment::from(environment),
                port,
                url,
            },
            data: DataConfig { seed },
        }
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Context;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Context {
        let (dishes, orders) = if self.data.seed {
            (dish::repository::seed(), order::repository::seed())
        } else {
            (vec![], vec![])
        };

        tracing::debug!(
            "Loaded {} dishes and {} orders into memory",
            dishes.len(),
            orders.len()
        );

        Context {
            app: AppContext {
                host: self.app.host,
                environment: self.app.environment,
                port: self.app.port,
                url: self.app.url,
            },
            dishes: Arc::new(InMemoryRepository::new(dishes)),
            orders: Arc::new(InMemoryRepository::new(orders)),
        }
    }
}
