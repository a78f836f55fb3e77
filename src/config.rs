use dotenvy::dotenv;
use log::error;
use serde::Deserialize;
use std::env;

const CONFIG_PATH_ENV: &str = "CONFIG_PATH";
const UPSTREAM_API_URL_ENV: &str = "UPSTREAM_API_URL";
const UPSTREAM_API_TOKEN_ENV: &str = "UPSTREAM_API_TOKEN";

pub const DEFAULT_UPSTREAM_API_URL: &str =
    "https://www.microburbs.com.au/report_generator/api/suburb/properties";
pub const DEFAULT_UPSTREAM_API_TOKEN: &str = "test";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    pub upstream_api_url: String,
    pub upstream_api_token: String,
    pub http_bind_address: Option<String>,
    pub relay_base_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            upstream_api_url: DEFAULT_UPSTREAM_API_URL.to_string(),
            upstream_api_token: DEFAULT_UPSTREAM_API_TOKEN.to_string(),
            http_bind_address: None,
            relay_base_url: None,
        }
    }
}

impl Config {
    pub fn bind_address(&self) -> String {
        self.http_bind_address
            .clone()
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
    }

    /// Where the search client finds the relay. Defaults to this server's own
    /// listener, reached over loopback.
    pub fn relay_base_url(&self) -> String {
        match &self.relay_base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("http://{}", self.bind_address().replace("0.0.0.0", "127.0.0.1")),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = env::var(UPSTREAM_API_URL_ENV) {
            self.upstream_api_url = url;
        }
        if let Ok(token) = env::var(UPSTREAM_API_TOKEN_ENV) {
            self.upstream_api_token = token;
        }
    }
}

pub fn create_test_config() -> Config {
    Config {
        upstream_api_url: "http://127.0.0.1:9/properties".to_string(),
        upstream_api_token: "xxx".to_string(),
        http_bind_address: Some("127.0.0.1:0".to_string()),
        relay_base_url: None,
    }
}

pub fn read_config() -> Config {
    dotenv().ok();

    let mut config = match env::var(CONFIG_PATH_ENV) {
        Ok(config_path) => std::fs::read(&config_path)
            .map_err(|e| format!("{config_path}: {e}"))
            .and_then(|bytes| toml::from_slice::<Config>(&bytes).map_err(|e| e.to_string()))
            .unwrap_or_else(|err| {
                error!("failed to read config: {err}");
                std::process::exit(1);
            }),
        Err(_) => Config::default(),
    };

    config.apply_env_overrides();
    config
}
