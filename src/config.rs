use dotenv::dotenv;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub eth_rpc_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub poll_interval: Duration,
    pub rpc_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            eth_rpc_url: "https://ethereum-rpc.publicnode.com".to_string(),
            server_host: "0.0.0.0".to_string(),
            server_port: 8080,
            poll_interval: Duration::from_secs(10),
            rpc_timeout_secs: 30,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();
        let defaults = Self::default();

        let eth_rpc_url = env::var("ETH_RPC_URL").unwrap_or(defaults.eth_rpc_url);
        let server_host = env::var("SERVER_HOST").unwrap_or(defaults.server_host);
        let server_port = env::var("SERVER_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.server_port);
        let poll_interval = env::var("POLL_INTERVAL_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(defaults.poll_interval);
        let rpc_timeout_secs = env::var("RPC_TIMEOUT_SECS")
            .map(|v| v.parse().unwrap_or(defaults.rpc_timeout_secs))
            .unwrap_or(defaults.rpc_timeout_secs);

        Self {
            eth_rpc_url,
            server_host,
            server_port,
            poll_interval,
            rpc_timeout_secs,
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
