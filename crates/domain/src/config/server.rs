use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addresses")]
    pub bind_addresses: Vec<String>,

    #[serde(default = "default_dns_port")]
    pub dns_port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addresses: default_bind_addresses(),
            dns_port: default_dns_port(),
        }
    }
}

fn default_bind_addresses() -> Vec<String> {
    vec!["::1".to_string(), "127.0.0.1".to_string()]
}

fn default_dns_port() -> u16 {
    53
}
