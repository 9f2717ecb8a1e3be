use serde::{Deserialize, Serialize};
use crate::config::structs::registry_config::RegistryConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::tcp_server_config::TcpServerConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub log_console_interval: u64,
    pub registry_config: RegistryConfig,
    pub tcp_server: TcpServerConfig,
    pub sentry_config: SentryConfig,
}
