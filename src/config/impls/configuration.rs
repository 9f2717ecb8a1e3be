use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use std::sync::Arc;
use log::{error, info};
use crate::common::common::parse_log_level;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::enums::wire_encoding::WireEncoding;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::registry_config::RegistryConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::tcp_server_config::TcpServerConfig;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_MAX_FRAME_SIZE: u32 = 1_048_576;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            registry_config: RegistryConfig::default(),
            tcp_server: TcpServerConfig {
                enabled: true,
                bind_address: String::from(DEFAULT_BIND_ADDRESS),
                encoding: WireEncoding::msgpack,
                max_frame_size: DEFAULT_MAX_FRAME_SIZE,
                backlog: 1024,
                reuse_address: true,
            },
            sentry_config: SentryConfig::default(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn save_from_config(config: Arc<Configuration>, path: &str) -> bool {
        let config_toml = match toml::to_string(&*config) {
            Ok(data) => data,
            Err(error) => {
                error!("[CONFIG] Unable to serialize configuration: {}", ConfigurationError::SerializeError(error));
                return false;
            }
        };
        match Self::save_file(path, config_toml) {
            Ok(_) => {
                info!("[CONFIG] Configuration saved to {path}");
                true
            }
            Err(error) => {
                error!("[CONFIG] Unable to save configuration to {path}: {error}");
                false
            }
        }
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new(&format!("will not create automatically {path} file")));
                }
                eprintln!("Creating config file..");

                let config_toml = match toml::to_string(&Configuration::init()) {
                    Ok(data) => data,
                    Err(e) => {
                        eprintln!("{}", ConfigurationError::SerializeError(e));
                        return Err(CustomError::new("could not serialize default configuration"));
                    }
                };
                return match Configuration::save_file(path, config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit the {path} file, exiting now...");
                        Err(CustomError::new(&format!("create {path} file")))
                    }
                    Err(e) => {
                        eprintln!("{path} file could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {path} file")))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        if let Err(error) = config.validate() {
            eprintln!("[VALIDATE CONFIG] {error}");
            return Err(CustomError::new(&error.to_string()));
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if let Err(error) = parse_log_level(self.log_level.as_str()) {
            return Err(ConfigurationError::ValidationError(error.to_string()));
        }
        if self.log_console_interval == 0 {
            return Err(ConfigurationError::ValidationError(String::from("log_console_interval must be at least 1 second")));
        }

        let tcp_server = &self.tcp_server;
        if tcp_server.bind_address.parse::<SocketAddr>().is_err() {
            return Err(ConfigurationError::ValidationError(format!(
                "[tcp_server] bind_address \"{}\" is not a socket address", tcp_server.bind_address
            )));
        }
        if tcp_server.max_frame_size == 0 {
            return Err(ConfigurationError::ValidationError(String::from("[tcp_server] max_frame_size must be greater than 0")));
        }
        if tcp_server.backlog <= 0 {
            return Err(ConfigurationError::ValidationError(String::from("[tcp_server] backlog must be greater than 0")));
        }

        if self.sentry_config.enabled && self.sentry_config.dsn.is_empty() {
            return Err(ConfigurationError::ValidationError(String::from("[sentry_config] dsn is required when enabled")));
        }
        Ok(())
    }
}
