#![allow(dead_code)]
use rand::RngExt;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use torrust_registry::client::structs::registry_client::RegistryClient;
use torrust_registry::config::enums::wire_encoding::WireEncoding;
use torrust_registry::config::structs::configuration::Configuration;
use torrust_registry::protocol::structs::wire_codec::WireCodec;
use torrust_registry::registry::structs::content_hash::ContentHash;
use torrust_registry::registry::structs::peer_registry::PeerRegistry;
use torrust_registry::tcp::tcp::tcp_service;

pub type TestRegistry = Arc<PeerRegistry>;
pub type TestConfig = Arc<Configuration>;

pub struct TestServer {
    pub registry: TestRegistry,
    pub config: TestConfig,
    pub address: SocketAddr,
    pub shutdown: watch::Sender<bool>,
    pub handle: JoinHandle<()>,
}

impl TestServer {
    pub fn codec(&self) -> WireCodec {
        WireCodec::from_config(&self.config.tcp_server)
    }

    pub async fn connect(&self) -> RegistryClient {
        RegistryClient::connect(self.address, self.codec()).await.expect("client should connect")
    }

    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        let _ = self.handle.await;
    }
}

pub fn create_test_config() -> Configuration {
    let mut config = Configuration::init();
    config.log_level = String::from("off");
    config.tcp_server.bind_address = String::from("127.0.0.1:0");
    config
}

pub fn create_test_registry() -> TestRegistry {
    Arc::new(PeerRegistry::new(Arc::new(create_test_config())))
}

pub async fn start_test_server_with(config: Configuration) -> TestServer {
    let config = Arc::new(config);
    let registry = Arc::new(PeerRegistry::new(config.clone()));
    let (shutdown, rx) = watch::channel(false);
    let (address, handle) = tcp_service(registry.clone(), &config.tcp_server, rx)
        .await
        .expect("test server should bind");
    TestServer { registry, config, address, shutdown, handle }
}

pub async fn start_test_server() -> TestServer {
    start_test_server_with(create_test_config()).await
}

pub async fn start_test_server_encoding(encoding: WireEncoding) -> TestServer {
    let mut config = create_test_config();
    config.tcp_server.encoding = encoding;
    start_test_server_with(config).await
}

pub fn random_hash() -> ContentHash {
    let mut rng = rand::rng();
    ContentHash(rng.random())
}

pub fn random_hashes(count: usize) -> Vec<ContentHash> {
    (0..count).map(|_| random_hash()).collect()
}

/// Polls until `check` holds, the session cleanup runs on another task.
pub async fn wait_until<F: Fn() -> bool>(check: F) -> bool {
    for _ in 0..200 {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    check()
}
