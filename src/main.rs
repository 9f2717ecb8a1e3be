use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use futures_util::future::try_join_all;
use log::{error, info, warn};
use parking_lot::deadlock;
use sentry::ClientInitGuard;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use torrust_registry::common::common::{setup_logging, shutdown_waiting};
use torrust_registry::config::structs::configuration::Configuration;
use torrust_registry::registry::structs::peer_registry::PeerRegistry;
use torrust_registry::structs::Cli;
use torrust_registry::tcp::tcp::tcp_service;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    #[warn(unused_variables)]
    let _sentry_guard: ClientInitGuard;
    if config.sentry_config.enabled {
        _sentry_guard = sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            send_default_pii: config.sentry_config.send_default_pii,
            traces_sample_rate: config.sentry_config.traces_sample_rate,
            ..Default::default()
        }));
    }

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let registry = Arc::new(PeerRegistry::new(config.clone()));

            let tokio_shutdown = match Shutdown::new() {
                Ok(shutdown) => shutdown,
                Err(error) => {
                    error!("[BOOT] Unable to install the shutdown handler: {error:?}");
                    exit(1);
                }
            };

            let deadlocks_handler = tokio_shutdown.clone();
            tokio::spawn(async move {
                info!("[BOOT] Starting thread for deadlocks...");
                loop {
                    if shutdown_waiting(Duration::from_secs(10), deadlocks_handler.clone()).await {
                        info!("[BOOT] Shutting down thread for deadlocks...");
                        return;
                    }
                    let deadlocks = deadlock::check_deadlock();
                    if deadlocks.is_empty() {
                        continue;
                    }
                    info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                    for (i, threads) in deadlocks.iter().enumerate() {
                        info!("[DEADLOCK] #{i}");
                        for t in threads {
                            info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                            info!("[DEADLOCK] {:#?}", t.backtrace());
                            sentry::capture_message(&format!("{:#?}", t.backtrace()), sentry::Level::Error);
                        }
                    }
                }
            });

            let stats_handler = tokio_shutdown.clone();
            let registry_spawn_stats = registry.clone();
            let console_interval = config.log_console_interval;
            info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");

            tokio::spawn(async move {
                let mut interval = tokio::time::interval(Duration::from_secs(console_interval));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let stats = registry_spawn_stats.get_stats();
                            info!(
                                "[STATS] Hashes: {} - Peers: {} - Announcements: {} | Connections: {} active, {} handled",
                                stats.hashes, stats.peers, stats.announcements,
                                stats.connections_active, stats.connections_handled
                            );
                            info!(
                                "[STATS TCP] S:{} C:{} D:{} Q:{} | Unknown:{} Failures:{} Purges:{}",
                                stats.store_handled, stats.create_handled, stats.delete_handled, stats.query_handled,
                                stats.unknown_requests, stats.decode_failures, stats.purges
                            );
                            if log::log_enabled!(log::Level::Debug)
                                && let Err(violation) = registry_spawn_stats.check_consistency()
                            {
                                error!("[REGISTRY] Index inconsistency: {violation}");
                                sentry::capture_message(&violation, sentry::Level::Error);
                            }
                        }
                        _ = stats_handler.handle() => {
                            info!("[BOOT] Shutting down thread for console updates...");
                            return;
                        }
                    }
                }
            });

            let (tcp_tx, tcp_rx) = tokio::sync::watch::channel(false);
            let mut tcp_futures = Vec::new();

            if config.tcp_server.enabled {
                match tcp_service(registry.clone(), &config.tcp_server, tcp_rx).await {
                    Ok((address, handle)) => {
                        info!("[BOOT] Registry accepting connections on {address}");
                        tcp_futures.push(handle);
                    }
                    Err(error) => {
                        error!("[TCP] Unable to bind {}: {error}", config.tcp_server.bind_address);
                        exit(1);
                    }
                }
            } else {
                warn!("[BOOT] TCP server is disabled, nothing will be served");
            }

            if let Err(error) = tokio::signal::ctrl_c().await {
                error!("Unable to listen for the shutdown signal: {error}");
            }
            info!("Shutdown request received, shutting down...");

            let _ = tcp_tx.send(true);

            match try_join_all(tcp_futures).await {
                Ok(_) => {}
                Err(error) => {
                    sentry::capture_error(&error);
                    error!("Errors happened on shutting down the TCP listener: {error}");
                }
            }

            tokio_shutdown.handle().await;

            let (hashes, peers, announcements) = registry.counts();
            info!("[REGISTRY] Dropping {hashes} hashes held by {peers} peers ({announcements} announcements)");
            info!("Server shutting down completed");
            Ok::<(), std::io::Error>(())
        })
}
