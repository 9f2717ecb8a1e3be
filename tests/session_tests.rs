mod common;

use torrust_registry::config::enums::wire_encoding::WireEncoding;
use torrust_registry::protocol::enums::wire_error::WireError;
use torrust_registry::registry::structs::content_hash::ContentHash;

#[tokio::test]
async fn test_store_and_query_over_tcp() {
    let server = common::start_test_server().await;
    let mut client = server.connect().await;

    client.store(&[ContentHash(10), ContentHash(20)]).await.unwrap();

    let me = client.peer_address().unwrap();
    assert_eq!(client.query(ContentHash(10)).await.unwrap(), vec![me.clone()]);
    assert_eq!(client.query(ContentHash(20)).await.unwrap(), vec![me]);
    assert!(client.query(ContentHash(30)).await.unwrap().is_empty());

    server.stop().await;
}

#[tokio::test]
async fn test_two_clients_in_registration_order() {
    let server = common::start_test_server().await;
    let mut a = server.connect().await;
    let mut b = server.connect().await;

    a.create(ContentHash(10)).await.unwrap();
    a.query(ContentHash(10)).await.unwrap();
    b.create(ContentHash(10)).await.unwrap();

    let holders = b.query(ContentHash(10)).await.unwrap();
    assert_eq!(holders, vec![a.peer_address().unwrap(), b.peer_address().unwrap()]);

    server.stop().await;
}

#[tokio::test]
async fn test_disconnect_purges_peer() {
    let server = common::start_test_server().await;
    let mut a = server.connect().await;
    let mut observer = server.connect().await;

    a.store(&[ContentHash(10), ContentHash(20)]).await.unwrap();
    a.query(ContentHash(10)).await.unwrap();
    let a_address = a.peer_address().unwrap();
    drop(a);

    let registry = server.registry.clone();
    assert!(common::wait_until(|| registry.hashes_of(&a_address).is_empty()).await);
    assert!(observer.query(ContentHash(10)).await.unwrap().is_empty());
    assert!(observer.query(ContentHash(20)).await.unwrap().is_empty());
    assert!(server.registry.check_consistency().is_ok());

    server.stop().await;
}

#[tokio::test]
async fn test_delete_never_announced_keeps_connection() {
    let server = common::start_test_server().await;
    let mut a = server.connect().await;
    let mut b = server.connect().await;

    b.create(ContentHash(10)).await.unwrap();
    b.query(ContentHash(10)).await.unwrap();
    let before = server.registry.snapshot();

    a.delete(ContentHash(10)).await.unwrap();
    assert_eq!(a.query(ContentHash(10)).await.unwrap(), vec![b.peer_address().unwrap()]);
    assert_eq!(server.registry.snapshot(), before);

    server.stop().await;
}

#[tokio::test]
async fn test_unknown_tag_then_valid_request() {
    let server = common::start_test_server().await;
    let mut client = server.connect().await;

    client.send_raw("announce", &("extra", 1, 2)).await.unwrap();
    client.create(ContentHash(3)).await.unwrap();
    assert_eq!(client.query(ContentHash(3)).await.unwrap().len(), 1);
    assert_eq!(server.registry.get_stats().unknown_requests, 1);

    server.stop().await;
}

#[tokio::test]
async fn test_wrong_payload_type_closes_connection() {
    let server = common::start_test_server().await;
    let mut client = server.connect().await;

    client.create(ContentHash(8)).await.unwrap();
    client.query(ContentHash(8)).await.unwrap();
    let address = client.peer_address().unwrap();

    client.send_raw("create", "eight").await.unwrap();
    client.wait_closed().await.unwrap();

    let registry = server.registry.clone();
    assert!(common::wait_until(|| registry.hashes_of(&address).is_empty()).await);
    assert!(server.registry.get_stats().decode_failures >= 1);

    server.stop().await;
}

#[tokio::test]
async fn test_oversized_frame_closes_connection() {
    let mut config = common::create_test_config();
    config.tcp_server.max_frame_size = 64;
    let server = common::start_test_server_with(config).await;
    let mut client = server.connect().await;

    client.send_bytes(&1024u32.to_be_bytes()).await.unwrap();
    client.wait_closed().await.unwrap();

    let registry = server.registry.clone();
    assert!(common::wait_until(|| registry.get_stats().connections_active == 0).await);
    assert_eq!(server.registry.get_stats().decode_failures, 1);

    server.stop().await;
}

#[tokio::test]
async fn test_client_refuses_oversized_request() {
    let mut config = common::create_test_config();
    config.tcp_server.max_frame_size = 16;
    let server = common::start_test_server_with(config).await;
    let mut client = server.connect().await;

    let result = client.store(&common::random_hashes(32)).await;
    assert!(matches!(result, Err(WireError::FrameTooLarge { .. })));

    server.stop().await;
}

#[tokio::test]
async fn test_json_encoding_end_to_end() {
    let server = common::start_test_server_encoding(WireEncoding::json).await;
    let mut client = server.connect().await;

    let hash = common::random_hash();
    client.store(&[hash]).await.unwrap();
    assert_eq!(client.query(hash).await.unwrap(), vec![client.peer_address().unwrap()]);

    server.stop().await;
}

#[tokio::test]
async fn test_connection_counters() {
    let server = common::start_test_server().await;
    {
        let mut a = server.connect().await;
        let mut b = server.connect().await;
        a.query(ContentHash(1)).await.unwrap();
        b.query(ContentHash(1)).await.unwrap();
        assert_eq!(server.registry.get_stats().connections_active, 2);
    }

    let registry = server.registry.clone();
    assert!(common::wait_until(|| registry.get_stats().connections_active == 0).await);
    let stats = server.registry.get_stats();
    assert_eq!(stats.connections_handled, 2);
    assert_eq!(stats.query_handled, 2);
    assert_eq!(stats.purges, 2);

    server.stop().await;
}

#[tokio::test]
async fn test_stop_ends_accept_loop() {
    let server = common::start_test_server().await;
    let address = server.address;
    server.stop().await;

    assert!(tokio::net::TcpStream::connect(address).await.is_err());
}
