#[cfg(test)]
mod registry_tests {
    mod registry_index_tests {
        use crate::registry::structs::content_hash::ContentHash;
        use crate::registry::structs::peer_address::PeerAddress;
        use crate::registry::structs::registry_index::RegistryIndex;

        fn peer(addr: &str) -> PeerAddress {
            PeerAddress::from(addr)
        }

        #[test]
        fn test_insert_creates_both_sides() {
            let mut index = RegistryIndex::new();
            assert!(index.insert(ContentHash(10), &peer("a:1"), false));

            assert_eq!(index.holders(ContentHash(10)), vec![peer("a:1")]);
            assert_eq!(index.hashes_of(&peer("a:1")), vec![ContentHash(10)]);
            assert_eq!(index.announcement_count(), 1);
            assert!(index.is_consistent());
        }

        #[test]
        fn test_insert_keeps_duplicates_without_deduplication() {
            let mut index = RegistryIndex::new();
            assert!(index.insert(ContentHash(10), &peer("a:1"), false));
            assert!(index.insert(ContentHash(10), &peer("a:1"), false));

            assert_eq!(index.holders(ContentHash(10)), vec![peer("a:1"), peer("a:1")]);
            assert_eq!(index.hashes_of(&peer("a:1")), vec![ContentHash(10), ContentHash(10)]);
            assert_eq!(index.announcement_count(), 2);
            assert!(index.is_consistent());
        }

        #[test]
        fn test_insert_ignores_duplicates_with_deduplication() {
            let mut index = RegistryIndex::new();
            assert!(index.insert(ContentHash(10), &peer("a:1"), true));
            assert!(!index.insert(ContentHash(10), &peer("a:1"), true));

            assert_eq!(index.holders(ContentHash(10)), vec![peer("a:1")]);
            assert_eq!(index.hashes_of(&peer("a:1")), vec![ContentHash(10)]);
            assert_eq!(index.announcement_count(), 1);
            assert!(index.is_consistent());
        }

        #[test]
        fn test_remove_only_first_occurrence() {
            let mut index = RegistryIndex::new();
            index.insert(ContentHash(10), &peer("a:1"), false);
            index.insert(ContentHash(10), &peer("b:1"), false);
            index.insert(ContentHash(10), &peer("a:1"), false);

            assert!(index.remove(ContentHash(10), &peer("a:1")));
            assert_eq!(index.holders(ContentHash(10)), vec![peer("b:1"), peer("a:1")]);
            assert!(index.is_consistent());
        }

        #[test]
        fn test_remove_prunes_both_sides() {
            let mut index = RegistryIndex::new();
            index.insert(ContentHash(10), &peer("a:1"), false);

            assert!(index.remove(ContentHash(10), &peer("a:1")));
            assert!(!index.by_hash.contains_key(&ContentHash(10)));
            assert!(!index.by_peer.contains_key(&peer("a:1")));
            assert!(index.is_empty());
            assert!(index.is_consistent());
        }

        #[test]
        fn test_remove_absent_is_noop() {
            let mut index = RegistryIndex::new();
            index.insert(ContentHash(20), &peer("a:1"), false);
            let before = index.clone();

            assert!(!index.remove(ContentHash(10), &peer("a:1")));
            assert!(!index.remove(ContentHash(20), &peer("b:1")));
            assert_eq!(index, before);
        }

        #[test]
        fn test_remove_peer_drops_everything() {
            let mut index = RegistryIndex::new();
            index.insert(ContentHash(10), &peer("a:1"), false);
            index.insert(ContentHash(20), &peer("a:1"), false);
            index.insert(ContentHash(20), &peer("a:1"), false);
            index.insert(ContentHash(20), &peer("b:1"), false);

            assert_eq!(index.remove_peer(&peer("a:1")), 3);
            assert!(!index.by_peer.contains_key(&peer("a:1")));
            assert!(!index.by_hash.contains_key(&ContentHash(10)));
            assert_eq!(index.holders(ContentHash(20)), vec![peer("b:1")]);
            assert_eq!(index.announcement_count(), 1);
            assert!(index.is_consistent());
        }

        #[test]
        fn test_remove_peer_unknown_is_noop() {
            let mut index = RegistryIndex::new();
            index.insert(ContentHash(10), &peer("a:1"), false);
            assert_eq!(index.remove_peer(&peer("z:9")), 0);
            assert_eq!(index.announcement_count(), 1);
        }

        #[test]
        fn test_check_consistency_detects_tampering() {
            let mut index = RegistryIndex::new();
            index.insert(ContentHash(10), &peer("a:1"), false);
            index.by_peer.insert(peer("b:1"), vec![ContentHash(10)]);
            assert!(index.check_consistency(false).is_err());

            let mut index = RegistryIndex::new();
            index.by_hash.insert(ContentHash(10), vec![]);
            assert!(index.check_consistency(false).unwrap_err().contains("no holders"));

            let mut index = RegistryIndex::new();
            index.insert(ContentHash(10), &peer("a:1"), false);
            index.announcements = 5;
            assert!(index.check_consistency(false).unwrap_err().contains("counter"));
        }

        #[test]
        fn test_check_consistency_rejects_duplicates_when_deduplicating() {
            let mut index = RegistryIndex::new();
            index.insert(ContentHash(10), &peer("a:1"), true);
            index.by_hash.get_mut(&ContentHash(10)).unwrap().push(peer("a:1"));
            index.by_peer.get_mut(&peer("a:1")).unwrap().push(ContentHash(10));
            index.announcements += 1;

            assert!(index.check_consistency(false).is_ok());
            assert!(index.check_consistency(true).unwrap_err().contains("deduplicated"));
        }

        #[test]
        fn test_render_lists_holders() {
            let mut index = RegistryIndex::new();
            index.insert(ContentHash(10), &peer("a:1"), false);
            index.insert(ContentHash(10), &peer("b:1"), false);

            let dump = index.render();
            assert!(dump.starts_with("Hash Map:"));
            assert!(dump.contains("Hash: 10"));
            assert!(dump.contains("    a:1"));
            assert!(dump.contains("    b:1"));
        }
    }

    mod peer_registry_tests {
        use std::net::SocketAddr;
        use std::sync::Arc;
        use crate::config::structs::configuration::Configuration;
        use crate::registry::structs::content_hash::ContentHash;
        use crate::registry::structs::peer_address::PeerAddress;
        use crate::registry::structs::peer_registry::PeerRegistry;

        fn registry(deduplicate: bool) -> PeerRegistry {
            let mut config = Configuration::init();
            config.registry_config.deduplicate_announcements = deduplicate;
            PeerRegistry::new(Arc::new(config))
        }

        #[test]
        fn test_peer_address_from_socket_addr() {
            let addr: SocketAddr = "192.168.1.20:51000".parse().unwrap();
            assert_eq!(PeerAddress::from(addr).as_str(), "192.168.1.20:51000");

            let addr: SocketAddr = "[::1]:8080".parse().unwrap();
            assert_eq!(PeerAddress::from(addr).to_string(), "[::1]:8080");
        }

        #[test]
        fn test_store_then_query() {
            let registry = registry(false);
            let a = PeerAddress::from("10.0.0.1:4000");

            assert_eq!(registry.announce_many(&a, &[ContentHash(10), ContentHash(20)]), 2);
            assert_eq!(registry.query(ContentHash(10)), vec![a.clone()]);
            assert_eq!(registry.query(ContentHash(20)), vec![a.clone()]);
            assert!(registry.query(ContentHash(30)).is_empty());
        }

        #[test]
        fn test_create_keeps_registration_order() {
            let registry = registry(false);
            let a = PeerAddress::from("10.0.0.1:4000");
            let b = PeerAddress::from("10.0.0.2:4000");

            registry.announce_one(&a, ContentHash(10));
            registry.announce_one(&b, ContentHash(10));
            assert_eq!(registry.query(ContentHash(10)), vec![a, b]);
        }

        #[test]
        fn test_announce_many_duplicates_in_one_call() {
            let registry = registry(false);
            let a = PeerAddress::from("10.0.0.1:4000");

            assert_eq!(registry.announce_many(&a, &[ContentHash(10), ContentHash(10)]), 2);
            assert_eq!(registry.query(ContentHash(10)).len(), 2);

            let registry = self::registry(true);
            assert_eq!(registry.announce_many(&a, &[ContentHash(10), ContentHash(10)]), 1);
            assert_eq!(registry.query(ContentHash(10)).len(), 1);
            assert!(registry.check_consistency().is_ok());
        }

        #[test]
        fn test_withdraw_never_announced_is_noop() {
            let registry = registry(false);
            let a = PeerAddress::from("10.0.0.1:4000");
            let b = PeerAddress::from("10.0.0.2:4000");
            registry.announce_one(&b, ContentHash(20));
            let before = registry.snapshot();

            assert!(!registry.withdraw(&a, ContentHash(10)));
            assert_eq!(registry.snapshot(), before);
        }

        #[test]
        fn test_withdraw_last_holder_prunes_hash() {
            let registry = registry(false);
            let a = PeerAddress::from("10.0.0.1:4000");
            registry.announce_one(&a, ContentHash(10));

            assert!(registry.withdraw(&a, ContentHash(10)));
            assert!(registry.query(ContentHash(10)).is_empty());
            assert!(registry.hashes_of(&a).is_empty());
            assert_eq!(registry.counts(), (0, 0, 0));
        }

        #[test]
        fn test_query_returns_isolated_copy() {
            let registry = registry(false);
            let a = PeerAddress::from("10.0.0.1:4000");
            let b = PeerAddress::from("10.0.0.2:4000");
            registry.announce_one(&a, ContentHash(10));

            let snapshot = registry.query(ContentHash(10));
            registry.announce_one(&b, ContentHash(10));
            registry.withdraw(&a, ContentHash(10));

            assert_eq!(snapshot, vec![a]);
            assert_eq!(registry.query(ContentHash(10)), vec![b]);
        }

        #[test]
        fn test_purge_peer_removes_all_traces() {
            let registry = registry(false);
            let a = PeerAddress::from("10.0.0.1:4000");
            let b = PeerAddress::from("10.0.0.2:4000");
            registry.announce_many(&a, &[ContentHash(10), ContentHash(20)]);
            registry.announce_one(&b, ContentHash(20));

            assert_eq!(registry.purge_peer(&a), 2);
            assert!(registry.query(ContentHash(10)).is_empty());
            assert_eq!(registry.query(ContentHash(20)), vec![b]);

            let snapshot = registry.snapshot();
            assert!(!snapshot.by_peer.contains_key(&a));
            assert!(snapshot.by_hash.values().all(|holders| !holders.contains(&a)));
            assert!(snapshot.is_consistent());
        }

        #[test]
        fn test_purge_unknown_peer_is_noop() {
            let registry = registry(false);
            assert_eq!(registry.purge_peer(&PeerAddress::from("10.0.0.9:1")), 0);
            assert_eq!(registry.counts(), (0, 0, 0));
        }

        #[test]
        fn test_registry_check_follows_duplicate_policy() {
            let a = PeerAddress::from("10.0.0.1:4000");

            let registry = registry(true);
            registry.announce_one(&a, ContentHash(10));
            {
                let mut lock = registry.index.write();
                lock.by_hash.get_mut(&ContentHash(10)).unwrap().push(a.clone());
                lock.by_peer.get_mut(&a).unwrap().push(ContentHash(10));
                lock.announcements += 1;
            }
            assert!(registry.check_consistency().is_err());

            let registry = self::registry(false);
            registry.announce_one(&a, ContentHash(10));
            registry.announce_one(&a, ContentHash(10));
            assert!(registry.check_consistency().is_ok());
        }

        #[test]
        fn test_dump_index_contains_hashes() {
            let registry = registry(false);
            registry.announce_many(&PeerAddress::from("10.0.0.1:4000"), &[ContentHash(7)]);
            assert!(registry.dump_index().contains("Hash: 7"));
        }
    }
}
