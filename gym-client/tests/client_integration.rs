// gym-client/tests/client_integration.rs

use gym_client::{ClientConfig, ClientError, CollectionCache, GymClient};

#[tokio::test]
async fn test_client_creation() {
    let config = ClientConfig::new("http://localhost:8080").with_timeout(5);
    let _client = GymClient::new(&config);
    assert_eq!(config.timeout, 5);
    assert!(config.token.is_none());
}

#[tokio::test]
async fn test_config_token_builder() {
    let config = ClientConfig::new("http://localhost:8080").with_token("abc123");
    assert_eq!(config.token.as_deref(), Some("abc123"));
}

#[tokio::test]
async fn test_network_failure_has_no_status() {
    // Nothing listens here; transport errors must carry no HTTP status
    let config = ClientConfig::new("http://127.0.0.1:1").with_timeout(1);
    let client = GymClient::new(&config);

    let err = client
        .members()
        .list(&Default::default())
        .await
        .unwrap_err();
    match err {
        ClientError::Http(_) => assert_eq!(err.status(), None),
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[test]
fn test_interleaved_fetch_sequencing() {
    let mut cache: CollectionCache<u32> = CollectionCache::new();

    // filtered fetch issued, then an unfiltered one; the unfiltered response
    // lands first, so the filtered one must be dropped
    let filtered = cache.begin_fetch(false);
    let unfiltered = cache.begin_fetch(true);

    assert!(cache.complete(unfiltered, vec![1, 2, 3]));
    assert!(!cache.complete(filtered, vec![2]));

    assert_eq!(cache.superset(), &[1, 2, 3]);
    assert_eq!(cache.filtered(), &[1, 2, 3]);
}
