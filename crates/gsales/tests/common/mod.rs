//! Common test utilities and helpers

use std::path::Path;
use std::sync::{Arc, Once};

use gsales::Client;
use gsales_transport::MockTransport;
use rstest::fixture;
use serde_json::Value;

static TRACING: Once = Once::new();

/// Install a test subscriber once; honours `RUST_LOG`.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Load a response fixture
#[allow(dead_code)]
pub fn load_response_fixture(name: &str) -> Value {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let path = Path::new(manifest_dir)
        .join("tests")
        .join("fixtures")
        .join("responses")
        .join(format!("{}.json", name));

    let text = std::fs::read_to_string(&path).unwrap_or_else(|e| {
        panic!(
            "Failed to load response fixture '{}' from {:?}: {}",
            name, path, e
        )
    });
    serde_json::from_str(&text).unwrap_or_else(|e| panic!("Fixture '{}' is not JSON: {}", name, e))
}

/// A scripted transport
#[fixture]
#[allow(dead_code)]
pub fn mock() -> Arc<MockTransport> {
    init_tracing();
    Arc::new(MockTransport::new())
}

/// A client over `mock`
#[allow(dead_code)]
pub fn client(mock: &Arc<MockTransport>) -> Client {
    Client::builder()
        .transport(mock.clone())
        .trace_calls(true)
        .build()
        .expect("client with transport")
}
