//! Shared fixtures for the integration tests.

use visoma::{Config, VisomaClient};
use wiremock::MockServer;

/// Creates a client pointed at the mock server.
pub fn client(server: &MockServer) -> VisomaClient {
    let config = Config::new(server.uri(), "user1", "secret").expect("valid test config");
    VisomaClient::new(&config).expect("client initializes")
}
