//! GymDesk Client - HTTP client for the dashboard backend
//!
//! Typed REST calls for members, payments and inventory reorder requests,
//! plus the cached-collection layer the dashboard views read from.

pub mod collection;
pub mod config;
pub mod error;
pub mod http;
pub mod members;
pub mod reorders;

pub use collection::{CollectionCache, FetchTicket};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use members::MembersApi;
pub use reorders::ReordersApi;

use shared::request::{VerifyPassword, VerifyPasswordResponse};

/// Root client handle. Cheap to clone; API views borrow the underlying
/// HTTP client.
#[derive(Debug, Clone)]
pub struct GymClient {
    http: HttpClient,
}

impl GymClient {
    /// Create a client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http: HttpClient::new(config),
        }
    }

    /// Member endpoints
    pub fn members(&self) -> MembersApi<'_> {
        MembersApi::new(&self.http)
    }

    /// Reorder-request endpoints
    pub fn reorders(&self) -> ReordersApi<'_> {
        ReordersApi::new(&self.http)
    }

    /// Verify an administrator's credentials against the backend.
    ///
    /// Used as the gate in front of destructive member operations.
    pub async fn verify_password(
        &self,
        username: &str,
        password: &str,
    ) -> ClientResult<bool> {
        let request = VerifyPassword {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response: VerifyPasswordResponse =
            self.http.post("admin/verify-password", &request).await?;
        Ok(response.verified)
    }
}
