//! Member endpoints

use crate::{ClientError, ClientResult, HttpClient};
use shared::models::member::{Member, MemberCreate, MemberUpdate};
use shared::models::payment::{Payment, PaymentCreate, PaymentMethod};
use shared::models::CheckIn;
use shared::query::MemberQuery;
use shared::request::{CancelMember, FreezeMember, ReactivateMember};
use shared::response::{MemberList, MemberStats};

/// Typed wrappers over the `/members` endpoints
#[derive(Debug, Clone, Copy)]
pub struct MembersApi<'a> {
    http: &'a HttpClient,
}

impl<'a> MembersApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// List members matching the query (`GET /members`)
    pub async fn list(&self, query: &MemberQuery) -> ClientResult<MemberList> {
        self.http.get_query("members", &query.query_pairs()).await
    }

    /// Aggregate counts (`GET /members/stats`)
    pub async fn stats(&self) -> ClientResult<MemberStats> {
        self.http.get("members/stats").await
    }

    /// Single member with derived totals (`GET /members/{id}`)
    pub async fn get(&self, id: i64) -> ClientResult<Member> {
        self.http.get(&format!("members/{id}")).await
    }

    /// Create a member (`POST /members`)
    pub async fn create(&self, payload: &MemberCreate) -> ClientResult<Member> {
        self.http.post("members", payload).await
    }

    /// Edit member attributes (`PUT /members/{id}`)
    pub async fn update(&self, id: i64, payload: &MemberUpdate) -> ClientResult<Member> {
        self.http.put(&format!("members/{id}"), payload).await
    }

    /// Soft delete: cancel the membership (`DELETE /members/{id}`).
    ///
    /// The body carries reason, notes and the acting admin's credentials.
    /// The record is retained with status `cancelled`.
    pub async fn cancel(&self, id: i64, payload: &CancelMember) -> ClientResult<Member> {
        self.http.delete_json(&format!("members/{id}"), payload).await
    }

    /// Freeze the membership (`POST /members/{id}/freeze`)
    pub async fn freeze(&self, id: i64, payload: &FreezeMember) -> ClientResult<Member> {
        self.http.post(&format!("members/{id}/freeze"), payload).await
    }

    /// Unfreeze the membership (`POST /members/{id}/unfreeze`)
    pub async fn unfreeze(&self, id: i64) -> ClientResult<Member> {
        self.http.post_empty(&format!("members/{id}/unfreeze")).await
    }

    /// Reactivate a cancelled membership (`POST /members/{id}/reactivate`)
    pub async fn reactivate(&self, id: i64, payload: &ReactivateMember) -> ClientResult<Member> {
        self.http
            .post(&format!("members/{id}/reactivate"), payload)
            .await
    }

    /// Payment method on file, if any (`GET /members/{id}/payment-method`)
    pub async fn payment_method(&self, id: i64) -> ClientResult<Option<PaymentMethod>> {
        match self
            .http
            .get(&format!("members/{id}/payment-method"))
            .await
        {
            Ok(method) => Ok(Some(method)),
            Err(ClientError::Api { status: 404, .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Replace the payment method wholesale (`PUT /members/{id}/payment-method`)
    pub async fn update_payment_method(
        &self,
        id: i64,
        method: &PaymentMethod,
    ) -> ClientResult<PaymentMethod> {
        self.http
            .put(&format!("members/{id}/payment-method"), method)
            .await
    }

    /// Payment history (`GET /members/{id}/payments`)
    pub async fn payments(&self, id: i64) -> ClientResult<Vec<Payment>> {
        self.http.get(&format!("members/{id}/payments")).await
    }

    /// Record a payment (`POST /members/{id}/payments`)
    pub async fn record_payment(
        &self,
        id: i64,
        payload: &PaymentCreate,
    ) -> ClientResult<Payment> {
        self.http.post(&format!("members/{id}/payments"), payload).await
    }

    /// Check-in history (`GET /members/{id}/check-ins`)
    pub async fn check_ins(&self, id: i64) -> ClientResult<Vec<CheckIn>> {
        self.http.get(&format!("members/{id}/check-ins")).await
    }
}
