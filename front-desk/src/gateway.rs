//! Gateway traits between the controllers and the API client
//!
//! Controllers talk to these seams instead of `GymClient` directly so the
//! lifecycle logic can be exercised against recording mocks.

use async_trait::async_trait;
use gym_client::{ClientResult, GymClient};
use shared::models::payment::PaymentMethod;
use shared::models::{Member, ReorderRequest};
use shared::query::{MemberQuery, ReorderQuery};
use shared::request::{CancelMember, FreezeMember, ReactivateMember, ReceiveReorder, RejectReorder};
use shared::response::{ChartData, MemberStats, ReorderStats};

/// Member operations the lifecycle controller needs
#[async_trait]
pub trait MemberGateway: Send + Sync {
    async fn list(&self, query: &MemberQuery) -> ClientResult<Vec<Member>>;
    async fn stats(&self) -> ClientResult<MemberStats>;
    async fn freeze(&self, id: i64, payload: &FreezeMember) -> ClientResult<Member>;
    async fn unfreeze(&self, id: i64) -> ClientResult<Member>;
    async fn cancel(&self, id: i64, payload: &CancelMember) -> ClientResult<Member>;
    async fn reactivate(&self, id: i64, payload: &ReactivateMember) -> ClientResult<Member>;
    async fn payment_method(&self, id: i64) -> ClientResult<Option<PaymentMethod>>;
    async fn verify_password(&self, username: &str, password: &str) -> ClientResult<bool>;
}

/// Reorder operations the lifecycle controller needs
#[async_trait]
pub trait ReorderGateway: Send + Sync {
    async fn list(&self, query: &ReorderQuery) -> ClientResult<Vec<ReorderRequest>>;
    async fn approve(&self, id: i64) -> ClientResult<ReorderRequest>;
    async fn reject(&self, id: i64, payload: &RejectReorder) -> ClientResult<ReorderRequest>;
    async fn receive(&self, id: i64, payload: &ReceiveReorder) -> ClientResult<ReorderRequest>;
    async fn stats(&self) -> ClientResult<ReorderStats>;
    async fn status_breakdown(&self) -> ClientResult<ChartData>;
    async fn trends(&self) -> ClientResult<ChartData>;
}

#[async_trait]
impl MemberGateway for GymClient {
    async fn list(&self, query: &MemberQuery) -> ClientResult<Vec<Member>> {
        Ok(self.members().list(query).await?.members)
    }

    async fn stats(&self) -> ClientResult<MemberStats> {
        self.members().stats().await
    }

    async fn freeze(&self, id: i64, payload: &FreezeMember) -> ClientResult<Member> {
        self.members().freeze(id, payload).await
    }

    async fn unfreeze(&self, id: i64) -> ClientResult<Member> {
        self.members().unfreeze(id).await
    }

    async fn cancel(&self, id: i64, payload: &CancelMember) -> ClientResult<Member> {
        self.members().cancel(id, payload).await
    }

    async fn reactivate(&self, id: i64, payload: &ReactivateMember) -> ClientResult<Member> {
        self.members().reactivate(id, payload).await
    }

    async fn payment_method(&self, id: i64) -> ClientResult<Option<PaymentMethod>> {
        self.members().payment_method(id).await
    }

    async fn verify_password(&self, username: &str, password: &str) -> ClientResult<bool> {
        GymClient::verify_password(self, username, password).await
    }
}

#[async_trait]
impl ReorderGateway for GymClient {
    async fn list(&self, query: &ReorderQuery) -> ClientResult<Vec<ReorderRequest>> {
        Ok(self.reorders().list(query).await?.reorders)
    }

    async fn approve(&self, id: i64) -> ClientResult<ReorderRequest> {
        self.reorders().approve(id).await
    }

    async fn reject(&self, id: i64, payload: &RejectReorder) -> ClientResult<ReorderRequest> {
        self.reorders().reject(id, payload).await
    }

    async fn receive(&self, id: i64, payload: &ReceiveReorder) -> ClientResult<ReorderRequest> {
        self.reorders().receive(id, payload).await
    }

    async fn stats(&self) -> ClientResult<ReorderStats> {
        self.reorders().stats().await
    }

    async fn status_breakdown(&self) -> ClientResult<ChartData> {
        self.reorders().status_breakdown().await
    }

    async fn trends(&self) -> ClientResult<ChartData> {
        self.reorders().trends().await
    }
}
