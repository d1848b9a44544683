//! Mutation payloads for the lifecycle endpoints

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Freeze payload (`POST /members/{id}/freeze`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreezeMember {
    pub freeze_start_date: NaiveDate,
    pub freeze_end_date: NaiveDate,
    pub reason: Option<String>,
    pub notes: Option<String>,
}

/// Acting administrator credentials, re-verified before cancellation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

/// Cancellation payload (`DELETE /members/{id}`, soft delete)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelMember {
    pub reason: String,
    pub notes: Option<String>,
    #[serde(flatten)]
    pub credentials: AdminCredentials,
}

/// Reactivation payload (`POST /members/{id}/reactivate`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactivateMember {
    pub reason: String,
    pub restart_date: NaiveDate,
    pub notes: Option<String>,
}

/// Rejection payload (`PUT /inventory/reorders/{id}/reject`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectReorder {
    pub rejection_reason: String,
}

/// Receipt payload (`PUT /inventory/reorders/{id}/receive`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiveReorder {
    pub quantity_received: u32,
}

/// Password verification request (`POST /admin/verify-password`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyPassword {
    pub username: String,
    pub password: String,
}

/// Password verification response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyPasswordResponse {
    pub verified: bool,
}
