//! Member lifecycle controller
//!
//! Encodes the member status state machine (active, frozen, cancelled) and
//! the form validation in front of each transition. Every transition is a
//! mutating API call; on success the cached entity is replaced with the
//! server's representation and the list and aggregate stats are re-fetched.
//! On any failure the local status is left untouched and the server message
//! is surfaced as-is.

use crate::error::{DeskError, DeskResult};
use crate::gateway::MemberGateway;
use crate::store::ViewStore;
use chrono::{Days, NaiveDate};
use shared::models::payment::PaymentMethod;
use shared::models::{Member, MemberStatus};
use shared::query::MemberQuery;
use shared::request::{AdminCredentials, CancelMember, FreezeMember, ReactivateMember};
use shared::response::MemberStats;

/// Freeze duration presets. `Custom` makes the end-date field directly
/// editable and disables auto-computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreezeDuration {
    OneWeek,
    TwoWeeks,
    OneMonth,
    ThreeMonths,
    Custom,
}

impl FreezeDuration {
    pub fn days(&self) -> Option<u64> {
        match self {
            Self::OneWeek => Some(7),
            Self::TwoWeeks => Some(14),
            Self::OneMonth => Some(30),
            Self::ThreeMonths => Some(90),
            Self::Custom => None,
        }
    }
}

/// Freeze dialog form
#[derive(Debug, Clone)]
pub struct FreezeForm {
    pub start_date: NaiveDate,
    pub duration: FreezeDuration,
    /// Only consulted in `Custom` mode
    pub custom_end_date: Option<NaiveDate>,
    pub reason: Option<String>,
    pub notes: Option<String>,
}

impl FreezeForm {
    /// End date: start + preset days, recomputed whenever duration or start
    /// changes; the manually entered date in `Custom` mode.
    pub fn end_date(&self) -> DeskResult<NaiveDate> {
        match self.duration.days() {
            Some(days) => self
                .start_date
                .checked_add_days(Days::new(days))
                .ok_or_else(|| DeskError::validation("Freeze end date out of range")),
            None => self
                .custom_end_date
                .ok_or_else(|| DeskError::validation("An end date is required for a custom freeze")),
        }
    }

    fn payload(&self) -> DeskResult<FreezeMember> {
        let end = self.end_date()?;
        if end <= self.start_date {
            return Err(DeskError::validation(
                "Freeze end date must be after the start date",
            ));
        }
        Ok(FreezeMember {
            freeze_start_date: self.start_date,
            freeze_end_date: end,
            reason: self.reason.clone(),
            notes: self.notes.clone(),
        })
    }
}

/// Constrained cancellation reasons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    Relocation,
    TooExpensive,
    Medical,
    Dissatisfied,
    Other,
}

impl CancelReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Relocation => "relocation",
            Self::TooExpensive => "too_expensive",
            Self::Medical => "medical",
            Self::Dissatisfied => "dissatisfied",
            Self::Other => "other",
        }
    }
}

/// Cancellation dialog form. Submission is blocked until the confirmation
/// box is checked and the acting admin re-authenticates.
#[derive(Debug, Clone)]
pub struct CancelForm {
    pub reason: Option<CancelReason>,
    pub notes: Option<String>,
    pub confirmed: bool,
    pub admin_username: String,
    pub admin_password: String,
}

/// Reactivation dialog form
#[derive(Debug, Clone)]
pub struct ReactivateForm {
    pub reason: String,
    pub restart_date: NaiveDate,
    pub notes: Option<String>,
    pub confirmed: bool,
}

/// First step of the two-step unfreeze confirmation. Produced by
/// [`MemberController::request_unfreeze`]; the API call only fires when it
/// is handed back to [`MemberController::confirm_unfreeze`].
#[derive(Debug, Clone, Copy)]
#[must_use = "unfreeze does not happen until the confirmation is submitted"]
pub struct UnfreezeConfirmation {
    member_id: i64,
}

/// Controller for the members page
pub struct MemberController<G: MemberGateway> {
    gateway: G,
    store: ViewStore<Member>,
    stats: MemberStats,
}

impl<G: MemberGateway> MemberController<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            store: ViewStore::new(),
            stats: MemberStats::default(),
        }
    }

    pub fn store(&self) -> &ViewStore<Member> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ViewStore<Member> {
        &mut self.store
    }

    pub fn stats(&self) -> &MemberStats {
        &self.stats
    }

    fn find(&self, id: i64) -> DeskResult<Member> {
        self.store
            .superset()
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or_else(|| DeskError::validation(format!("Unknown member id {id}")))
    }

    // ==================== fetching ====================

    /// Seed or re-fetch the authoritative superset (empty query) and the
    /// aggregate stats. Client-side filtering recomputes views from this
    /// superset on every keystroke.
    pub async fn seed(&mut self) {
        self.fetch(&MemberQuery::default()).await;
        self.refresh_stats().await;
    }

    /// Server-side fetch under an explicit query. Used for the seed fetch
    /// and explicit re-fetches; the outcome (including rate limiting and
    /// failures) lands in the store's fetch state, and stale responses are
    /// discarded there.
    pub async fn fetch(&mut self, query: &MemberQuery) {
        let ticket = self.store.begin_fetch(query.is_empty());
        let result = self.gateway.list(query).await;
        self.store.complete_fetch(ticket, result);
    }

    async fn refresh_stats(&mut self) {
        match self.gateway.stats().await {
            Ok(stats) => self.stats = stats,
            Err(err) => tracing::warn!(%err, "member stats refresh failed"),
        }
    }

    async fn after_transition(&mut self, updated: Member) {
        let id = updated.id;
        self.store.replace_entity(|m| m.id == id, updated);
        self.seed().await;
    }

    // ==================== transitions ====================

    /// `active → frozen`
    pub async fn freeze(&mut self, id: i64, form: &FreezeForm) -> DeskResult<Member> {
        let member = self.find(id)?;
        if member.status != MemberStatus::Active {
            return Err(DeskError::validation(
                "Only active memberships can be frozen",
            ));
        }
        let payload = form.payload()?;
        let updated = self.gateway.freeze(id, &payload).await?;
        self.after_transition(updated.clone()).await;
        Ok(updated)
    }

    /// `frozen → active`, step one: validate and hand back a confirmation.
    /// No API call is made here.
    pub fn request_unfreeze(&self, id: i64) -> DeskResult<UnfreezeConfirmation> {
        let member = self.find(id)?;
        if member.status != MemberStatus::Frozen {
            return Err(DeskError::validation(
                "Only frozen memberships can be unfrozen",
            ));
        }
        Ok(UnfreezeConfirmation { member_id: id })
    }

    /// `frozen → active`, step two: the confirmed dialog submits
    pub async fn confirm_unfreeze(
        &mut self,
        confirmation: UnfreezeConfirmation,
    ) -> DeskResult<Member> {
        let updated = self.gateway.unfreeze(confirmation.member_id).await?;
        self.after_transition(updated.clone()).await;
        Ok(updated)
    }

    /// `active|frozen → cancelled` (soft delete; the record is retained).
    ///
    /// The acting admin's credentials are verified first; a failed
    /// verification short-circuits before the destructive call.
    pub async fn cancel(&mut self, id: i64, form: &CancelForm) -> DeskResult<Member> {
        let member = self.find(id)?;
        if member.status.is_cancelled() {
            return Err(DeskError::validation("Membership is already cancelled"));
        }
        if !form.confirmed {
            return Err(DeskError::validation(
                "Confirm the cancellation before submitting",
            ));
        }
        let reason = form
            .reason
            .ok_or_else(|| DeskError::validation("A cancellation reason is required"))?;

        let verified = self
            .gateway
            .verify_password(&form.admin_username, &form.admin_password)
            .await?;
        if !verified {
            return Err(DeskError::VerificationFailed);
        }

        let payload = CancelMember {
            reason: reason.as_str().to_string(),
            notes: form.notes.clone(),
            credentials: AdminCredentials {
                username: form.admin_username.clone(),
                password: form.admin_password.clone(),
            },
        };
        let updated = self.gateway.cancel(id, &payload).await?;
        self.after_transition(updated.clone()).await;
        Ok(updated)
    }

    /// Open the reactivation dialog: validates the transition is legal and
    /// fetches the on-file payment method fresh so the admin can update it
    /// before reactivating.
    pub async fn begin_reactivate(&self, id: i64) -> DeskResult<Option<PaymentMethod>> {
        let member = self.find(id)?;
        if !member.status.is_cancelled() {
            return Err(DeskError::validation(
                "Only cancelled memberships can be reactivated",
            ));
        }
        Ok(self.gateway.payment_method(id).await?)
    }

    /// `cancelled → active`
    pub async fn reactivate(&mut self, id: i64, form: &ReactivateForm) -> DeskResult<Member> {
        let member = self.find(id)?;
        if !member.status.is_cancelled() {
            return Err(DeskError::validation(
                "Only cancelled memberships can be reactivated",
            ));
        }
        if !form.confirmed {
            return Err(DeskError::validation(
                "Confirm the reactivation before submitting",
            ));
        }
        if form.reason.trim().is_empty() {
            return Err(DeskError::validation("A reactivation reason is required"));
        }
        let payload = ReactivateMember {
            reason: form.reason.clone(),
            restart_date: form.restart_date,
            notes: form.notes.clone(),
        };
        let updated = self.gateway.reactivate(id, &payload).await?;
        self.after_transition(updated.clone()).await;
        Ok(updated)
    }
}
