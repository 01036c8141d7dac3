//! Approval repository: list, request, decide.

use chrono::Utc;

use pf_core::entities::{Approval, NewApproval};
use pf_core::enums::{ApprovalStatus, EntityType};

use crate::LedgerStore;
use crate::error::LedgerError;

impl LedgerStore {
    pub async fn list_approvals(&self, umbrella: &str) -> Vec<Approval> {
        self.with_tenant(umbrella, |t| t.approvals.to_vec()).await
    }

    /// File a new `PENDING` approval at the front of the queue.
    pub async fn request_approval(
        &self,
        umbrella: &str,
        new: NewApproval,
    ) -> Result<Approval, LedgerError> {
        new.validate()?;
        self.with_tenant_mut(umbrella, |t| {
            let id = t.approvals.fresh_id()?;
            let approval = new.into_approval(id, Utc::now());
            tracing::info!(umbrella, id = %approval.id, kind = %approval.kind, "approval requested");
            t.approvals.prepend(approval.clone());
            Ok(approval)
        })
        .await
    }

    /// Move a `PENDING` approval to `APPROVED` or `REJECTED`.
    ///
    /// Deciding an approval that is no longer pending, or "deciding" it back
    /// to `PENDING`, is an `InvalidTransition`.
    pub async fn decide_approval(
        &self,
        umbrella: &str,
        id: &str,
        status: ApprovalStatus,
    ) -> Result<Approval, LedgerError> {
        self.with_tenant_mut(umbrella, |t| {
            let approval = t.approvals.get_mut(id)?;
            if !approval.status.can_transition_to(status) {
                return Err(LedgerError::InvalidTransition {
                    entity_type: EntityType::Approval,
                    id: id.to_string(),
                    from: approval.status.to_string(),
                    to: status.to_string(),
                });
            }
            approval.status = status;
            tracing::info!(umbrella, id, %status, "approval decided");
            Ok(approval.clone())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use pf_core::enums::{ApprovalStatus, ApprovalType};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::error::LedgerError;
    use crate::seed::PENDING_APPROVAL_ID;
    use crate::test_support::helpers::{TENANT, new_approval, seeded_store};

    #[tokio::test]
    async fn request_prepends_pending_approval() {
        let store = seeded_store();
        let approval = store
            .request_approval(TENANT, new_approval(ApprovalType::BankAccount))
            .await
            .unwrap();

        assert!(approval.id.starts_with("APP-"));
        assert_eq!(approval.status, ApprovalStatus::Pending);
        assert_eq!(approval.requester, "A");

        let listed = store.list_approvals(TENANT).await;
        assert_eq!(listed[0], approval);
    }

    #[tokio::test]
    async fn request_rejects_blank_requester() {
        let store = seeded_store();
        let mut new = new_approval(ApprovalType::Payout);
        new.requester = " ".into();
        let err = store.request_approval(TENANT, new).await.unwrap_err();
        assert!(matches!(err, LedgerError::Validation(_)));
    }

    #[rstest]
    #[case(ApprovalStatus::Approved)]
    #[case(ApprovalStatus::Rejected)]
    #[tokio::test]
    async fn decide_pending(#[case] decision: ApprovalStatus) {
        let store = seeded_store();
        let approval = store
            .decide_approval(TENANT, PENDING_APPROVAL_ID, decision)
            .await
            .unwrap();
        assert_eq!(approval.status, decision);
    }

    #[tokio::test]
    async fn decide_twice_is_invalid_transition() {
        let store = seeded_store();
        store
            .decide_approval(TENANT, PENDING_APPROVAL_ID, ApprovalStatus::Approved)
            .await
            .unwrap();
        let err = store
            .decide_approval(TENANT, PENDING_APPROVAL_ID, ApprovalStatus::Rejected)
            .await
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidTransition { .. }));
    }

    #[tokio::test]
    async fn decide_back_to_pending_is_invalid_transition() {
        let store = seeded_store();
        let err = store
            .decide_approval(TENANT, PENDING_APPROVAL_ID, ApprovalStatus::Pending)
            .await
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidTransition { .. }));
    }

    #[tokio::test]
    async fn decide_missing_is_not_found() {
        let store = seeded_store();
        let err = store
            .decide_approval(TENANT, "APP-NONE", ApprovalStatus::Approved)
            .await
            .unwrap_err();
        assert!(matches!(err, LedgerError::NotFound { .. }));
    }
}
