//! Premium entitlement capability.
//!
//! The platform in-app-purchase flow is an external collaborator; the rest
//! of the app only ever needs "is a subscription currently active" plus a
//! way to record a completed purchase. [`StoredEntitlement`] is the
//! shipped provider: it keeps the entitlement in the kv store, where a
//! platform store adapter would write after its own receipt handling.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PurchaseError, ValidationError};
use crate::storage::Database;

/// Free tier tracks a single habit; premium removes the cap.
pub const FREE_HABIT_LIMIT: usize = 1;

/// Whether another habit may be created.
pub fn can_add_habit(is_premium: bool, habit_count: usize) -> bool {
    is_premium || habit_count < FREE_HABIT_LIMIT
}

/// Subscription plans offered by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanId {
    Monthly,
    Yearly,
}

impl PlanId {
    /// Store product identifier for this plan.
    pub fn product_id(&self) -> &'static str {
        match self {
            PlanId::Monthly => "habittracker.premium.monthly.v2",
            PlanId::Yearly => "habittracker.premium.yearly",
        }
    }
}

impl FromStr for PlanId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "monthly" => Ok(PlanId::Monthly),
            "yearly" => Ok(PlanId::Yearly),
            other => Err(ValidationError::UnknownPlan(other.to_string())),
        }
    }
}

/// An active premium subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entitlement {
    pub plan: PlanId,
    pub activated_at: DateTime<Utc>,
}

/// The capability surface the presentation layer depends on. Everything
/// past this boundary -- store SDKs, receipts, vendor endpoints -- is out
/// of scope.
pub trait SubscriptionProvider {
    /// Whether a subscription is currently valid.
    fn is_subscription_active(&self) -> bool;

    /// Record a purchase of `plan`.
    fn purchase(&mut self, plan: PlanId) -> Result<Entitlement, PurchaseError>;

    /// Re-read whatever entitlement the store already knows about.
    fn restore(&mut self) -> Result<Option<Entitlement>, PurchaseError>;
}

const ENTITLEMENT_KEY: &str = "premium_entitlement";

/// kv-store-backed subscription provider.
pub struct StoredEntitlement<'a> {
    db: &'a Database,
}

impl<'a> StoredEntitlement<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// The persisted entitlement, if any. An unreadable row is treated as
    /// no entitlement rather than a phantom subscription.
    pub fn current(&self) -> Option<Entitlement> {
        let json = self.db.kv_get(ENTITLEMENT_KEY).ok().flatten()?;
        serde_json::from_str(&json).ok()
    }

    /// Drop the stored entitlement.
    pub fn deactivate(&self) -> Result<(), PurchaseError> {
        self.db
            .kv_delete(ENTITLEMENT_KEY)
            .map_err(|e| PurchaseError::Store(e.to_string()))
    }
}

impl SubscriptionProvider for StoredEntitlement<'_> {
    fn is_subscription_active(&self) -> bool {
        self.current().is_some()
    }

    fn purchase(&mut self, plan: PlanId) -> Result<Entitlement, PurchaseError> {
        if self.current().is_some() {
            return Err(PurchaseError::AlreadyActive);
        }
        let entitlement = Entitlement {
            plan,
            activated_at: Utc::now(),
        };
        let json = serde_json::to_string(&entitlement)
            .map_err(|e| PurchaseError::Store(e.to_string()))?;
        self.db
            .kv_set(ENTITLEMENT_KEY, &json)
            .map_err(|e| PurchaseError::Store(e.to_string()))?;
        Ok(entitlement)
    }

    fn restore(&mut self) -> Result<Option<Entitlement>, PurchaseError> {
        Ok(self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_tier_caps_at_one_habit() {
        assert!(can_add_habit(false, 0));
        assert!(!can_add_habit(false, 1));
        assert!(!can_add_habit(false, 5));
        assert!(can_add_habit(true, 0));
        assert!(can_add_habit(true, 100));
    }

    #[test]
    fn plan_ids_map_to_store_products() {
        assert_eq!(
            PlanId::Monthly.product_id(),
            "habittracker.premium.monthly.v2"
        );
        assert_eq!(PlanId::Yearly.product_id(), "habittracker.premium.yearly");
    }

    #[test]
    fn plan_parses_from_cli_names() {
        assert_eq!("monthly".parse::<PlanId>().unwrap(), PlanId::Monthly);
        assert_eq!("YEARLY".parse::<PlanId>().unwrap(), PlanId::Yearly);
        assert!("weekly".parse::<PlanId>().is_err());
    }

    #[test]
    fn purchase_restore_deactivate_round_trip() {
        let db = Database::open_memory().unwrap();
        let mut provider = StoredEntitlement::new(&db);

        assert!(!provider.is_subscription_active());
        assert_eq!(provider.restore().unwrap(), None);

        let entitlement = provider.purchase(PlanId::Yearly).unwrap();
        assert_eq!(entitlement.plan, PlanId::Yearly);
        assert!(provider.is_subscription_active());
        assert_eq!(provider.restore().unwrap(), Some(entitlement));

        assert!(matches!(
            provider.purchase(PlanId::Monthly),
            Err(PurchaseError::AlreadyActive)
        ));

        provider.deactivate().unwrap();
        assert!(!provider.is_subscription_active());
    }
}
