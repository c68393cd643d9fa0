use clap::Subcommand;
use habitkit_core::premium::{PlanId, StoredEntitlement, SubscriptionProvider};
use habitkit_core::Database;
use serde_json::json;

#[derive(Subcommand)]
pub enum PremiumAction {
    /// Show subscription status
    Status,
    /// Record a purchased subscription
    Activate {
        /// Plan: monthly or yearly
        plan: String,
    },
    /// Re-read the stored entitlement
    Restore,
    /// Drop the stored entitlement
    Deactivate,
}

pub fn run(action: PremiumAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let mut provider = StoredEntitlement::new(&db);

    match action {
        PremiumAction::Status => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "active": provider.is_subscription_active(),
                    "entitlement": provider.current(),
                }))?
            );
        }
        PremiumAction::Activate { plan } => {
            let plan: PlanId = plan.parse()?;
            let entitlement = provider.purchase(plan)?;
            println!("{}", serde_json::to_string_pretty(&entitlement)?);
        }
        PremiumAction::Restore => {
            let entitlement = provider.restore()?;
            match entitlement {
                Some(e) => println!("{}", serde_json::to_string_pretty(&e)?),
                None => println!("no previous purchases found"),
            }
        }
        PremiumAction::Deactivate => {
            provider.deactivate()?;
            println!("premium deactivated");
        }
    }
    Ok(())
}
