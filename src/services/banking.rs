use crate::models::SessionIdentity;

/// Simulated balance lookup. Always answers with the configured amount.
pub fn check_balance(identity: &SessionIdentity, balance: u64) -> String {
    format!(
        "Hello {}, the balance of account {} is ${} (simulated).",
        identity.customer_name, identity.account_id, balance
    )
}
