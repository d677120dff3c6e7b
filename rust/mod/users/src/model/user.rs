use serde::{Deserialize, Serialize};

/// One user's billing entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Unique identifier (UUIDv4, no dashes), assigned on insert.
    pub user_id: String,

    pub name: String,

    /// Unique across all records.
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    pub unit_cost: f64,
    pub quantity: i64,
    pub paid_amount: f64,

    /// `unit_cost * quantity`.
    pub total_amount: f64,

    /// `total_amount - paid_amount`.
    pub remaining_amount: f64,

    /// RFC 3339 timestamp.
    pub timestamp: String,
}

/// A record ready for insertion. The store assigns `user_id`.
///
/// Built only through [`NewUser::new`], which derives the totals.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub unit_cost: f64,
    pub quantity: i64,
    pub paid_amount: f64,
    pub total_amount: f64,
    pub remaining_amount: f64,
    pub timestamp: String,
}

impl NewUser {
    pub fn new(
        name: String,
        email: String,
        phone_number: Option<String>,
        unit_cost: f64,
        quantity: i64,
        paid_amount: f64,
        timestamp: String,
    ) -> Self {
        let total_amount = unit_cost * quantity as f64;
        let remaining_amount = total_amount - paid_amount;
        Self {
            name,
            email,
            phone_number,
            unit_cost,
            quantity,
            paid_amount,
            total_amount,
            remaining_amount,
            timestamp,
        }
    }

    /// Attach the store-assigned id.
    pub fn into_record(self, user_id: String) -> UserRecord {
        UserRecord {
            user_id,
            name: self.name,
            email: self.email,
            phone_number: self.phone_number,
            unit_cost: self.unit_cost,
            quantity: self.quantity,
            paid_amount: self.paid_amount,
            total_amount: self.total_amount,
            remaining_amount: self.remaining_amount,
            timestamp: self.timestamp,
        }
    }
}
