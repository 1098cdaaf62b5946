use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::filter::{FieldValue, Queryable};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub is_returning: bool,
    pub orders_count: u32,
    /// Lifetime spend in minor units of `currency`.
    pub total_spent: i64,
    pub currency: String,
    pub last_order_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Queryable for Customer {
    fn field(&self, property: &str) -> Option<FieldValue> {
        match property {
            "fullName" => Some(FieldValue::Str(self.full_name.clone())),
            "email" => Some(FieldValue::Str(self.email.clone())),
            "phone" => Some(FieldValue::Str(self.phone.clone())),
            "isReturning" => Some(FieldValue::Bool(self.is_returning)),
            "ordersCount" => Some(FieldValue::Number(f64::from(self.orders_count))),
            // exposed in major units so operands read like prices
            "totalSpent" => Some(FieldValue::Number(self.total_spent as f64 / 100.0)),
            "lastOrderAt" => self.last_order_at.map(FieldValue::Date),
            "createdAt" => Some(FieldValue::Date(self.created_at)),
            "updatedAt" => Some(FieldValue::Date(self.updated_at)),
            _ => None,
        }
    }
}
