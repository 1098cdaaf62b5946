use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::filter::{FieldValue, Queryable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Placed,
    Processed,
    Delivered,
    Complete,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Placed => "placed",
            Self::Processed => "processed",
            Self::Delivered => "delivered",
            Self::Complete => "complete",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Placed => "Placed",
            Self::Processed => "Processed",
            Self::Delivered => "Delivered",
            Self::Complete => "Complete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    /// Human order reference, e.g. `ORD-1042`.
    pub number: String,
    pub customer_id: Uuid,
    pub customer_name: String,
    pub status: OrderStatus,
    /// Order total in minor units of `currency`.
    pub total_amount: i64,
    pub currency: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Queryable for Order {
    fn field(&self, property: &str) -> Option<FieldValue> {
        match property {
            "number" => Some(FieldValue::Str(self.number.clone())),
            "customerName" => Some(FieldValue::Str(self.customer_name.clone())),
            "status" => Some(FieldValue::Str(self.status.as_str().to_string())),
            "totalAmount" => Some(FieldValue::Number(self.total_amount as f64 / 100.0)),
            "createdAt" => Some(FieldValue::Date(self.created_at)),
            "updatedAt" => Some(FieldValue::Date(self.updated_at)),
            _ => None,
        }
    }
}
