use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::filter::{FieldValue, Queryable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Published,
    Draft,
    Archived,
}

impl ProductStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Published => "published",
            Self::Draft => "draft",
            Self::Archived => "archived",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Published => "Published",
            Self::Draft => "Draft",
            Self::Archived => "Archived",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub sku: String,
    pub status: ProductStatus,
    /// Unit price in minor units of `currency`.
    pub price: i64,
    pub currency: String,
    pub stock: u32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Queryable for Product {
    fn field(&self, property: &str) -> Option<FieldValue> {
        match property {
            "name" => Some(FieldValue::Str(self.name.clone())),
            "sku" => Some(FieldValue::Str(self.sku.clone())),
            "status" => Some(FieldValue::Str(self.status.as_str().to_string())),
            "price" => Some(FieldValue::Number(self.price as f64 / 100.0)),
            "stock" => Some(FieldValue::Number(f64::from(self.stock))),
            "createdAt" => Some(FieldValue::Date(self.created_at)),
            "updatedAt" => Some(FieldValue::Date(self.updated_at)),
            _ => None,
        }
    }
}
