pub mod controller;
mod customer;
mod error;
pub mod filter;
mod order;
mod page;
mod product;
pub mod session;

pub use controller::{Controller, ControllerAction, SortDir};
pub use customer::Customer;
pub use error::Result;
pub use filter::{FieldValue, FilterDescriptor, FilterOperator, Property, PropertyType, Queryable};
pub use order::{Order, OrderStatus};
pub use page::{PAGE_SIZE, Page};
pub use product::{Product, ProductStatus};
pub use session::{SESSION_COOKIE_NAME, UserSession, decode_session, encode_session};

// FIXME: Find a way to keep this out of the public surface entirely.
#[doc(hidden)]
pub use anyhow::anyhow as internal_anyhow_dont_use;
