use serde::{Deserialize, Serialize};

/// Rows per page, fixed across every listing screen.
pub const PAGE_SIZE: usize = 10;

/// One page of a listing result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: usize,
}
