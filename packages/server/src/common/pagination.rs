//! Offset-based pagination over in-memory result sets.
//!
//! The catalog is a small fixed collection, so queries materialize the full
//! filtered set and pages are cut out of it afterwards. `total_count` always
//! refers to the filtered set before paging.

use serde::Serialize;

/// Raw pagination input as it arrives on the query string.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageArgs {
    pub limit: Option<i32>,
    pub offset: Option<i32>,
}

impl PageArgs {
    /// Apply defaults and bounds: limit defaults to 50, clamped to 1-100;
    /// negative offsets are treated as zero.
    pub fn validate(&self) -> Page {
        Page {
            limit: self.limit.unwrap_or(50).clamp(1, 100) as usize,
            offset: self.offset.unwrap_or(0).max(0) as usize,
        }
    }
}

/// Validated and normalized pagination window.
#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub limit: usize,
    pub offset: usize,
}

/// A page of results plus enough metadata for the client to page further.
#[derive(Debug, Clone, Serialize)]
pub struct Connection<T> {
    pub nodes: Vec<T>,
    pub total_count: i32,
    pub has_next_page: bool,
}

/// Cut one page out of a fully materialized result set.
pub fn paginate<T>(items: Vec<T>, page: &Page) -> Connection<T> {
    let total_count = items.len() as i32;
    let nodes: Vec<T> = items
        .into_iter()
        .skip(page.offset)
        .take(page.limit)
        .collect();
    let has_next_page = (page.offset + nodes.len()) < total_count as usize;

    Connection {
        nodes,
        total_count,
        has_next_page,
    }
}
