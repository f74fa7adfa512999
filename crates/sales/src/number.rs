//! Order number generation.
//!
//! Numbers look like `SO-20250110-0421`: the generation date (not the order
//! date) plus a uniform 4-digit suffix. Generation draws fresh suffixes until
//! the existence probe reports an unused candidate; the storage layer still
//! enforces uniqueness at save time, so a losing race simply retries.

use chrono::NaiveDate;
use rand::Rng;

use salesdesk_core::DomainResult;

pub const ORDER_NUMBER_PREFIX: &str = "SO";

/// Size of the per-day suffix namespace (0000..=9999).
const SUFFIX_SPACE: u32 = 10_000;

/// Draw a suffix uniformly from the per-day namespace.
pub fn random_suffix() -> u32 {
    rand::thread_rng().gen_range(0..SUFFIX_SPACE)
}

/// Produce an order number not currently in use.
///
/// `draw_suffix` and `exists` are injectable so tests can script collisions.
/// Retries are unbounded; with 10,000 candidates per day termination is
/// near-certain unless the namespace is exhausted.
pub fn generate_order_number<D, E>(
    date: NaiveDate,
    mut draw_suffix: D,
    mut exists: E,
) -> DomainResult<String>
where
    D: FnMut() -> u32,
    E: FnMut(&str) -> DomainResult<bool>,
{
    let date_part = date.format("%Y%m%d").to_string();
    loop {
        let suffix = draw_suffix() % SUFFIX_SPACE;
        let candidate = format!("{ORDER_NUMBER_PREFIX}-{date_part}-{suffix:04}");
        if !exists(&candidate)? {
            return Ok(candidate);
        }
    }
}
