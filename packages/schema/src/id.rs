use crate::attributes::TestimonialItem;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static LAST_INSTANCE_ID: AtomicU64 = AtomicU64::new(0);

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

/// Generate a process-unique block instance id.
///
/// Seeded from wall-clock milliseconds so ids from different sessions stay
/// distinct, and forced strictly above the previous id so two blocks
/// inserted within the same millisecond never collide. Never returns 0
/// (0 is the unassigned sentinel in the attribute record).
pub fn next_instance_id() -> u64 {
    loop {
        let last = LAST_INSTANCE_ID.load(Ordering::Relaxed);
        let candidate = now_millis().max(last + 1).max(1);
        if LAST_INSTANCE_ID
            .compare_exchange(last, candidate, Ordering::Relaxed, Ordering::Relaxed)
            .is_ok()
        {
            return candidate;
        }
    }
}

/// Next list key for a new item: one above the largest key in use.
///
/// Pure function of the current list, so identical lists always produce
/// identical keys. Keys start at 1; 0 marks a key not yet assigned.
pub fn next_item_key(items: &[TestimonialItem]) -> u64 {
    items.iter().map(|item| item.key).max().unwrap_or(0) + 1
}
