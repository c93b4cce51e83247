//! Shared helper utilities for factory methods.

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Factories use this for snowflakes and names so every created row is unique across
/// the whole test binary.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Gets the next unique counter value rendered as a snowflake string.
pub fn next_snowflake() -> String {
    // Keep generated ids in the same digit range as real snowflakes
    (100_000_000_000_000_000 + next_id()).to_string()
}
