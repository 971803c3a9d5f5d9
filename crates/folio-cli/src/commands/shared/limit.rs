/// Compute effective limit with precedence: `--limit` flag -> configured default.
#[must_use]
pub fn effective_limit(flag: Option<u32>, configured: u32) -> usize {
    usize::try_from(flag.unwrap_or(configured)).unwrap_or(usize::MAX)
}

/// Keep at most `limit` items, preserving order.
#[must_use]
pub fn take_limited<T>(mut items: Vec<T>, limit: usize) -> Vec<T> {
    items.truncate(limit);
    items
}
