use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out `"{prefix}-{n}"` identifiers with `n` strictly increasing
///
/// A generator built with [`IdGenerator::seeded`] starts past the largest
/// numeric suffix among existing ids, so generated ids never collide with
/// seeded records.
#[derive(Debug)]
pub struct IdGenerator {
    prefix: &'static str,
    next: AtomicU64,
}

impl IdGenerator {
    /// Creates a generator whose first id is `{prefix}-1`
    pub fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            next: AtomicU64::new(1),
        }
    }

    /// Creates a generator that continues after `existing`
    ///
    /// Ids with a different prefix or a non-numeric suffix are ignored.
    pub fn seeded<'a>(prefix: &'static str, existing: impl IntoIterator<Item = &'a str>) -> Self {
        let highest = existing
            .into_iter()
            .filter_map(|id| Self::suffix(prefix, id))
            .max()
            .unwrap_or(0);

        Self {
            prefix,
            next: AtomicU64::new(highest + 1),
        }
    }

    /// Returns the next identifier
    pub fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, n)
    }

    fn suffix(prefix: &str, id: &str) -> Option<u64> {
        id.strip_prefix(prefix)?.strip_prefix('-')?.parse().ok()
    }
}
