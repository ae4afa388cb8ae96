use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Seen-set for import emission, keyed by (layer, symbol, entity title)
/// paths built with the `dedup_key` template helper.
///
/// One tracker lives for one generation run and is shared by every render
/// call in that run. Keys only ever go from absent to present; nothing is
/// removed. Layer templates ask it whether a `use` line for a symbol has
/// already been emitted while they iterate fields, so a file that needs the
/// same external symbol for several fields imports it exactly once.
#[derive(Debug, Default)]
pub struct ImportTracker {
    seen: Mutex<HashSet<String>>,
}

impl ImportTracker {
    /// Returns true exactly once per key: the first caller to present `key`
    /// marks it seen, every later caller observes false. Linearized under
    /// the lock, so concurrent renders cannot both see "not yet seen".
    pub fn check_and_mark(&self, key: &str) -> bool {
        let mut seen = self.seen.lock().unwrap_or_else(PoisonError::into_inner);
        if seen.contains(key) {
            return false;
        }
        seen.insert(key.to_string());
        true
    }
}
