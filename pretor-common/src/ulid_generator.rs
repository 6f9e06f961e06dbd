//! Process-wide ULID generation
//!
//! ULIDs generated here are monotonic within the process: ids created in the
//! same millisecond still sort in creation order, which keeps operation
//! tokens and history entries comparable by id.

use std::sync::{LazyLock, Mutex};
use ulid::{Generator, Ulid};

static GENERATOR: LazyLock<Mutex<Generator>> = LazyLock::new(|| Mutex::new(Generator::new()));

/// Generate a monotonic ULID.
///
/// Falls back to a fresh random ULID in the (practically unreachable) case
/// that the per-millisecond random component overflows.
pub fn generate_ulid() -> Ulid {
    let mut generator = GENERATOR.lock().unwrap_or_else(|e| e.into_inner());
    generator.generate().unwrap_or_else(|_| Ulid::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ulids_are_unique() {
        let a = generate_ulid();
        let b = generate_ulid();
        assert_ne!(a, b);
    }

    #[test]
    fn test_generated_ulids_are_monotonic() {
        let ids: Vec<Ulid> = (0..64).map(|_| generate_ulid()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }
}
