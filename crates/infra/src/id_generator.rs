//! Id-suffix generators.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use diskus_domain::IdGenerator;

/// Production generator: random 128-bit suffix in simple (dashless) form.
///
/// Collision resistance rests on the randomness here; the storage engine's
/// primary-key constraint is the only re-check.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

/// Deterministic counting generator for tests.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{:03}", n + 123)
    }
}
