//! Display-name generation for the synthetic cardholder

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

const FIRST_NAMES: &[&str] = &[
    "Aarav", "Aisha", "Ananya", "Arjun", "Chloe", "Diego", "Elena", "Farah", "Hiro", "Ishaan",
    "Jane", "Kavya", "Liam", "Maya", "Mateo", "Meera", "Noah", "Olivia", "Priya", "Rohan",
    "Sara", "Tariq", "Vikram", "Zoe",
];

const LAST_NAMES: &[&str] = &[
    "Bose", "Carter", "Das", "Doe", "Fernandes", "Garcia", "Iyer", "Kapoor", "Khan", "Kim",
    "Mehta", "Nair", "Okafor", "Patel", "Reddy", "Rossi", "Sato", "Shah", "Singh", "Walker",
];

/// Produce a fresh display name
///
/// Returns `None` when no name can be produced; callers fall back to a
/// placeholder.
#[cfg_attr(any(test, feature = "test-helpers"), mockall::automock)]
pub trait NameGenerator: Send + Sync {
    fn generate_display_name(&self) -> Option<String>;
}

/// Picks a random first and last name
#[derive(Debug)]
pub struct RandomNameGenerator {
    rng: Mutex<StdRng>,
}

impl RandomNameGenerator {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic generator, for reproducible demos and tests
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomNameGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl NameGenerator for RandomNameGenerator {
    fn generate_display_name(&self) -> Option<String> {
        let mut rng = match self.rng.lock() {
            Ok(rng) => rng,
            Err(e) => {
                tracing::warn!("Name generator lock poisoned: {}", e);
                return None;
            }
        };
        let first = FIRST_NAMES.choose(&mut *rng)?;
        let last = LAST_NAMES.choose(&mut *rng)?;
        Some(format!("{first} {last}"))
    }
}
