//! RNG module - fair label selection
//!
//! A card must never show the same label twice, and every arrangement of the
//! pool should be equally likely. The deck shuffles the pool exactly once
//! (Fisher-Yates via `rand`) and then hands labels out front to back, so each
//! label is drawn at most once.
//!
//! Also provides seeded generators for deterministic tests.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Generator seeded from OS entropy, fresh per invocation
pub fn from_entropy() -> StdRng {
    StdRng::from_entropy()
}

/// Deterministic generator for tests and reproducible prints
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Shuffled labels drawn without replacement
#[derive(Debug, Clone)]
pub struct LabelDeck {
    labels: Vec<String>,
    /// Index of the next label to hand out
    next: usize,
}

impl LabelDeck {
    /// Shuffle the given labels into a new deck.
    ///
    /// Duplicates are dropped first (keeping the first occurrence), so
    /// drawing never yields the same text twice.
    pub fn shuffled<R: Rng + ?Sized>(labels: &[String], rng: &mut R) -> Self {
        let mut seen = HashSet::with_capacity(labels.len());
        let mut unique: Vec<String> = Vec::with_capacity(labels.len());
        for label in labels {
            if seen.insert(label.as_str()) {
                unique.push(label.clone());
            }
        }
        unique.shuffle(rng);
        Self {
            labels: unique,
            next: 0,
        }
    }

    /// Labels left to draw
    pub fn remaining(&self) -> usize {
        self.labels.len() - self.next
    }

    /// Draw the next label, or `None` once the deck is exhausted
    pub fn draw(&mut self) -> Option<String> {
        let label = self.labels.get(self.next)?.clone();
        self.next += 1;
        Some(label)
    }
}
