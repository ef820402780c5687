use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::ops::Deref;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::signal::Signal;

/// Append-only list of signals the operator has to repeat.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Sequence {
    signals: Vec<Signal>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, signal: Signal) {
        self.signals.push(signal);
    }

    pub fn clear(&mut self) {
        self.signals.clear();
    }

    /// Whether `input` agrees with the start of the sequence.
    pub fn is_prefix(&self, input: &[Signal]) -> bool {
        input.len() <= self.signals.len() && self.signals[..input.len()] == *input
    }
}

impl Deref for Sequence {
    type Target = [Signal];

    fn deref(&self) -> &[Signal] {
        &self.signals
    }
}

pub struct SequenceGenerator {
    rng: SmallRng,
}

impl SequenceGenerator {
    /// Seeded once from the wall clock so restarts don't replay the same game.
    pub fn from_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);

        Self::from_seed(nanos)
    }

    pub fn from_seed(seed: u64) -> Self {
        log::debug!("Seeding sequence generator with {}", seed);

        SequenceGenerator {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn extend(&mut self, sequence: &mut Sequence) {
        let signal = Signal::ALL[self.rng.gen_range(0..Signal::ALL.len())];
        sequence.push(signal);

        log::debug!("Generated sequence: {:?}", sequence.iter().map(|s| s.index()).collect::<Vec<_>>());
    }
}
