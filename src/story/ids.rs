// src/story/ids.rs

use std::collections::HashSet;

/// Mints identifiers that are unique with respect to a known set of taken
/// values.
///
/// Values look like `<prefix><counter>` with the counter rendered as eight
/// hex digits. The counter is monotonic and every minted value is recorded,
/// so one generator never hands out the same value twice and never returns
/// anything it was seeded with.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    taken: HashSet<String>,
    counter: u64,
}

impl IdGenerator {
    pub fn new<I, S>(taken: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            taken: taken.into_iter().map(Into::into).collect(),
            counter: 0,
        }
    }

    pub fn is_taken(&self, value: &str) -> bool {
        self.taken.contains(value)
    }

    pub fn mint(&mut self, prefix: &str) -> String {
        loop {
            let candidate = format!("{prefix}{:08x}", self.counter);
            self.counter += 1;
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}
