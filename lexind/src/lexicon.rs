/*
 * Copyright (c) 2023 The lexind Authors
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use itertools::Itertools;

use crate::error::{LexindError, LexindResult};

const INITIAL_CAPACITY: usize = 1024;
const LOAD_MAX: f64 = 0.70;

/// Polynomial rolling hash over code points (DJB2 family).
/// Distinct strings only need to spread approximately uniformly.
fn hash_key(key: &[char]) -> u64 {
    let mut hsh: u64 = 5381;
    for &c in key {
        hsh = hsh.wrapping_mul(33).wrapping_add(c as u64);
    }
    hsh
}

#[derive(Debug, Clone, Copy, Default)]
struct Slot {
    off: u32,
    len: u32,
    count: u64,
    occupied: bool,
}

/// Frequency-weighted lexicon: code-point string → count.
///
/// Open-addressed table with linear probing. Keys live in one contiguous
/// code-point arena; slots hold (offset, length) references into it, so
/// inserting a key never allocates per entry. The table doubles its
/// capacity whenever the post-insert load factor reaches `LOAD_MAX`.
#[derive(Debug, Clone)]
pub struct Lexicon {
    slots: Vec<Slot>,
    keys: Vec<char>,
    occupancy: usize,
    total: u64,
}

impl Default for Lexicon {
    fn default() -> Self {
        Lexicon::new()
    }
}

impl Lexicon {
    pub fn new() -> Lexicon {
        Lexicon::with_capacity(INITIAL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Lexicon {
        debug_assert!(capacity > 0);
        Lexicon {
            slots: vec![Slot::default(); capacity],
            keys: Vec::new(),
            occupancy: 0,
            total: 0,
        }
    }

    fn key_at(&self, slot: Slot) -> &[char] {
        let off = slot.off as usize;
        &self.keys[off..off + slot.len as usize]
    }

    /// Add `count` occurrences of `word`, inserting it if absent.
    /// The word is copied into the lexicon's own storage.
    pub fn add(&mut self, word: &[char], count: u64) -> LexindResult<()> {
        debug_assert!(!word.is_empty());
        debug_assert!(count > 0);

        let capacity = self.slots.len();
        let start = (hash_key(word) % capacity as u64) as usize;
        let mut idx = start;
        loop {
            let slot = self.slots[idx];
            if !slot.occupied {
                let off = self.keys.len();
                self.keys.extend_from_slice(word);
                self.slots[idx] = Slot {
                    off: off as u32,
                    len: word.len() as u32,
                    count,
                    occupied: true,
                };
                self.occupancy += 1;
                self.total += count;
                if self.occupancy as f64 >= capacity as f64 * LOAD_MAX {
                    self.rehash();
                }
                return Ok(());
            }
            if self.key_at(slot) == word {
                self.slots[idx].count += count;
                self.total += count;
                return Ok(());
            }
            idx += 1;
            if idx == capacity {
                idx = 0;
            }
            if idx == start {
                // unreachable while the load-factor bound holds
                return Err(LexindError::LexiconFull);
            }
        }
    }

    /// Reinsert every occupied slot into a table of double the capacity.
    /// The key arena is untouched, only slot positions move.
    fn rehash(&mut self) {
        let new_capacity = self.slots.len() * 2;
        let mut new_slots = vec![Slot::default(); new_capacity];
        for slot in self.slots.iter().copied().filter(|s| s.occupied) {
            let mut idx = (hash_key(self.key_at(slot)) % new_capacity as u64) as usize;
            while new_slots[idx].occupied {
                idx += 1;
                if idx == new_capacity {
                    idx = 0;
                }
            }
            new_slots[idx] = slot;
        }
        self.slots = new_slots;
    }

    /// Occurrence count of `word`, 0 if absent
    pub fn get_count(&self, word: &[char]) -> u64 {
        let capacity = self.slots.len();
        let start = (hash_key(word) % capacity as u64) as usize;
        let mut idx = start;
        loop {
            let slot = self.slots[idx];
            if !slot.occupied {
                return 0;
            }
            if self.key_at(slot) == word {
                return slot.count;
            }
            idx += 1;
            if idx == capacity {
                idx = 0;
            }
            if idx == start {
                return 0;
            }
        }
    }

    /// Self-information of `word` under the empirical counts, in bits.
    /// Absent words cost +∞, which makes any present segmentation win.
    pub fn cost(&self, word: &[char]) -> f64 {
        let count = self.get_count(word);
        if count == 0 {
            return f64::INFINITY;
        }
        -((count as f64 / self.total as f64).log2())
    }

    /// Number of distinct keys
    pub fn occupancy(&self) -> usize {
        self.occupancy
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupancy == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[char], u64)> + '_ {
        self.slots
            .iter()
            .filter(|s| s.occupied)
            .map(move |&s| (self.key_at(s), s.count))
    }

    /// All (key, count) pairs in descending count order.
    /// Equal counts are ordered by key so a given input always ranks the
    /// same way.
    pub fn items_sorted(&self) -> Vec<(&[char], u64)> {
        self.iter()
            .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)))
            .collect()
    }
}
