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

use indexmap::IndexMap;

/// Frequency model over the single code points of a corpus.
///
/// Supplies the per-character self-information used to price lexicon
/// entries. Iteration order is the order in which code points were first
/// seen, which keeps downstream sums reproducible.
#[derive(Debug, Clone, Default)]
pub struct Alphabet {
    counts: IndexMap<char, u64>,
    total: u64,
}

impl Alphabet {
    pub fn new() -> Alphabet {
        Alphabet {
            counts: IndexMap::new(),
            total: 0,
        }
    }

    /// Build the model from every code point of every corpus entry
    pub fn from_corpus(corpus: &[Vec<char>]) -> Alphabet {
        let mut alphabet = Alphabet::new();
        alphabet.ingest(corpus);
        alphabet
    }

    pub fn add(&mut self, c: char) {
        *self.counts.entry(c).or_insert(0) += 1;
        self.total += 1;
    }

    pub fn ingest(&mut self, corpus: &[Vec<char>]) {
        for word in corpus {
            for &c in word {
                self.add(c);
            }
        }
    }

    pub fn count(&self, c: char) -> u64 {
        self.counts.get(&c).copied().unwrap_or(0)
    }

    /// Total number of code-point occurrences ingested
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct code points
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.counts.iter().map(|(&c, &n)| (c, n))
    }

    /// Self-information of a code point in bits, +∞ if unknown
    pub fn char_cost(&self, c: char) -> f64 {
        match self.counts.get(&c) {
            Some(&n) => -((n as f64 / self.total as f64).log2()),
            None => f64::INFINITY,
        }
    }

    /// Summed self-information of a string, +∞ if any code point is unknown
    pub fn word_cost(&self, word: &[char]) -> f64 {
        word.iter().map(|&c| self.char_cost(c)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(words: &[&str]) -> Vec<Vec<char>> {
        words.iter().map(|w| w.chars().collect()).collect()
    }

    #[test]
    fn counts_every_occurrence() {
        let alphabet = Alphabet::from_corpus(&corpus(&["ab", "ab", "ab"]));
        assert_eq!(alphabet.count('a'), 3);
        assert_eq!(alphabet.count('b'), 3);
        assert_eq!(alphabet.count('x'), 0);
        assert_eq!(alphabet.total(), 6);
        assert_eq!(alphabet.len(), 2);
    }

    #[test]
    fn char_cost_is_self_information() {
        let alphabet = Alphabet::from_corpus(&corpus(&["ab", "ab", "ab"]));
        // both halves of the mass: one bit each
        assert!((alphabet.char_cost('a') - 1.0).abs() < 1e-12);
        assert!((alphabet.char_cost('b') - 1.0).abs() < 1e-12);
    }

    #[test]
    fn unknown_char_is_infinite() {
        let alphabet = Alphabet::from_corpus(&corpus(&["ab"]));
        assert_eq!(alphabet.char_cost('z'), f64::INFINITY);
        let word: Vec<char> = "az".chars().collect();
        assert_eq!(alphabet.word_cost(&word), f64::INFINITY);
    }

    #[test]
    fn word_cost_sums_over_chars() {
        let alphabet = Alphabet::from_corpus(&corpus(&["ab", "ab", "ab"]));
        let word: Vec<char> = "aab".chars().collect();
        assert!((alphabet.word_cost(&word) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn iteration_follows_first_seen_order() {
        let alphabet = Alphabet::from_corpus(&corpus(&["ba", "ca"]));
        let order: Vec<char> = alphabet.iter().map(|(c, _)| c).collect();
        assert_eq!(order, vec!['b', 'a', 'c']);
    }
}
