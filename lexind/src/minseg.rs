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

use crate::error::{LexindError, LexindResult};
use crate::lexicon::Lexicon;

/// Maximum segmentable input length in code points
pub const MAX_INPUT: usize = 200;

/// Minimum-cost segmentation engine.
///
/// Finds the cheapest concatenation of lexicon entries forming the input,
/// where each entry costs its self-information under the lexicon. Forward
/// dynamic programming fills a best-cost predecessor per end position;
/// backtracking reconstructs the chosen segments.
///
/// The engine keeps its arrays between calls, so repeated segmentation of
/// a corpus does not reallocate. Segments are exposed as (start, end)
/// code-point ranges over the caller's input.
pub struct Segmenter {
    costs: Vec<f64>,
    prev: Vec<usize>,
    path: Vec<(usize, usize)>,
}

impl Default for Segmenter {
    fn default() -> Self {
        Segmenter::new()
    }
}

impl Segmenter {
    pub fn new() -> Segmenter {
        Segmenter {
            costs: Vec::new(),
            prev: Vec::new(),
            path: Vec::new(),
        }
    }

    /// Prepare the arrays for an input of `length` code points.
    /// Predecessors fall back to single-character segments so the
    /// backtrack yields a partition even when no entry is known.
    fn reset(&mut self, length: usize) {
        self.costs.clear();
        self.costs.resize(length + 1, f64::INFINITY);
        self.costs[0] = 0.0;
        self.prev.clear();
        self.prev.extend((0..=length).map(|i| i.saturating_sub(1)));
        self.path.clear();
    }

    /// Segment `input` under `lexicon`, returning the total cost.
    ///
    /// The cost is +∞ when no finite-cost segmentation exists; the path
    /// still partitions the input. Inputs longer than [`MAX_INPUT`] are
    /// rejected.
    pub fn segment(&mut self, lexicon: &Lexicon, input: &[char]) -> LexindResult<f64> {
        let n = input.len();
        if n > MAX_INPUT {
            return Err(LexindError::InputTooLong(n, MAX_INPUT));
        }
        self.reset(n);

        for end in 1..=n {
            for start in 0..end {
                let cost = self.costs[start] + lexicon.cost(&input[start..end]);
                // strictly smaller only: among equal-cost candidates the
                // leftmost start wins
                if cost < self.costs[end] {
                    self.costs[end] = cost;
                    self.prev[end] = start;
                }
            }
        }

        let mut end = n;
        while end > 0 {
            let start = self.prev[end];
            self.path.push((start, end));
            end = start;
        }
        self.path.reverse();

        Ok(self.costs[n])
    }

    /// Chosen segments of the last call, as code-point ranges in
    /// left-to-right order
    pub fn path(&self) -> &[(usize, usize)] {
        &self.path
    }

    /// Chosen segments of the last call as slices of `input`
    pub fn segments<'a>(&'a self, input: &'a [char]) -> impl Iterator<Item = &'a [char]> + 'a {
        self.path.iter().map(move |&(start, end)| &input[start..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn lexicon(entries: &[(&str, u64)]) -> Lexicon {
        let mut lex = Lexicon::new();
        for (word, count) in entries {
            lex.add(&chars(word), *count).unwrap();
        }
        lex
    }

    fn segmented(segmenter: &Segmenter, input: &[char]) -> Vec<String> {
        segmenter
            .segments(input)
            .map(|s| s.iter().collect())
            .collect()
    }

    #[test]
    fn single_letter_lexicon() {
        let lex = lexicon(&[("a", 3), ("b", 3)]);
        let input = chars("ab");
        let mut segmenter = Segmenter::new();
        let cost = segmenter.segment(&lex, &input).unwrap();
        assert_eq!(segmented(&segmenter, &input), vec!["a", "b"]);
        assert!((cost - 2.0).abs() < 1e-12);
    }

    #[test]
    fn prefers_cheaper_longer_entry() {
        let lex = lexicon(&[("ab", 1), ("a", 1), ("b", 1)]);
        let input = chars("ab");
        let mut segmenter = Segmenter::new();
        let cost = segmenter.segment(&lex, &input).unwrap();
        assert_eq!(segmented(&segmenter, &input), vec!["ab"]);
        assert!((cost - (3f64).log2()).abs() < 1e-12);
    }

    #[test]
    fn unknown_char_still_partitions() {
        let lex = lexicon(&[("a", 1), ("b", 1)]);
        let input = chars("axb");
        let mut segmenter = Segmenter::new();
        let cost = segmenter.segment(&lex, &input).unwrap();
        assert_eq!(cost, f64::INFINITY);
        let flat: String = segmented(&segmenter, &input).concat();
        assert_eq!(flat, "axb");
    }

    #[test]
    fn empty_lexicon_still_partitions() {
        let lex = Lexicon::new();
        let input = chars("abc");
        let mut segmenter = Segmenter::new();
        let cost = segmenter.segment(&lex, &input).unwrap();
        assert_eq!(cost, f64::INFINITY);
        assert_eq!(segmented(&segmenter, &input), vec!["a", "b", "c"]);
    }

    #[test]
    fn partition_concatenates_to_input() {
        let lex = lexicon(&[("ab", 4), ("abc", 2), ("c", 3), ("b", 1), ("a", 1)]);
        let input = chars("abcabcab");
        let mut segmenter = Segmenter::new();
        segmenter.segment(&lex, &input).unwrap();
        let flat: String = segmented(&segmenter, &input).concat();
        assert_eq!(flat, "abcabcab");
    }

    #[test]
    fn reported_cost_matches_segment_costs() {
        let lex = lexicon(&[("ab", 4), ("abc", 2), ("c", 3), ("b", 1), ("a", 1)]);
        let input = chars("abcabcab");
        let mut segmenter = Segmenter::new();
        let cost = segmenter.segment(&lex, &input).unwrap();
        let sum: f64 = segmenter.segments(&input).map(|s| lex.cost(s)).sum();
        assert!((cost - sum).abs() < 1e-9);
    }

    #[test]
    fn cost_is_optimal() {
        // exhaustive check over all 2^(n-1) segmentations
        fn all_partitions(input: &[char]) -> Vec<Vec<Vec<char>>> {
            if input.is_empty() {
                return vec![vec![]];
            }
            let mut result = Vec::new();
            for split in 1..=input.len() {
                let head = input[..split].to_vec();
                for mut tail in all_partitions(&input[split..]) {
                    let mut parts = vec![head.clone()];
                    parts.append(&mut tail);
                    result.push(parts);
                }
            }
            result
        }

        let lex = lexicon(&[("ab", 4), ("ba", 2), ("a", 3), ("b", 1)]);
        let input = chars("abab");
        let mut segmenter = Segmenter::new();
        let cost = segmenter.segment(&lex, &input).unwrap();
        for parts in all_partitions(&input) {
            let alternative: f64 = parts.iter().map(|p| lex.cost(p)).sum();
            assert!(alternative >= cost - 1e-9);
        }
    }

    #[test]
    fn engine_reuse_matches_fresh_engine() {
        let lex = lexicon(&[("ab", 2), ("a", 1), ("b", 1), ("c", 1)]);
        let first = chars("abcab");
        let second = chars("cab");

        let mut reused = Segmenter::new();
        reused.segment(&lex, &first).unwrap();
        let reused_cost = reused.segment(&lex, &second).unwrap();

        let mut fresh = Segmenter::new();
        let fresh_cost = fresh.segment(&lex, &second).unwrap();

        assert_eq!(reused_cost, fresh_cost);
        assert_eq!(segmented(&reused, &second), segmented(&fresh, &second));
    }

    #[test]
    fn rejects_overlong_input() {
        let lex = lexicon(&[("a", 1)]);
        let input = vec!['a'; MAX_INPUT + 1];
        let mut segmenter = Segmenter::new();
        claim::assert_matches!(
            segmenter.segment(&lex, &input),
            Err(LexindError::InputTooLong(_, MAX_INPUT))
        );
    }

    #[test]
    fn empty_input_is_empty_partition() {
        let lex = lexicon(&[("a", 1)]);
        let mut segmenter = Segmenter::new();
        let cost = segmenter.segment(&lex, &[]).unwrap();
        assert_eq!(cost, 0.0);
        assert!(segmenter.path().is_empty());
    }
}
