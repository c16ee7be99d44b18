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

use crate::alphabet::Alphabet;
use crate::config::Config;
use crate::corpus::JOIN_MAX;
use crate::error::{LexindError, LexindResult};
use crate::lexicon::Lexicon;
use crate::minseg::{Segmenter, MAX_INPUT};
use crate::parse::ParseBuffer;

/// One lexicon and one (prior, posterior) bit-length pair per iteration.
///
/// The prior is the cost of the lexicon under the alphabet's
/// per-character model; the posterior is the cost of the corpus under the
/// lexicon via minimum-cost segmentation. Their sum is the total
/// description length the iteration achieved.
#[derive(Debug)]
pub struct InductionResult {
    lexicons: Vec<Lexicon>,
    priors: Vec<f64>,
    posteriors: Vec<f64>,
}

impl InductionResult {
    pub fn lexicons(&self) -> &[Lexicon] {
        &self.lexicons
    }

    pub fn priors(&self) -> &[f64] {
        &self.priors
    }

    pub fn posteriors(&self) -> &[f64] {
        &self.posteriors
    }

    /// Total description length of iteration `i`
    pub fn description_length(&self, i: usize) -> f64 {
        self.priors[i] + self.posteriors[i]
    }

    /// Number of iterations performed
    pub fn len(&self) -> usize {
        self.lexicons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexicons.is_empty()
    }
}

/// Run the induction over `corpus`.
///
/// Iteration 0 bootstraps a single-code-point lexicon from the corpus
/// alphabet. Every later iteration counts the candidate joins seeded by
/// the previous one, admits the most frequent `config.new_words_per_iter`
/// of them, resegments the corpus to keep only entries that pay their
/// way, and reports the description length of the result.
///
/// Fails up front if `config.iterations` is zero or any corpus entry
/// exceeds [`MAX_INPUT`] code points. No partial result is returned.
pub fn run(corpus: &[Vec<char>], config: &Config) -> LexindResult<InductionResult> {
    if config.iterations == 0 {
        return Err(LexindError::InvalidParameter(String::from(
            "iterations must be at least 1",
        )));
    }
    for word in corpus {
        if word.len() > MAX_INPUT {
            return Err(LexindError::InputTooLong(word.len(), MAX_INPUT));
        }
    }
    Induction::new(corpus, config).run()
}

struct Induction<'a> {
    corpus: &'a [Vec<char>],
    config: &'a Config,
    alphabet: Alphabet,
    segmenter: Segmenter,
    parse: ParseBuffer,
}

impl<'a> Induction<'a> {
    fn new(corpus: &'a [Vec<char>], config: &'a Config) -> Induction<'a> {
        Induction {
            corpus,
            config,
            alphabet: Alphabet::from_corpus(corpus),
            segmenter: Segmenter::new(),
            parse: ParseBuffer::new(),
        }
    }

    fn run(mut self) -> LexindResult<InductionResult> {
        let iterations = self.config.iterations as usize;
        let mut lexicons = Vec::with_capacity(iterations);
        let mut priors = Vec::with_capacity(iterations);
        let mut posteriors = Vec::with_capacity(iterations);

        let (lexicon, prior, posterior) = self.bootstrap()?;
        lexicons.push(lexicon);
        priors.push(prior);
        posteriors.push(posterior);

        for _ in 1..iterations {
            let (lexicon, prior, posterior) = self.refine(lexicons.last().unwrap())?;
            lexicons.push(lexicon);
            priors.push(prior);
            posteriors.push(posterior);
        }

        Ok(InductionResult {
            lexicons,
            priors,
            posteriors,
        })
    }

    /// Lexicon cost under the alphabet model: each key once
    fn prior_of(&self, lexicon: &Lexicon) -> f64 {
        lexicon
            .iter()
            .map(|(key, _)| self.alphabet.word_cost(key))
            .sum()
    }

    /// Iteration 0: one lexicon entry per alphabet code point, with the
    /// alphabet count. The parse buffer is seeded with the candidate pool
    /// for iteration 1.
    fn bootstrap(&mut self) -> LexindResult<(Lexicon, f64, f64)> {
        let mut lexicon = Lexicon::new();
        for (c, n) in self.alphabet.iter() {
            lexicon.add(&[c], n)?;
        }
        let prior = self.prior_of(&lexicon);

        let mut posterior = 0.0;
        for word in self.corpus {
            posterior += self.segmenter.segment(&lexicon, word)?;
            if self.config.pair_join_bootstrap {
                push_pair_joined(&mut self.parse, &self.segmenter, word);
            } else {
                push_raw(&mut self.parse, &self.segmenter, word);
            }
        }
        Ok((lexicon, prior, posterior))
    }

    /// Iteration i ≥ 1, deriving a refined lexicon from `prev`
    fn refine(&mut self, prev: &Lexicon) -> LexindResult<(Lexicon, f64, f64)> {
        // count how often each candidate join appeared in the seed
        let mut candidates = Lexicon::new();
        while let Some(segment) = self.parse.pop() {
            candidates.add(segment, 1)?;
        }

        // provisional lexicon: previous iteration plus the top joins
        let mut provisional = prev.clone();
        let top = self.config.new_words_per_iter as usize;
        for (key, count) in candidates.items_sorted().into_iter().take(top) {
            provisional.add(key, count)?;
        }

        // resegmentation pass 1: find which entries actually pay their way
        self.parse.clear();
        for word in self.corpus {
            self.segmenter.segment(&provisional, word)?;
            push_raw(&mut self.parse, &self.segmenter, word);
        }

        // the iteration lexicon keeps exactly the segments that occurred
        let mut lexicon = Lexicon::new();
        while let Some(segment) = self.parse.pop() {
            lexicon.add(segment, 1)?;
        }
        if self.config.retain_alphabet {
            for (c, _) in self.alphabet.iter() {
                if lexicon.get_count(&[c]) == 0 {
                    lexicon.add(&[c], 1)?;
                }
            }
        }
        let prior = self.prior_of(&lexicon);

        // resegmentation pass 2: reportable posterior, and the pair-joined
        // seed of the next iteration's candidates
        let mut posterior = 0.0;
        for word in self.corpus {
            posterior += self.segmenter.segment(&lexicon, word)?;
            push_pair_joined(&mut self.parse, &self.segmenter, word);
        }
        Ok((lexicon, prior, posterior))
    }
}

fn push_raw(parse: &mut ParseBuffer, segmenter: &Segmenter, word: &[char]) {
    for &(start, end) in segmenter.path() {
        parse.push(&word[start..end]);
    }
}

/// Push the concatenation of successive segment pairs; an unpaired last
/// segment goes in alone. Joins over the length ceiling are dropped.
fn push_pair_joined(parse: &mut ParseBuffer, segmenter: &Segmenter, word: &[char]) {
    for pair in segmenter.path().chunks(2) {
        match pair {
            &[(s1, e1), (s2, e2)] => {
                if (e1 - s1) + (e2 - s2) <= JOIN_MAX {
                    parse.push2(&word[s1..e1], &word[s2..e2]);
                }
            }
            &[(s1, e1)] => parse.push(&word[s1..e1]),
            _ => {}
        }
    }
}
