/*
 *  Copyright (c) 2023 The lexind Authors
 *
 *  Licensed under the Apache License, Version 2.0 (the "License");
 *  you may not use this file except in compliance with the License.
 *  You may obtain a copy of the License at
 *
 *      http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *  distributed under the License is distributed on an "AS IS" BASIS,
 *  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *  See the License for the specific language governing permissions and
 *  limitations under the License.
 */

//! Unsupervised lexicon induction from an unsegmented corpus.
//!
//! Given a list of words whose internal segmentation is unknown, the library
//! discovers a lexicon of sub-word units that jointly minimises a two-part
//! description length: the cost of transmitting the lexicon under a
//! per-character model plus the cost of transmitting the corpus under the
//! lexicon using minimum-cost segmentation.
//!
//! The main entry point is [`induce::run`], which takes the corpus as
//! code-point strings and returns one lexicon and one (prior, posterior)
//! pair per refinement iteration.

pub mod alphabet;
pub mod config;
pub mod corpus;
pub mod error;
pub mod induce;
pub mod lexicon;
pub mod minseg;
pub mod parse;

pub mod prelude {
    pub use crate::{
        error::LexindError, error::LexindResult, induce::run, induce::InductionResult,
    };
}
