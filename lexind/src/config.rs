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

use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_ITERATIONS: u8 = 15;
const DEFAULT_NEW_WORDS_PER_ITER: u8 = 25;

/// Config error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

/// Induction run parameters
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of refinement iterations, including the bootstrap
    pub iterations: u8,
    /// Number of candidate joins admitted to the lexicon per iteration
    pub new_words_per_iter: u8,
    /// Seed iteration-1 candidates from pair-joined bootstrap segments.
    /// When false the bootstrap pushes raw segments, the same way
    /// resegmentation does on later iterations.
    pub pair_join_bootstrap: bool,
    /// Re-add missing single-code-point entries (count 1) to every derived
    /// lexicon so the full alphabet stays priceable
    pub retain_alphabet: bool,
    /// NFKC-normalize corpus lines at load time
    pub normalize: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            iterations: DEFAULT_ITERATIONS,
            new_words_per_iter: DEFAULT_NEW_WORDS_PER_ITER,
            pair_join_bootstrap: true,
            retain_alphabet: true,
            normalize: false,
        }
    }
}

/// Struct corresponds with raw config json file.
/// You must use field names defined here as json object key.
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Default)]
struct RawConfig {
    iterations: Option<u8>,
    newWordsPerIter: Option<u8>,
    pairJoinBootstrap: Option<bool>,
    retainAlphabet: Option<bool>,
    normalize: Option<bool>,
}

impl Config {
    /// Merge settings: cli argument > config file > default
    pub fn new(
        config_file: Option<PathBuf>,
        iterations: Option<u8>,
        new_words_per_iter: Option<u8>,
    ) -> Result<Self, ConfigError> {
        let raw_config = match config_file {
            Some(path) => {
                let file = File::open(path)?;
                let reader = BufReader::new(file);
                serde_json::from_reader(reader)?
            }
            None => RawConfig::default(),
        };

        let defaults = Config::default();
        Ok(Config {
            iterations: iterations
                .or(raw_config.iterations)
                .unwrap_or(defaults.iterations),
            new_words_per_iter: new_words_per_iter
                .or(raw_config.newWordsPerIter)
                .unwrap_or(defaults.new_words_per_iter),
            pair_join_bootstrap: raw_config
                .pairJoinBootstrap
                .unwrap_or(defaults.pair_join_bootstrap),
            retain_alphabet: raw_config
                .retainAlphabet
                .unwrap_or(defaults.retain_alphabet),
            normalize: raw_config.normalize.unwrap_or(defaults.normalize),
        })
    }
}
