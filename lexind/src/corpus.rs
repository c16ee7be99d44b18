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

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use unicode_normalization::UnicodeNormalization;

use crate::error::{LexindError, LexindResult};

/// Longest pair-join admitted as a lexicon candidate, in code points.
/// Joins past the ceiling are dropped, not truncated.
pub const JOIN_MAX: usize = 100;

/// Decode a UTF-8 string into code points
pub fn chars_of(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Encode code points back into a UTF-8 string
pub fn string_of(word: &[char]) -> String {
    word.iter().collect()
}

/// Read a newline-delimited wordlist: one word per line, empty lines
/// skipped, trailing CR stripped. `normalize` applies NFKC to each line.
pub fn load_wordlist<R: BufRead>(reader: R, normalize: bool) -> LexindResult<Vec<Vec<char>>> {
    let mut corpus = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.strip_suffix('\r').unwrap_or(&line);
        if word.is_empty() {
            continue;
        }
        let word: Vec<char> = if normalize {
            word.nfkc().collect()
        } else {
            word.chars().collect()
        };
        corpus.push(word);
    }
    Ok(corpus)
}

/// Load a wordlist file, contextualising I/O errors with the path
pub fn load_wordlist_file(path: &Path, normalize: bool) -> LexindResult<Vec<Vec<char>>> {
    let file = File::open(path)
        .map_err(|e| LexindError::from(e).with_context(path.display().to_string()))?;
    load_wordlist(BufReader::new(file), normalize)
}
