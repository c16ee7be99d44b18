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

use lazy_static::lazy_static;

// a small repetitive wordlist: four surface forms sharing sub-units
const WORDLIST: &str = "banana
banana
banana
banana
bananas
bananas
bananas
ananas
ananas
ananas
nana
nana
";

lazy_static! {
    pub static ref CORPUS: Vec<Vec<char>> =
        lexind::corpus::load_wordlist(WORDLIST.as_bytes(), false).expect("fixture corpus");
}

pub fn contains_sub(hay: &[char], needle: &[char]) -> bool {
    hay.windows(needle.len()).any(|w| w == needle)
}
