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

use std::io::{BufWriter, Write};

use lexind::corpus::string_of;
use lexind::prelude::*;

type Writer = BufWriter<Box<dyn Write>>;

/// One line per iteration: prior, posterior, total description length and
/// the change against the previous iteration
pub fn write_report(writer: &mut Writer, result: &InductionResult) -> LexindResult<()> {
    writeln!(
        writer,
        "{:>3} {:>20} {:>20} {:>20} {:>20}",
        "it", "prior", "posterior", "h", "delta"
    )?;
    let mut previous = 0.0;
    for i in 0..result.len() {
        let h = result.description_length(i);
        let delta = if i == 0 { h } else { h - previous };
        writeln!(
            writer,
            "{:>3} {:>20.6} {:>20.6} {:>20.6} {:>20.6}",
            i,
            result.priors()[i],
            result.posteriors()[i],
            h,
            delta
        )?;
        previous = h;
    }
    Ok(())
}

/// The last iteration's lexicon, most frequent entries first
pub fn write_lexicon(writer: &mut Writer, result: &InductionResult) -> LexindResult<()> {
    let lexicon = match result.lexicons().last() {
        Some(lexicon) => lexicon,
        None => return Ok(()),
    };
    for (key, count) in lexicon.items_sorted() {
        writeln!(writer, "{} {}", string_of(key), count)?;
    }
    Ok(())
}
