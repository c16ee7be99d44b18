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

mod output;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use structopt::StructOpt;

use lexind::config::Config;
use lexind::corpus;
use lexind::prelude::*;

/// An unsupervised lexicon inducer
///
/// Reads a newline-delimited wordlist and iteratively refines a lexicon of
/// sub-word units that minimises the corpus description length.
#[derive(StructOpt)]
#[structopt(name = "lexind")]
struct Cli {
    /// Number of new words admitted to the lexicon per iteration
    new_words: Option<u8>,

    /// Input wordlist: one word per line, UTF-8
    #[structopt(short = "w", long = "wordlist", parse(from_os_str))]
    wordlist: PathBuf,

    /// Number of refinement iterations
    #[structopt(short = "i", long = "iterations")]
    iterations: Option<u8>,

    /// Path to the setting file in JSON format
    #[structopt(short = "r", long = "config-file", parse(from_os_str))]
    config_file: Option<PathBuf>,

    // Output text file: If not present, use stdout
    #[structopt(short = "o", long = "output", parse(from_os_str))]
    output_file: Option<PathBuf>,

    /// NFKC-normalize input lines
    #[structopt(long = "normalize")]
    normalize: bool,

    /// Also print the final lexicon, most frequent entries first
    #[structopt(long = "dump-lexicon")]
    dump_lexicon: bool,
}

fn main() {
    let args: Cli = Cli::from_args();

    let mut config = Config::new(args.config_file.clone(), args.iterations, args.new_words)
        .expect("Failed to load config file");
    config.normalize = config.normalize || args.normalize;

    let load_start = Instant::now();
    let corpus = corpus::load_wordlist_file(&args.wordlist, config.normalize)
        .expect("Failed to load the wordlist");
    eprintln!(
        "Loaded {} words in {:.3}s",
        corpus.len(),
        load_start.elapsed().as_secs_f64()
    );

    let run_start = Instant::now();
    let result = run(&corpus, &config).expect("Induction failed");
    eprintln!(
        "Ran {} iterations in {:.3}s",
        result.len(),
        run_start.elapsed().as_secs_f64()
    );

    let inner_writer: Box<dyn Write> = match &args.output_file {
        Some(output_path) => Box::new(
            File::create(output_path)
                .unwrap_or_else(|_| panic!("Failed to open output file {:?}", &output_path)),
        ),
        None => Box::new(io::stdout()),
    };
    let mut writer = BufWriter::new(inner_writer);

    output::write_report(&mut writer, &result).expect("Failed to write report");
    if args.dump_lexicon {
        output::write_lexicon(&mut writer, &result).expect("Failed to write lexicon");
    }
    writer.flush().expect("Failed to flush output");
}
