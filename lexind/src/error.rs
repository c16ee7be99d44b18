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

use std::io::Error;
use thiserror::Error;

use crate::config::ConfigError;

pub type LexindResult<T> = Result<T, LexindError>;

/// Lexind error
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LexindError {
    #[error("{context}: {cause}")]
    ErrWithContext {
        context: String,
        cause: Box<LexindError>,
    },

    #[error("{context}: {cause}")]
    Io {
        cause: std::io::Error,
        context: String,
    },

    #[error("Config Error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("Input is too long, it can't be more than {1} code points, was {0}")]
    InputTooLong(usize, usize),

    #[error("Lexicon probing wrapped without finding a free slot")]
    LexiconFull,

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl From<std::io::Error> for LexindError {
    fn from(e: Error) -> Self {
        LexindError::Io {
            cause: e,
            context: String::from("IO Error"),
        }
    }
}

impl LexindError {
    pub fn with_context<S: Into<String>>(self, ctx: S) -> Self {
        match self {
            LexindError::Io { cause, .. } => LexindError::Io {
                cause,
                context: ctx.into(),
            },
            cause => LexindError::ErrWithContext {
                cause: Box::new(cause),
                context: ctx.into(),
            },
        }
    }
}
