//! Whitespace tokenizer for image scripts.

use std::str::SplitWhitespace;

use crate::error::{RgbError, Result};
use crate::types::Colour;

/// A stream of whitespace-separated words with typed readers.
pub struct Tokens<'a> {
    words: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            words: source.split_whitespace(),
        }
    }

    /// Next word, or `None` at end of input.
    pub fn next_word(&mut self) -> Option<&'a str> {
        self.words.next()
    }

    /// Next word; `what` names the expected argument in the error.
    pub fn word(&mut self, what: &str) -> Result<&'a str> {
        self.next_word().ok_or_else(|| RgbError::Parse {
            message: format!("Missing {}", what),
            help: None,
        })
    }

    /// Next word as an integer.
    pub fn int(&mut self, what: &str) -> Result<i32> {
        let word = self.word(what)?;
        word.parse().map_err(|_| RgbError::Parse {
            message: format!("Invalid {}: {}", what, word),
            help: Some("Expected a whole number".to_string()),
        })
    }

    /// Next three words as an `r g b` colour.
    pub fn colour(&mut self) -> Result<Colour> {
        let mut channel = |name: &str| -> Result<u8> {
            let word = self.word(name)?;
            word.parse().map_err(|_| RgbError::Parse {
                message: format!("Invalid {} channel: {}", name, word),
                help: Some("Colour channels are whole numbers from 0 to 255".to_string()),
            })
        };
        Ok(Colour::rgb(channel("red")?, channel("green")?, channel("blue")?))
    }
}
