use crate::utils::error::CipherError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An immutable message, either ciphertext or plaintext. Transformation
/// never mutates it; a fresh string is produced instead.
#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
}

impl Message {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Rotation distance, semantically taken modulo 26. Decoding applies the
/// negated shift, so the same value serves both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift(i32);

impl Shift {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Shift {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i32>()
            .map(Shift)
            .map_err(|_| CipherError::InvalidShiftFormat {
                value: s.to_string(),
            })
    }
}

/// Product of the transform stage, consumed by the emit stage.
#[derive(Debug, Clone)]
pub struct DecodedMessage {
    pub original: Message,
    pub decoded: String,
    pub shift: Shift,
}
