//! transform.rs - Identifier transforms for obfuscated class names.
//!
//! Each method is a pure, deterministic string-to-string transform. The
//! method set is a closed enum so an unknown method is unrepresentable
//! inside the engine; the string boundary (`FromStr`, serde, CLI parsing)
//! is where `InvalidMethod` can still occur.
//!
//! License: MIT OR Apache-2.0

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::errors::ClassveilError;

/// Prefix for digest- and hex-derived names. CSS class names must not start
/// with a digit, so every generated name leads with a letter.
pub const GENERATED_NAME_PREFIX: char = 'c';

/// Number of hex characters of the digest kept by [`ObfuscationMethod::Hash`].
const HASH_DIGEST_CHARS: usize = 8;

/// Selects how an original class name is turned into its obfuscated form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObfuscationMethod {
    /// Per-character rotation keyed by the identifier's length.
    ///
    /// The rotation amount equals the char count of the input, so the output
    /// has the same length as the input and the scheme is invertible by
    /// anyone who knows it. That length correlation is a known weakness of
    /// this method, not something the engine compensates for; use `Hash`
    /// when it matters.
    #[default]
    Shift,
    /// Fixed-length digest-derived name: a letter prefix plus the first
    /// eight hex characters of the SHA-256 digest. Constant output length
    /// breaks the length correlation of `Shift`.
    Hash,
    /// Letter prefix plus the hex encoding of the identifier's bytes.
    /// Fully reversible by decoding; offers no real obfuscation and exists
    /// for completeness and testing.
    Hex,
}

impl ObfuscationMethod {
    /// All methods, in the order they are documented and displayed.
    pub const ALL: [ObfuscationMethod; 3] = [
        ObfuscationMethod::Shift,
        ObfuscationMethod::Hash,
        ObfuscationMethod::Hex,
    ];

    /// The lowercase name used on the CLI and in option files.
    pub fn as_str(&self) -> &'static str {
        match self {
            ObfuscationMethod::Shift => "shift",
            ObfuscationMethod::Hash => "hash",
            ObfuscationMethod::Hex => "hex",
        }
    }
}

impl fmt::Display for ObfuscationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObfuscationMethod {
    type Err = ClassveilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shift" => Ok(ObfuscationMethod::Shift),
            "hash" => Ok(ObfuscationMethod::Hash),
            "hex" => Ok(ObfuscationMethod::Hex),
            other => Err(ClassveilError::InvalidMethod(other.to_string())),
        }
    }
}

/// Produces the candidate obfuscated name for one identifier.
///
/// Pure and deterministic: the same identifier and method always yield the
/// same output. An empty identifier is returned unchanged for every method.
/// Collision handling between candidates is the mapping builder's job, not
/// this function's.
pub fn obfuscate_identifier(identifier: &str, method: ObfuscationMethod) -> String {
    if identifier.is_empty() {
        return String::new();
    }

    match method {
        ObfuscationMethod::Shift => {
            let shift = (identifier.chars().count() % 26) as u8;
            identifier.chars().map(|c| rotate_char(c, shift)).collect()
        }
        ObfuscationMethod::Hash => {
            let digest = Sha256::digest(identifier.as_bytes());
            let encoded = hex::encode(digest);
            format!("{}{}", GENERATED_NAME_PREFIX, &encoded[..HASH_DIGEST_CHARS])
        }
        ObfuscationMethod::Hex => {
            format!("{}{}", GENERATED_NAME_PREFIX, hex::encode(identifier.as_bytes()))
        }
    }
}

/// Rotates ASCII letters within their case, modulo 26. Everything else
/// passes through unchanged.
fn rotate_char(c: char, shift: u8) -> char {
    if c.is_ascii_uppercase() {
        (((c as u8 - b'A' + shift) % 26) + b'A') as char
    } else if c.is_ascii_lowercase() {
        (((c as u8 - b'a' + shift) % 26) + b'a') as char
    } else {
        c
    }
}
