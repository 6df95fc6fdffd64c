//! Hostname validation for gear aliases.
//!
//! # Responsibilities
//! - Lower-case untrusted names (ASCII only) before any comparison
//! - Enforce DNS host name characters and length (RFC 952 / RFC 1123)
//! - Reject names that look like IPv4 literals
//!
//! # Design Decisions
//! - Checks run in a fixed order; the first failure wins
//! - The IP check is syntactic (`999.999.999.999` is rejected too)
//! - No identity here: callers attach the gear to the violation

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Longest accepted name, in bytes.
pub const MAX_NAME_LEN: usize = 255;

static INVALID_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9a-z\-.]").expect("static regex"));

static DOTTED_QUAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+\.\d+\.\d+$").expect("static regex"));

/// Why a name was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NameViolation {
    InvalidCharacters,
    TooLong,
    Blank,
    IpAddress,
}

impl fmt::Display for NameViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            NameViolation::InvalidCharacters => "Invalid characters",
            NameViolation::TooLong => "Too long",
            NameViolation::Blank => "Name was blank",
            NameViolation::IpAddress => "IP addresses are not allowed",
        };
        f.write_str(msg)
    }
}

/// Validate `name` and return its lower-cased form.
///
/// On failure the lower-cased name is returned alongside the violation so
/// callers can report what was actually checked.
pub fn normalize(name: &str) -> Result<String, (NameViolation, String)> {
    // ASCII folding only; non-ASCII input stays invalid.
    let dname = name.to_ascii_lowercase();

    if INVALID_CHARS.is_match(&dname) {
        return Err((NameViolation::InvalidCharacters, dname));
    }
    if dname.len() > MAX_NAME_LEN {
        return Err((NameViolation::TooLong, dname));
    }
    if dname.is_empty() {
        return Err((NameViolation::Blank, dname));
    }
    if DOTTED_QUAD.is_match(&dname) {
        return Err((NameViolation::IpAddress, dname));
    }

    Ok(dname)
}
