//! OS build identifiers.
//!
//! Build identifiers have the shape `<major><train><build>[<suffix>]`, for
//! example `16E227` or `15E302a`. They order by major version first, then
//! train letter, then build number, then suffix (unsuffixed first).

use std::fmt;
use std::str::FromStr;

use crate::error::PlatformError;

/// A parsed OS build identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BuildVersion {
    pub major: u32,
    /// Uppercase train letter (`A` for the .0 release, `B` for .1, ...).
    pub train: char,
    pub build: u32,
    pub suffix: Option<char>,
}

impl BuildVersion {
    /// Whether `self` lies in the inclusive range `low..=high`.
    pub fn within(&self, low: &BuildVersion, high: &BuildVersion) -> bool {
        low <= self && self <= high
    }
}

impl FromStr for BuildVersion {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PlatformError::InvalidBuild {
            value: s.to_string(),
        };

        let major_len = s.find(|c: char| !c.is_ascii_digit()).ok_or_else(invalid)?;
        if major_len == 0 {
            return Err(invalid());
        }
        let major: u32 = s[..major_len].parse().map_err(|_| invalid())?;

        let mut rest = s[major_len..].chars();
        let train = rest.next().filter(char::is_ascii_uppercase).ok_or_else(invalid)?;

        let tail = rest.as_str();
        let build_len = tail
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(tail.len());
        if build_len == 0 {
            return Err(invalid());
        }
        let build: u32 = tail[..build_len].parse().map_err(|_| invalid())?;

        let mut suffix_chars = tail[build_len..].chars();
        let suffix = match (suffix_chars.next(), suffix_chars.next()) {
            (None, _) => None,
            (Some(c), None) if c.is_ascii_lowercase() => Some(c),
            _ => return Err(invalid()),
        };

        Ok(Self {
            major,
            train,
            build,
            suffix,
        })
    }
}

impl fmt::Display for BuildVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.major, self.train, self.build)?;
        if let Some(suffix) = self.suffix {
            write!(f, "{suffix}")?;
        }
        Ok(())
    }
}
