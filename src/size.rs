//! Size classes used to filter random puzzle selection.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse puzzle-size bucket understood by the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    /// No size preference
    #[default]
    Any,
    /// Small puzzles
    Small,
    /// Medium puzzles
    Medium,
    /// Large puzzles
    Large,
    /// Huge puzzles
    Huge,
}

impl SizeClass {
    /// All size classes, in code order.
    pub const ALL: [SizeClass; 5] = [
        SizeClass::Any,
        SizeClass::Small,
        SizeClass::Medium,
        SizeClass::Large,
        SizeClass::Huge,
    ];

    /// Numeric code sent to the repository as `psize`.
    pub const fn code(self) -> u8 {
        match self {
            SizeClass::Any => 0,
            SizeClass::Small => 1,
            SizeClass::Medium => 2,
            SizeClass::Large => 3,
            SizeClass::Huge => 4,
        }
    }

    /// Keyword naming this size class.
    pub const fn keyword(self) -> &'static str {
        match self {
            SizeClass::Any => "any",
            SizeClass::Small => "small",
            SizeClass::Medium => "medium",
            SizeClass::Large => "large",
            SizeClass::Huge => "huge",
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for SizeClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SizeClass::ALL
            .into_iter()
            .find(|size| size.keyword() == s)
            .ok_or_else(|| Error::InvalidSize(s.to_string()))
    }
}

/// Resolve an optional size keyword, defaulting to [`SizeClass::Any`].
///
/// # Example
///
/// ```
/// use nonofetch::size::{resolve, SizeClass};
///
/// assert_eq!(resolve(Some("large")).unwrap().code(), 3);
/// assert_eq!(resolve(None).unwrap(), SizeClass::Any);
/// assert!(resolve(Some("gigantic")).is_err());
/// ```
pub fn resolve(keyword: Option<&str>) -> Result<SizeClass> {
    match keyword {
        Some(keyword) => keyword.parse(),
        None => Ok(SizeClass::default()),
    }
}
