//! Rules that decide where a spliced region ends.

use crate::error::{Error, Result};
use regex::Regex;
use std::fmt;

/// Decides whether `line` is the first line after the region being replaced.
///
/// `next` is the line following `line`, or `None` when `line` is the last
/// line of the document. The accepted line is kept in the output.
pub trait RegionEnd {
    fn is_region_end(&self, line: &str, next: Option<&str>) -> bool;
}

impl<F> RegionEnd for F
where
    F: Fn(&str, Option<&str>) -> bool,
{
    fn is_region_end(&self, line: &str, next: Option<&str>) -> bool {
        self(line, next)
    }
}

/// Named end-of-region rules.
#[derive(Debug, Clone)]
pub enum Boundary {
    /// The first line containing this literal. Prefer a marker that occurs
    /// exactly once after the start marker.
    Contains(String),

    /// A line containing `marker` whose following line contains
    /// `next_contains`.
    ///
    /// Lets a generic line such as `useEffect(() => {` act as the boundary
    /// only where it opens one particular block. Brittle: it depends on the
    /// exact content of the adjacent line, so use [`Boundary::Contains`] with
    /// a unique marker when the target file allows it.
    ContainsFollowedBy { marker: String, next_contains: String },

    /// A line matching this pattern. The line terminator is stripped before
    /// matching so `$` anchors at the end of the visible text.
    Matches(Regex),

    /// Never fires: the region runs to the end of the document.
    EndOfDocument,
}

impl Boundary {
    pub fn contains(marker: impl Into<String>) -> Result<Self> {
        let marker = non_empty(marker.into(), "end marker")?;
        Ok(Self::Contains(marker))
    }

    pub fn contains_followed_by(
        marker: impl Into<String>,
        next_contains: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self::ContainsFollowedBy {
            marker: non_empty(marker.into(), "end marker")?,
            next_contains: non_empty(next_contains.into(), "lookahead marker")?,
        })
    }

    pub fn regex(pattern: &str) -> Result<Self> {
        let re = Regex::new(pattern).map_err(|source| Error::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self::Matches(re))
    }
}

fn non_empty(value: String, what: &'static str) -> Result<String> {
    if value.is_empty() {
        return Err(Error::EmptyMarker { what });
    }
    Ok(value)
}

impl RegionEnd for Boundary {
    fn is_region_end(&self, line: &str, next: Option<&str>) -> bool {
        match self {
            Self::Contains(marker) => line.contains(marker.as_str()),
            Self::ContainsFollowedBy {
                marker,
                next_contains,
            } => {
                line.contains(marker.as_str())
                    && next.is_some_and(|next| next.contains(next_contains.as_str()))
            }
            Self::Matches(re) => re.is_match(line.trim_end_matches(['\r', '\n'])),
            Self::EndOfDocument => false,
        }
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Contains(marker) => write!(f, "line containing {:?}", marker),
            Self::ContainsFollowedBy {
                marker,
                next_contains,
            } => write!(
                f,
                "line containing {:?} followed by a line containing {:?}",
                marker, next_contains
            ),
            Self::Matches(re) => write!(f, "line matching /{}/", re.as_str()),
            Self::EndOfDocument => f.write_str("end of document"),
        }
    }
}
