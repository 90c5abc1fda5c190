//! Ordered manifest lists and ranked selection.
//!
//! A [`ManifestList`] is sorted once, newest first, when it is built and is
//! never mutated afterwards. Ranks are 1-based: rank 1 is the newest
//! manifest and rank `len()` the oldest.

use std::fmt;

use serde::{Deserialize, Serialize};
use sm_error::{Result, SmError};

use crate::RankedManifest;
use crate::filter::KeyFilter;

/// Which manifests a query returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "mode", content = "rank")]
pub enum Selection {
    /// Every manifest, newest first
    All,
    /// Rank 1
    Latest,
    /// The last rank
    Oldest,
    /// An explicit 1-based rank; values below 1 are rejected at query time
    Nth(i64),
}

impl Default for Selection {
    fn default() -> Self {
        Self::Nth(1)
    }
}

impl Selection {
    /// Build a selection from CLI-style flags.
    ///
    /// `all` wins over `oldest`, which wins over the explicit rank.
    pub fn from_flags(all: bool, oldest: bool, num: i64) -> Self {
        if all {
            Self::All
        } else if oldest {
            Self::Oldest
        } else {
            Self::Nth(num)
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Latest => write!(f, "latest"),
            Self::Oldest => write!(f, "oldest"),
            Self::Nth(n) => write!(f, "nth({n})"),
        }
    }
}

/// Manifest keys in strictly descending lexicographic order.
///
/// Keys are compared byte-wise. Duplicate keys are collapsed on
/// construction, so every adjacent pair `(a, b)` satisfies `a > b`.
///
/// # Example
///
/// ```
/// use sm_manifest::ManifestList;
///
/// let list = ManifestList::from_keys(["a.yaml", "c.yml", "b.yaml"]);
///
/// assert_eq!(list.all(), ["c.yml", "b.yaml", "a.yaml"]);
/// assert_eq!(list.latest().unwrap(), "c.yml");
/// assert_eq!(list.oldest().unwrap(), "a.yaml");
/// assert_eq!(list.nth(2).unwrap(), "b.yaml");
/// assert!(list.nth(4).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestList {
    keys: Vec<String>,
}

impl ManifestList {
    /// Build a list from already-filtered keys, sorting them newest first.
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut keys: Vec<String> = keys.into_iter().map(Into::into).collect();
        keys.sort_unstable_by(|a, b| b.cmp(a));
        keys.dedup();
        Self { keys }
    }

    /// Filter a raw listing and build the sorted list from what remains.
    pub fn from_listing(keys: Vec<String>, filter: &dyn KeyFilter) -> Self {
        Self::from_keys(filter.filter_keys(keys))
    }

    /// Number of manifests.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check if the list holds no manifests.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterate over the keys, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// The full ordered list.
    pub fn all(&self) -> &[String] {
        &self.keys
    }

    /// The manifest at rank 1.
    pub fn latest(&self) -> Result<&str> {
        self.entry(Some(0)).map(|(_, key)| key)
    }

    /// The manifest at the last rank.
    pub fn oldest(&self) -> Result<&str> {
        self.entry(self.last_index()).map(|(_, key)| key)
    }

    /// The manifest at a 1-based `rank`.
    ///
    /// Fails with [`SmError::OutOfRange`] when `rank < 1` or `rank > len()`.
    pub fn nth(&self, rank: i64) -> Result<&str> {
        self.entry(rank_index(rank)).map(|(_, key)| key)
    }

    /// Run a [`Selection`] against the list.
    ///
    /// [`Selection::All`] never fails; an empty list yields an empty result.
    pub fn select(&self, selection: Selection) -> Result<Vec<RankedManifest>> {
        let index = match selection {
            Selection::All => {
                return Ok(self
                    .keys
                    .iter()
                    .enumerate()
                    .map(|(i, key)| RankedManifest::new(i + 1, key.as_str()))
                    .collect());
            }
            Selection::Latest => Some(0),
            Selection::Oldest => self.last_index(),
            Selection::Nth(rank) => rank_index(rank),
        };

        let (rank, key) = self.entry(index)?;
        Ok(vec![RankedManifest::new(rank, key)])
    }

    fn last_index(&self) -> Option<usize> {
        self.keys.len().checked_sub(1)
    }

    /// Look up a 0-based index, returning the 1-based rank with the key.
    fn entry(&self, index: Option<usize>) -> Result<(usize, &str)> {
        index
            .and_then(|i| self.keys.get(i).map(|key| (i + 1, key.as_str())))
            .ok_or(SmError::OutOfRange {
                count: self.keys.len(),
            })
    }
}

/// Convert a 1-based rank to an index; ranks below 1 have none.
fn rank_index(rank: i64) -> Option<usize> {
    usize::try_from(rank).ok().and_then(|r| r.checked_sub(1))
}

impl IntoIterator for ManifestList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.into_iter()
    }
}
