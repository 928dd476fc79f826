//! # Shares
//!
//! A [`Share`] is one point `(index, value)` on the sharing polynomial. A [`ShareSet`] holds the
//! decoded shares of a document in ascending index order with pairwise distinct indices.

use std::fmt;

use crate::{
    constants::types::{Index, Value},
    error::InterpolationError,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single share, the point `(index, value)`
pub struct Share {
    /// x-coordinate
    pub index: Index,
    /// y-coordinate
    pub value: Value,
}

impl Share {
    pub fn new(index: Index, value: impl Into<Value>) -> Self {
        Self {
            index,
            value: value.into(),
        }
    }
}

impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x={}, y={}", self.index, self.value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Shares sorted by index, no index appears twice
pub struct ShareSet {
    shares: Vec<Share>,
}

impl ShareSet {
    /// Build a set from shares in any order. Fails on a repeated index.
    pub fn new(mut shares: Vec<Share>) -> Result<Self, InterpolationError> {
        shares.sort_by_key(|share| share.index);
        if let Some(pair) = shares.windows(2).find(|w| w[0].index == w[1].index) {
            return Err(InterpolationError::DuplicateIndex(pair[0].index));
        }
        Ok(Self { shares })
    }

    /// Wrap shares that are already in strictly ascending index order.
    pub(crate) fn from_sorted(shares: Vec<Share>) -> Self {
        debug_assert!(shares.windows(2).all(|w| w[0].index < w[1].index));
        Self { shares }
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    pub fn as_slice(&self) -> &[Share] {
        &self.shares
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Share> {
        self.shares.iter()
    }

    /// Look up the share with the given index.
    pub fn get(&self, index: Index) -> Option<&Share> {
        self.shares
            .binary_search_by_key(&index, |share| share.index)
            .ok()
            .map(|position| &self.shares[position])
    }
}

impl<'a> IntoIterator for &'a ShareSet {
    type Item = &'a Share;
    type IntoIter = std::slice::Iter<'a, Share>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
