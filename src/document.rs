//! # Share document
//!
//! JSON document holding the threshold pair and one entry per share index:
//!
//! ```text
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" },
//!     ...
//! }
//! ```
//!
//! Entries for `1..=n` are decoded into a [`ShareSet`]. A missing or `null` entry is skipped with a
//! warning, a malformed one aborts the whole document. Keys outside `1..=n` are ignored.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::{
    arith::radix::{decode, encode, is_encodable},
    constants::{params::PARAM_MAX_LISTED_MISSING, types::Index},
    error::DocumentError,
    share::{Share, ShareSet},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Number of shares `n` and threshold `k`
pub struct Keys {
    pub n: u64,
    pub k: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// An undecoded share: the base as a decimal string and the digits
pub struct RawEntry {
    pub base: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareDocument {
    pub keys: Keys,
    /// Every other field of the document, keyed by the share index as a string
    #[serde(flatten)]
    pub entries: BTreeMap<String, serde_json::Value>,
}

impl ShareDocument {
    /// Parse a document from JSON text.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let document: ShareDocument = serde_json::from_str(json)?;
        document.validate()?;
        Ok(document)
    }

    /// Read and parse a document from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "reading share document");
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    /// Render the document as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn validate(&self) -> Result<(), DocumentError> {
        if self.keys.n == 0 || self.keys.k == 0 {
            return Err(DocumentError::InvalidKeys {
                n: self.keys.n,
                k: self.keys.k,
            });
        }
        Ok(())
    }

    /// Threshold `k` of the document.
    pub fn threshold(&self) -> usize {
        self.keys.k as usize
    }

    /// The raw entry for `index`, `None` if the document has no such field or it is `null`.
    pub fn entry(&self, index: Index) -> Result<Option<RawEntry>, DocumentError> {
        let Some(value) = self
            .entries
            .get(&index.to_string())
            .filter(|value| !value.is_null())
        else {
            return Ok(None);
        };
        serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|source| DocumentError::MalformedEntry { index, source })
    }

    /// Indices in `1..=n` that have a non-null entry, in ascending order.
    fn present_indices(&self) -> BTreeSet<Index> {
        self.entries
            .iter()
            .filter(|(_, value)| !value.is_null())
            .filter_map(|(key, _)| {
                let index: Index = key.parse().ok()?;
                // Only the canonical spelling, "01" is not entry 1
                (index.to_string() == *key && (1..=self.keys.n).contains(&index)).then_some(index)
            })
            .collect()
    }

    /// Decode the entries `1..=n` in ascending index order.
    pub fn decode_shares(&self) -> Result<ShareSet, DocumentError> {
        self.validate()?;

        let present = self.present_indices();
        let missing = self.keys.n - present.len() as u64;
        if missing > 0 {
            // At most `present.len() + PARAM_MAX_LISTED_MISSING` indices are visited
            let listed: Vec<Index> = (1..=self.keys.n)
                .filter(|index| !present.contains(index))
                .take(PARAM_MAX_LISTED_MISSING)
                .collect();
            let more = if missing > listed.len() as u64 { ", ..." } else { "" };
            tracing::warn!(missing, "missing entries for keys {:?}{}", listed, more);
        }

        let mut shares = Vec::with_capacity(present.len());
        for index in present {
            let Some(entry) = self.entry(index)? else {
                continue;
            };

            let share = decode_entry(index, &entry)?;
            tracing::debug!(index, value = %share.value, "decoded share");
            shares.push(share);
        }

        Ok(ShareSet::from_sorted(shares))
    }

    /// Build a document from `shares`, writing every value in `base`.
    ///
    /// `n` is the largest share index so that every share is read back.
    pub fn from_shares(shares: &ShareSet, k: usize, base: u32) -> Result<Self, DocumentError> {
        let n = shares.iter().map(|share| share.index).max().unwrap_or(0);
        let mut entries = BTreeMap::new();
        for share in shares {
            if !is_encodable(&share.value) {
                return Err(DocumentError::NegativeValue { index: share.index });
            }
            let value = encode(&share.value, base).map_err(|source| DocumentError::Entry {
                index: share.index,
                source,
            })?;
            let entry = RawEntry {
                base: base.to_string(),
                value,
            };
            entries.insert(share.index.to_string(), serde_json::to_value(entry)?);
        }

        let document = ShareDocument {
            keys: Keys { n, k: k as u64 },
            entries,
        };
        document.validate()?;
        Ok(document)
    }
}

fn decode_entry(index: Index, entry: &RawEntry) -> Result<Share, DocumentError> {
    let base: u32 = entry
        .base
        .trim()
        .parse()
        .map_err(|_| DocumentError::MalformedBase {
            index,
            base: entry.base.clone(),
        })?;
    let value =
        decode(&entry.value, base).map_err(|source| DocumentError::Entry { index, source })?;
    Ok(Share::new(index, value))
}

impl std::str::FromStr for ShareDocument {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json(s)
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;

    use super::*;
    use crate::error::DecodeError;

    const TESTCASE_1: &str = include_str!("../data/testcase1.json");
    const TESTCASE_2: &str = include_str!("../data/testcase2.json");

    fn values(shares: &ShareSet) -> Vec<(Index, String)> {
        shares
            .iter()
            .map(|share| (share.index, share.value.to_string()))
            .collect()
    }

    fn expected(points: &[(Index, &str)]) -> Vec<(Index, String)> {
        points.iter().map(|(x, y)| (*x, y.to_string())).collect()
    }

    #[test]
    fn decodes_testcase_1() {
        let document = ShareDocument::from_json(TESTCASE_1).unwrap();
        assert_eq!(document.keys, Keys { n: 4, k: 3 });

        // Entry 4 is missing and entry 6 lies outside 1..=n
        let shares = document.decode_shares().unwrap();
        assert_eq!(values(&shares), expected(&[(1, "4"), (2, "7"), (3, "12")]));
    }

    #[test]
    fn decodes_testcase_2() {
        let document: ShareDocument = TESTCASE_2.parse().unwrap();
        let shares = document.decode_shares().unwrap();
        assert_eq!(shares.len(), 10);
        assert_eq!(
            values(&shares)[..7],
            expected(&[
                (1, "995085094601491"),
                (2, "21394886326566393"),
                (3, "196563650089608567"),
                (4, "1016509518118225951"),
                (5, "3711974121218449851"),
                (6, "10788619898233492461"),
                (7, "26709394976508342463"),
            ])[..]
        );
    }

    #[test]
    fn rejects_invalid_keys() {
        let result = ShareDocument::from_json(r#"{"keys": {"n": 0, "k": 3}}"#);
        assert!(matches!(result, Err(DocumentError::InvalidKeys { n: 0, k: 3 })));

        let result = ShareDocument::from_json(r#"{"1": {"base": "10", "value": "4"}}"#);
        assert!(matches!(result, Err(DocumentError::Json(_))));
    }

    #[test]
    fn rejects_invalid_entries() {
        let document = ShareDocument::from_json(
            r#"{"keys": {"n": 2, "k": 1}, "1": {"base": "10", "value": "4"}, "2": {"base": "8", "value": "19"}}"#,
        )
        .unwrap();
        assert!(matches!(
            document.decode_shares(),
            Err(DocumentError::Entry {
                index: 2,
                source: DecodeError::InvalidDigit { digit: '9', position: 1, base: 8 }
            })
        ));

        let document =
            ShareDocument::from_json(r#"{"keys": {"n": 1, "k": 1}, "1": {"base": "40", "value": "4"}}"#)
                .unwrap();
        assert!(matches!(
            document.decode_shares(),
            Err(DocumentError::Entry {
                index: 1,
                source: DecodeError::InvalidBase(40)
            })
        ));

        let document =
            ShareDocument::from_json(r#"{"keys": {"n": 1, "k": 1}, "1": {"base": "ten", "value": "4"}}"#)
                .unwrap();
        assert!(matches!(
            document.decode_shares(),
            Err(DocumentError::MalformedBase { index: 1, .. })
        ));

        let document =
            ShareDocument::from_json(r#"{"keys": {"n": 1, "k": 1}, "1": {"base": "10"}}"#).unwrap();
        assert!(matches!(
            document.decode_shares(),
            Err(DocumentError::MalformedEntry { index: 1, .. })
        ));
    }

    #[test]
    fn skips_null_entries() {
        let document = ShareDocument::from_json(
            r#"{"keys": {"n": 3, "k": 2}, "1": {"base": "10", "value": "4"}, "2": null, "3": {"base": "10", "value": "12"}}"#,
        )
        .unwrap();
        assert_eq!(document.entry(2).unwrap(), None);

        let shares = document.decode_shares().unwrap();
        assert_eq!(values(&shares), expected(&[(1, "4"), (3, "12")]));
    }

    #[test]
    fn decodes_sparse_documents() {
        // Only the present keys are visited, whatever the announced n
        let document = ShareDocument::from_json(
            r#"{"keys": {"n": 1000000000000000, "k": 1}, "7": {"base": "16", "value": "ff"}, "01": {"base": "10", "value": "1"}}"#,
        )
        .unwrap();
        let shares = document.decode_shares().unwrap();
        assert_eq!(values(&shares), expected(&[(7, "255")]));
    }

    #[test]
    fn writes_and_reads_back() {
        let shares = ShareSet::new(vec![
            Share::new(1, 255),
            Share::new(2, BigInt::from(1u64 << 40)),
            Share::new(3, 0),
        ])
        .unwrap();

        let document = ShareDocument::from_shares(&shares, 2, 16).unwrap();
        assert_eq!(document.keys, Keys { n: 3, k: 2 });
        assert_eq!(
            document.entry(1).unwrap(),
            Some(RawEntry {
                base: "16".into(),
                value: "ff".into()
            })
        );

        let parsed = ShareDocument::from_json(&document.to_json().unwrap()).unwrap();
        assert_eq!(parsed, document);
        assert_eq!(parsed.decode_shares().unwrap(), shares);
    }

    #[test]
    fn refuses_negative_values() {
        let shares = ShareSet::new(vec![Share::new(1, -5)]).unwrap();
        assert!(matches!(
            ShareDocument::from_shares(&shares, 1, 10),
            Err(DocumentError::NegativeValue { index: 1 })
        ));
    }
}
