//! The fixed set of emotion labels and their numeric codes.

use crate::errors::{ArtifactProblem, LoadError};
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Mapping from human-readable emotion name to the model's numeric code.
///
/// The set is established once at startup and never mutated afterwards. Codes
/// are unique, so the reverse lookup used after prediction is unambiguous.
/// Names keep the order they were listed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmotionLabelSet {
    order: Vec<String>,
    by_name: BTreeMap<String, i64>,
    by_code: BTreeMap<i64, String>,
}

impl EmotionLabelSet {
    /// Builds a label set from `(name, code)` pairs.
    ///
    /// Fails when the set is empty, a name is blank, a name repeats, or two
    /// names share a code.
    ///
    /// # Examples
    ///
    /// ```
    /// use emotion_diary::classifier::EmotionLabelSet;
    ///
    /// let labels = EmotionLabelSet::from_pairs([("joy", 0), ("sadness", 1)]).unwrap();
    /// assert_eq!(labels.name_for(1), Some("sadness"));
    /// assert!(EmotionLabelSet::from_pairs([("joy", 0), ("fear", 0)]).is_err());
    /// ```
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, ArtifactProblem>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        let mut order = Vec::new();
        let mut by_name = BTreeMap::new();
        let mut by_code: BTreeMap<i64, String> = BTreeMap::new();

        for (name, code) in pairs {
            let name: String = name.into();
            if name.trim().is_empty() {
                return Err(ArtifactProblem::BlankName);
            }
            if by_name.contains_key(&name) {
                return Err(ArtifactProblem::DuplicateName { name });
            }
            if let Some(existing) = by_code.get(&code) {
                return Err(ArtifactProblem::DuplicateCode {
                    code,
                    first: existing.clone(),
                    second: name,
                });
            }
            order.push(name.clone());
            by_code.insert(code, name.clone());
            by_name.insert(name, code);
        }

        if order.is_empty() {
            return Err(ArtifactProblem::EmptyMapping);
        }

        Ok(Self {
            order,
            by_name,
            by_code,
        })
    }

    /// Reads a JSON object of `name: code` pairs from `path`.
    ///
    /// Keys are taken in document order, and a key listed twice is rejected
    /// rather than overwritten.
    ///
    /// # Errors
    ///
    /// - `LoadError::ArtifactMissing` if the file cannot be opened
    /// - `LoadError::ArtifactCorrupt` if it is not a JSON object of integers
    /// - `LoadError::ArtifactInvalid` if the pairs do not form a valid set
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let file = File::open(path).map_err(|source| LoadError::ArtifactMissing {
            path: path.to_path_buf(),
            source,
        })?;

        let raw: MappingPairs =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| {
                LoadError::ArtifactCorrupt {
                    path: path.to_path_buf(),
                    source,
                }
            })?;

        let labels = Self::from_pairs(raw.0).map_err(|reason| LoadError::ArtifactInvalid {
            path: path.to_path_buf(),
            reason,
        })?;

        debug!("Loaded {} emotion labels", labels.len());
        Ok(labels)
    }

    /// Whether `name` is one of the labels.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn code_for(&self, name: &str) -> Option<i64> {
        self.by_name.get(name).copied()
    }

    /// Reverse lookup from a predicted code to its label.
    pub fn name_for(&self, code: i64) -> Option<&str> {
        self.by_code.get(&code).map(String::as_str)
    }

    /// Label names in the order the mapping lists them.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Every entry of a JSON object in document order, repeated keys included.
struct MappingPairs(Vec<(String, i64)>);

impl<'de> Deserialize<'de> for MappingPairs {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PairsVisitor;

        impl<'de> Visitor<'de> for PairsVisitor {
            type Value = MappingPairs;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an object mapping emotion names to integer codes")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, code)) = map.next_entry::<String, i64>()? {
                    pairs.push((name, code));
                }
                Ok(MappingPairs(pairs))
            }
        }

        deserializer.deserialize_map(PairsVisitor)
    }
}
