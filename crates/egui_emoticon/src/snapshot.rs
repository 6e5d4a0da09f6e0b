use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Snapshot key holding the integer expression code.
pub const STATE_KEY: &str = "STATE_KEY";

/// Snapshot key holding the host's own base state, carried through
/// opaquely: written back on save exactly as it was read on restore.
pub const SUPER_STATE_KEY: &str = "SUPER_STATE_KEY";

/// One value in a [`Snapshot`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnapshotValue {
    Int(i64),
    /// Uninterpreted bytes owned by the host.
    Opaque(Vec<u8>),
}

/// The minimal serialized form of widget state, used across a
/// destroy/recreate cycle of the hosting surface.
///
/// The wire form is RON, the same format `eframe` uses for its storage.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    entries: BTreeMap<String, SnapshotValue>,
}

impl Snapshot {
    pub fn insert(&mut self, key: &str, value: SnapshotValue) {
        self.entries.insert(key.to_owned(), value);
    }

    pub fn get(&self, key: &str) -> Option<&SnapshotValue> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_ron(&self) -> Result<String, SnapshotError> {
        ron::ser::to_string(self).map_err(SnapshotError::Encode)
    }

    pub fn from_ron(ron: &str) -> Result<Self, SnapshotError> {
        ron::de::from_str(ron).map_err(SnapshotError::Decode)
    }
}

/// Snapshot codec failure.
#[derive(thiserror::Error, Debug)]
pub enum SnapshotError {
    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] ron::Error),
    #[error("failed to decode snapshot: {0}")]
    Decode(#[source] ron::error::SpannedError),
}
