use super::error::SaveError;
use super::SAVE_VERSION;
use crate::models::match_record::Match;
use serde::{Deserialize, Serialize};

use lz4_flex::{compress_prepend_size, decompress_size_prepended};
use rmp_serde::{from_slice, to_vec_named};
use sha2::{Digest, Sha256};
use time::OffsetDateTime;

/// Maximum history entries a snapshot may carry before it is rejected.
const MAX_MATCHES: usize = 10_000;

/// Full persisted snapshot of the tracker state.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TrackerSave {
    /// Save format version for migration.
    pub version: u32,

    /// Save timestamp (unix milliseconds).
    pub timestamp: u64,

    /// Match currently being tracked, if any.
    pub current_match: Option<Match>,

    /// Completed matches, most recent first.
    pub matches: Vec<Match>,
}

impl Default for TrackerSave {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackerSave {
    pub fn new() -> Self {
        Self {
            version: SAVE_VERSION,
            timestamp: current_timestamp(),
            current_match: None,
            matches: Vec::new(),
        }
    }

    pub fn update_timestamp(&mut self) {
        self.timestamp = current_timestamp();
    }

    pub fn validate(&self) -> Result<(), SaveError> {
        if self.matches.len() > MAX_MATCHES {
            return Err(SaveError::DataTooLarge { size: self.matches.len() });
        }

        // Check for duplicate match ids
        let mut match_ids = std::collections::HashSet::new();
        for record in &self.matches {
            if !match_ids.insert(&record.id) {
                return Err(SaveError::Corrupted);
            }
        }

        Ok(())
    }
}

/// Unix milliseconds.
pub fn current_timestamp() -> u64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as u64
}

/// Serialize and compress a tracker snapshot
pub fn serialize_and_compress(save: &TrackerSave) -> Result<Vec<u8>, SaveError> {
    // Validate before serialization
    save.validate()?;

    // 1. Serialize to MessagePack with field names
    let msgpack = to_vec_named(save).map_err(SaveError::Serialization)?;

    // 2. Compress with LZ4 (size prepended for easy decompression)
    let compressed = compress_prepend_size(&msgpack);

    // 3. Add SHA256 checksum at the end
    let mut hasher = Sha256::new();
    hasher.update(&compressed);
    let checksum = hasher.finalize();

    let mut result = compressed;
    result.extend_from_slice(&checksum);

    Ok(result)
}

/// Decompress and deserialize a tracker snapshot
pub fn decompress_and_deserialize(bytes: &[u8]) -> Result<TrackerSave, SaveError> {
    // Check minimum size (length header + checksum)
    if bytes.len() < 4 + 32 {
        return Err(SaveError::Corrupted);
    }

    // Split payload and checksum
    let (payload, stored_checksum) = bytes.split_at(bytes.len() - 32);

    let mut hasher = Sha256::new();
    hasher.update(payload);
    let checksum = hasher.finalize();
    if checksum.as_slice() != stored_checksum {
        return Err(SaveError::ChecksumMismatch);
    }

    let msgpack = decompress_size_prepended(payload).map_err(|_| SaveError::Decompression)?;
    let save: TrackerSave = from_slice(&msgpack).map_err(SaveError::Deserialization)?;

    if save.version != SAVE_VERSION {
        return Err(SaveError::VersionMismatch { found: save.version, expected: SAVE_VERSION });
    }

    Ok(save)
}
