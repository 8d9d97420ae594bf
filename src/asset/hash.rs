//! Content fingerprints using blake3.
//!
//! The fingerprint is what `[hash]` expands to in output templates.
//! When file content changes, the fingerprint changes, so browsers
//! fetch the new file instead of a cached one.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Default number of hex chars used for `[hash]`.
pub const DEFAULT_HASH_LENGTH: usize = 8;

/// Longest fingerprint available (full blake3 digest in hex).
pub const MAX_HASH_LENGTH: usize = 64;

/// A 256-bit content hash (blake3 output).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    /// Hash an in-memory buffer.
    pub fn of_bytes(data: impl AsRef<[u8]>) -> Self {
        Self(*blake3::hash(data.as_ref()).as_bytes())
    }

    /// Hash a file, reading it in 64 KiB blocks.
    pub fn of_file(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        let mut reader = BufReader::with_capacity(64 * 1024, file);
        let mut hasher = blake3::Hasher::new();
        let mut buffer = [0u8; 64 * 1024];

        loop {
            match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => {
                    hasher.update(&buffer[..n]);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }

        Ok(Self(*hasher.finalize().as_bytes()))
    }

    /// Full lowercase hex digest.
    pub fn to_hex(self) -> String {
        hex::encode(self.0)
    }

    /// First `len` hex chars, clamped to [`MAX_HASH_LENGTH`].
    pub fn fingerprint(self, len: usize) -> String {
        let mut hex = self.to_hex();
        hex.truncate(len.min(MAX_HASH_LENGTH));
        hex
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.fingerprint(DEFAULT_HASH_LENGTH))
    }
}
