//! Directory change detection via XOR-folded content digests.
//!
//! A [`Digest`] is a 128-bit aggregate of everything under a directory:
//! the blake3 hash of every immediate file and the recursively-computed
//! fingerprint of every immediate subdirectory, XOR-folded together.
//! XOR makes the result independent of enumeration order and cheap to
//! compute, which is all the sync path needs to decide whether a subtree
//! is worth descending into.
//!
//! This is **not** a cryptographic integrity check. XOR-folding is
//! trivially defeatable (two swapped file contents cancel out), so the
//! digest must never be repurposed for tamper detection or verification.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::BuildError;

/// Width of the combined digest in bytes (128 bits)
const DIGEST_LEN: usize = 16;

/// Fixed-width aggregate content digest of a directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// The zero digest: fingerprint of a nonexistent path, a
    /// non-directory, or an empty directory.
    pub const ZERO: Digest = Digest([0; DIGEST_LEN]);

    /// XOR the input into the digest. Each digest byte takes the input
    /// byte at its position, wrapping when the input is shorter than the
    /// digest and ignoring the tail when it is longer.
    fn fold(&mut self, input: &[u8]) {
        if input.is_empty() {
            return;
        }
        for i in 0..DIGEST_LEN {
            self.0[i] ^= input[i % input.len()];
        }
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Compute the fingerprint of `dir`.
///
/// Returns [`Digest::ZERO`] when `dir` does not exist or is not a
/// directory. Entries that vanish between enumeration and hashing are
/// skipped. Subdirectory digests are folded in via their hex string
/// form rather than their raw bytes, matching the behavior existing
/// deployments rely on.
pub fn fingerprint(dir: &Path) -> Result<Digest, BuildError> {
    if !dir.is_dir() {
        return Ok(Digest::ZERO);
    }

    let mut combined = Digest::ZERO;

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_file() {
            combined.fold(hash_file(&path)?.as_bytes());
        } else if path.is_dir() {
            let child = fingerprint(&path)?;
            combined.fold(child.to_string().as_bytes());
        }
    }

    Ok(combined)
}

/// Content hash of a single file
fn hash_file(path: &Path) -> Result<blake3::Hash, BuildError> {
    let mut file = fs::File::open(path)?;
    let mut hasher = blake3::Hasher::new();
    io::copy(&mut file, &mut hasher)?;
    Ok(hasher.finalize())
}
