//! SHA-256 checksums of document text
//!
//! Reports carry a `sha256:<hex>` fingerprint of the target before and after
//! an edit so callers can tell whether a write changed anything.

use sha2::{Digest, Sha256};

const PREFIX: &str = "sha256:";

/// Checksum of `content` in the form `sha256:<hex>`.
pub fn compute_content_checksum(content: &str) -> String {
    let digest = Sha256::digest(content.as_bytes());
    format!("{}{:x}", PREFIX, digest)
}

/// First twelve hex digits of a checksum, for status lines.
pub fn short(checksum: &str) -> &str {
    let hex = checksum.strip_prefix(PREFIX).unwrap_or(checksum);
    hex.get(..12).unwrap_or(hex)
}
