//! Result fingerprinting.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use md5::{Digest, Md5};

/// MD5 digest of the canonical string, base64-encoded.
///
/// The validation service compares against an MD5/base64 fingerprint, so the
/// algorithm is fixed by that contract. It is an interoperability choice, not
/// an integrity mechanism.
pub fn fingerprint(canonical: &str) -> String {
    let digest = Md5::digest(canonical.as_bytes());
    STANDARD.encode(digest)
}
