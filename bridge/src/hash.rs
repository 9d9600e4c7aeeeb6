//! Keccak-256 hashing for HTLC preimages
//!
//! Must use the original Keccak padding, not the NIST FIPS-202 SHA3 padding,
//! since the two produce different digests for the same input. `tiny-keccak`'s
//! `keccak` feature is the original Keccak-f\[1600\] variant.

use tiny_keccak::{Hasher, Keccak};

/// Compute keccak256(data).
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Compute the HTLC lookup key `xHash = keccak256(x)` for a 32-byte preimage.
pub fn x_hash(preimage: &[u8; 32]) -> [u8; 32] {
    keccak256(preimage)
}

/// Render a 32-byte hash as a lowercase `0x`-prefixed hex string, for event attributes.
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Parse a hex string (with or without `0x` prefix) into a 32-byte array.
pub fn hex_to_bytes32(s: &str) -> Result<[u8; 32], String> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    let decoded = hex::decode(s).map_err(|e| e.to_string())?;
    decoded
        .try_into()
        .map_err(|_| "expected exactly 32 bytes".to_string())
}
