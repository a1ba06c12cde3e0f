//! Token hash identifier.

/// The 20-byte SHA-1 digest of an opaque bearer token.
///
/// Raw tokens never leave the calling layer; the digest is the only
/// identifier this subsystem stores, logs or sends to a backend. Rendered as
/// a 40-character lowercase hex string.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct TokenHash(pub [u8; 20]);
