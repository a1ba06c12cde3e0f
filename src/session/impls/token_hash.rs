use std::fmt;
use std::fmt::Formatter;
use sha1::{Digest, Sha1};
use crate::session::structs::token_hash::TokenHash;

impl TokenHash {
    /// SHA-1 digest of the opaque bearer token.
    pub fn from_token(token: &str) -> TokenHash {
        let mut hasher = Sha1::new();
        hasher.update(token.as_bytes());
        TokenHash(hasher.finalize().into())
    }
}

impl fmt::Display for TokenHash {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl std::str::FromStr for TokenHash {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 40 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let bytes = hex::decode(s)?;
        let mut hash = [0u8; 20];
        hash.copy_from_slice(&bytes);
        Ok(TokenHash(hash))
    }
}

impl From<[u8; 20]> for TokenHash {
    fn from(data: [u8; 20]) -> Self {
        TokenHash(data)
    }
}

impl serde::ser::Serialize for TokenHash {
    fn serialize<S: serde::ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(self.0))
    }
}

impl<'de> serde::de::Deserialize<'de> for TokenHash {
    fn deserialize<D: serde::de::Deserializer<'de>>(des: D) -> Result<Self, D::Error> {
        let value: String = serde::de::Deserialize::deserialize(des)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
