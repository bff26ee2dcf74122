/*
[INPUT]:  Server-issued nonce in either wire form (byte array or string)
[OUTPUT]: Nonce bytes and their lowercase hex encoding
[POS]:    Data layer - nonce type and signing message encoding
[UPDATE]: When the nonce wire format or message encoding changes
*/

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Encode bytes as lowercase hex, two digits per byte, in order
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// One-time value issued by the auth server for a single login attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nonce(Vec<u8>);

impl Nonce {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase hex of the nonce bytes
    pub fn to_hex(&self) -> String {
        to_hex(&self.0)
    }

    /// Message handed to the wallet for `personal_sign`: `0x` + hex
    pub fn signing_message(&self) -> String {
        format!("0x{}", self.to_hex())
    }
}

impl From<Vec<u8>> for Nonce {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&str> for Nonce {
    fn from(value: &str) -> Self {
        Self(value.as_bytes().to_vec())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NonceWire {
    Bytes(Vec<u8>),
    Text(String),
}

impl<'de> Deserialize<'de> for Nonce {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match NonceWire::deserialize(deserializer)? {
            NonceWire::Bytes(bytes) => Self(bytes),
            NonceWire::Text(text) => Self(text.into_bytes()),
        })
    }
}

impl Serialize for Nonce {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}
