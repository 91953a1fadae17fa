use crate::interpreter::value::core::Value;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0100_0000_01b3;

/// The internal index of a hash value.
///
/// A `HashKey` pairs the key's runtime type tag with a 64-bit digest, so
/// equal user-visible keys map to equal `HashKey`s and keys of different
/// types can never collide with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashKey {
    /// Runtime type tag of the key value.
    pub kind:   &'static str,
    /// 64-bit digest of the key value.
    pub digest: u64,
}

/// One entry of a hash value.
///
/// The key is stored as written so inspection can reproduce it; lookup goes
/// through the derived [`HashKey`] instead.
#[derive(Debug, Clone, PartialEq)]
pub struct HashPair {
    /// The key value as it appeared in the program.
    pub key:   Value,
    /// The value stored under the key.
    pub value: Value,
}

impl Value {
    /// Derives the hash key for this value.
    ///
    /// Only integers, booleans, and strings are hashable: integers digest to
    /// their own bits, booleans to 0 or 1, and strings to the FNV-1a 64-bit
    /// hash of their bytes. Every other type returns `None`, which the
    /// evaluator reports as `unusable as hash key`.
    #[must_use]
    pub fn hash_key(&self) -> Option<HashKey> {
        let digest = match self {
            Self::Integer(n) => *n as u64,
            Self::Bool(b) => u64::from(*b),
            Self::Str(s) => fnv1a(s.as_bytes()),
            _ => return None,
        };

        Some(HashKey { kind: self.type_name(),
                       digest })
    }
}

fn fnv1a(bytes: &[u8]) -> u64 {
    let mut digest = FNV_OFFSET_BASIS;
    for byte in bytes {
        digest ^= u64::from(*byte);
        digest = digest.wrapping_mul(FNV_PRIME);
    }
    digest
}
