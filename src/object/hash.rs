use super::{EvalError, Object};
use std::convert::TryFrom;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

fn fnv1a_64(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(*byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Identity of a hashable value: its type tag plus a 64-bit projection.
/// Keys of different types can never collide because the tag differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashKey {
    object_type: &'static str,
    value: u64,
}

impl TryFrom<&Object> for HashKey {
    type Error = EvalError;

    fn try_from(obj: &Object) -> std::result::Result<Self, Self::Error> {
        let value = match obj {
            Object::Integer(n) => *n as u64,
            Object::Boolean(b) => u64::from(*b),
            Object::String(s) => fnv1a_64(s.as_bytes()),
            o => {
                return Err(EvalError::NotHashable {
                    type_name: o.type_name(),
                })
            }
        };

        Ok(Self {
            object_type: obj.type_name(),
            value,
        })
    }
}
