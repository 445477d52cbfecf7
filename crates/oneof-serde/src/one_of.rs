//! `OneOf1` … `OneOf4`: closed unions over a fixed list of alternatives.
//!
//! Variants are named after their position (`T0`, `T1`, …). A value always
//! holds exactly one alternative; switching means building a new value.
//! Serialization writes the active alternative bare and deserialization goes
//! through [`crate::inferred`], so the types nest anywhere serde reaches.
//!
//! ```
//! use oneof_serde::OneOf2;
//!
//! let torque: OneOf2<i32, String> = OneOf2::from_t0(2800);
//! assert_eq!(torque.index(), 0);
//! assert_eq!(torque.as_t0(), Some(&2800));
//! assert!(!torque.is_t1());
//! assert_eq!(serde_json::to_string(&torque).unwrap(), "2800");
//!
//! let back: OneOf2<i32, String> = serde_json::from_str("\"high\"").unwrap();
//! assert_eq!(back.into_t1(), Ok("high".to_string()));
//! ```

use crate::alternative::Alternative;
use crate::category::Category;
use crate::error::{OneOfError, Result};
use crate::inferred::{self, InferredUnion};
use crate::tolerant::UnionCodec;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{self, Serialize, Serializer};
use serde_json::Value;

// One invocation per arity. Each alternative lists its index, variant and the
// constructor/accessor names generated for it.
macro_rules! one_of {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($idx:tt => $t:ident { $from:ident, $is:ident, $as:ident, $as_mut:ident, $into:ident }),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name<$($t),+> {
            $($t($t)),+
        }

        #[allow(unreachable_patterns)]
        impl<$($t),+> $name<$($t),+> {
            /// Zero-based position of the active alternative.
            pub fn index(&self) -> usize {
                match self {
                    $($name::$t(_) => $idx),+
                }
            }

            $(
                pub fn $from(value: $t) -> Self {
                    $name::$t(value)
                }

                pub fn $is(&self) -> bool {
                    matches!(self, $name::$t(_))
                }

                pub fn $as(&self) -> Option<&$t> {
                    match self {
                        $name::$t(value) => Some(value),
                        _ => None,
                    }
                }

                pub fn $as_mut(&mut self) -> Option<&mut $t> {
                    match self {
                        $name::$t(value) => Some(value),
                        _ => None,
                    }
                }

                /// The alternative, or the union unchanged when another one is active.
                pub fn $into(self) -> std::result::Result<$t, Self> {
                    match self {
                        $name::$t(value) => Ok(value),
                        other => Err(other),
                    }
                }
            )+
        }

        impl<$($t: Alternative),+> InferredUnion for $name<$($t),+> {
            const CATEGORIES: &'static [Category] = &[$(<$t as Alternative>::CATEGORY),+];

            fn index(&self) -> usize {
                $name::index(self)
            }

            fn encode_active(&self) -> Result<Value> {
                match self {
                    $($name::$t(value) => <$t as Alternative>::to_node(value)),+
                }
            }

            fn from_index_and_node(index: usize, node: Value) -> Result<Self> {
                match index {
                    $($idx => <$t as Alternative>::from_node(node).map($name::$t),)+
                    _ => Err(OneOfError::IndexOutOfRange {
                        index,
                        arity: Self::CATEGORIES.len(),
                    }),
                }
            }
        }

        impl<$($t: Alternative),+> UnionCodec for $name<$($t),+> {
            fn encode_node(&self) -> Result<Value> {
                inferred::encode(self)
            }

            fn decode_node(node: Value) -> Result<Option<Self>> {
                inferred::decode(node)
            }
        }

        impl<$($t: Alternative),+> Serialize for $name<$($t),+> {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                inferred::encode(self)
                    .map_err(<S::Error as ser::Error>::custom)?
                    .serialize(serializer)
            }
        }

        impl<'de, $($t: Alternative),+> Deserialize<'de> for $name<$($t),+> {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let node = Value::deserialize(deserializer)?;
                inferred::decode_required(node).map_err(de::Error::custom)
            }
        }
    };
}

one_of! {
    /// A union with a single alternative.
    OneOf1 {
        0 => T0 { from_t0, is_t0, as_t0, as_t0_mut, into_t0 },
    }
}

one_of! {
    /// A union of two alternatives.
    OneOf2 {
        0 => T0 { from_t0, is_t0, as_t0, as_t0_mut, into_t0 },
        1 => T1 { from_t1, is_t1, as_t1, as_t1_mut, into_t1 },
    }
}

one_of! {
    /// A union of three alternatives.
    OneOf3 {
        0 => T0 { from_t0, is_t0, as_t0, as_t0_mut, into_t0 },
        1 => T1 { from_t1, is_t1, as_t1, as_t1_mut, into_t1 },
        2 => T2 { from_t2, is_t2, as_t2, as_t2_mut, into_t2 },
    }
}

one_of! {
    /// A union of four alternatives.
    OneOf4 {
        0 => T0 { from_t0, is_t0, as_t0, as_t0_mut, into_t0 },
        1 => T1 { from_t1, is_t1, as_t1, as_t1_mut, into_t1 },
        2 => T2 { from_t2, is_t2, as_t2, as_t2_mut, into_t2 },
        3 => T3 { from_t3, is_t3, as_t3, as_t3_mut, into_t3 },
    }
}
