//! Typed identifier wrappers for assets and accounts
//!
//! Zero-cost `u64` wrappers that make function signatures self-documenting and
//! prevent ID confusion bugs at compile time. An `AssetId` can never be passed
//! where an `AccountId` is expected, even though both are a single machine word.

use serde::{Deserialize, Serialize};

/// Quantity of an asset in its native smallest unit, unscaled.
///
/// `u128` gives enough headroom to hold 18-decimal token amounts alongside the
/// 10^18 price scale factor during intermediate multiplication.
pub type Amount = u128;

macro_rules! define_typed_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            Serialize,
            Deserialize,
        )]
        #[serde(transparent)]
        #[repr(transparent)]
        pub struct $name(pub u64);

        impl $name {
            /// Create a new typed ID
            #[inline(always)]
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// Extract the inner u64 value
            #[inline(always)]
            pub const fn inner(&self) -> u64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<u64> for $name {
            #[inline(always)]
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u64 {
            #[inline(always)]
            fn from(id: $name) -> u64 {
                id.0
            }
        }
    };
}

define_typed_id!(
    /// Identity of one fungible asset tracked by an external ledger.
    ///
    /// A pool is parametrized over exactly two distinct `AssetId`s, fixed at
    /// construction.
    AssetId
);

define_typed_id!(
    /// Identity of a balance-holding party on the asset ledgers: the
    /// administrator, a swapping participant, or the pool's own custody
    /// account.
    AccountId
);
