//! # Basin Unified Types Library
//!
//! Shared type system for the Basin pool engine and its collaborators.
//!
//! ## Design Philosophy
//!
//! - **No Precision Loss**: all financial values are scaled integers; there is
//!   no floating point anywhere in the engine's arithmetic
//! - **Type Safety**: distinct identifier types prevent mixing assets,
//!   accounts, and raw numbers at compile time
//! - **Explicit Scaling**: the spot-price representation is a dedicated
//!   fixed-point wrapper with a visible scale factor, never a bare integer
//!
//! ## Quick Start
//!
//! ```rust
//! use basin_types::{AccountId, AssetId, PriceFixedPoint18};
//!
//! let asset = AssetId::new(1);
//! let admin = AccountId::new(100);
//! assert_eq!((asset.inner(), admin.inner()), (1, 100));
//!
//! // A pool holding 2000 B per 1000 A implies price(A) = 2.0 at 10^18 scale
//! let price = PriceFixedPoint18::from_ratio(2000, 1000).unwrap();
//! assert_eq!(price.raw_value(), 2 * PriceFixedPoint18::SCALE);
//! ```

pub mod errors;
pub mod events;
pub mod fixed_point;
pub mod identifiers;

pub use errors::FixedPointError;
pub use events::PoolEvent;
pub use fixed_point::PriceFixedPoint18;
pub use identifiers::{AccountId, Amount, AssetId};
