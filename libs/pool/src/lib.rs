//! # Basin Pool Engine
//!
//! ## Purpose
//!
//! The pricing and liquidity core of a two-asset automated market maker:
//! reserve bookkeeping, spot-price derivation from the reserve ratio, the
//! constant-product swap formula, the strict liquidity-ratio check, and the
//! bootstrap first-deposit special case. No order book, no external price
//! feed — price is a pure function of current reserves.
//!
//! ## Integration Points
//!
//! - **Input Sources**: operation calls with an explicit caller identity
//! - **Custody**: two [`basin_ledger::AssetLedger`] instances, one per
//!   configured asset; the engine owns the reserve counters as a view of the
//!   pool account's holdings there
//! - **Output Destinations**: an [`EventSink`] receiving one notification
//!   record per successful mutation, for observers and indexers
//! - **Precision**: amounts in native units, prices at 10^18 fixed-point
//!   scale, exact integer arithmetic throughout
//!
//! ## Concurrency Model
//!
//! None internal: no background tasks, no suspension points, no I/O beyond
//! ledger delegation. Operations take `&mut self`, which serializes mutations
//! of one pool the way the original host environment does. Every operation
//! either completes fully or unwinds to its pre-operation state.

pub mod config;
pub mod engine;
pub mod error;
pub mod sink;

pub use config::PoolConfig;
pub use engine::Pool;
pub use error::PoolError;
pub use sink::{EventSink, LogEventSink, RecordingEventSink};

/// Common types for pool callers
pub use basin_types::{AccountId, Amount, AssetId, PoolEvent, PriceFixedPoint18};
