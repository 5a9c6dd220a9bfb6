//! Pricing Decision Engine domain module.
//!
//! This crate contains the business rules that turn a demand estimate plus
//! commercial context into a bounded price adjustment, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).
//!
//! The batch path and the single-request path both go through [`decide`];
//! the guardrail constants live in one place, [`PricingPolicy`].

pub mod batch;
pub mod engine;
pub mod item;
pub mod policy;

pub use batch::{LineItemRow, PricedRow, RowError, RowOutcome, price_rows};
pub use engine::{DemandLevel, classify_demand, decide, round_to_cents};
pub use item::{LineItem, PricedLineItem};
pub use policy::PricingPolicy;
