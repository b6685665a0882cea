//! Payout distribution library.
//!
//! This crate splits a total payout into a small number of per-attempt
//! values, including:
//! - A distributor producing capped, randomly drawn value sequences
//! - Candidate refinement with a soft preference for distinct values
//! - A consistency validator for produced sequences
//! - Round settings for drawing the top-level total and attempt count
//!
//! The public surface is limited to the round-level API; the candidate
//! refinement step stays crate-internal so its soft-preference rules
//! cannot be bypassed or misapplied.

/// Core distribution models and generation logic.
///
/// This module exposes the distributor, validator and round types while
/// keeping the candidate refinement step private.
pub mod distribution;
