//! Top-level module for the payout distribution system.
//!
//! This crate provides a capped random payout splitter, including:
//! - A sequence generator with per-slot feasibility bounds (`Distributor`)
//! - Internal candidate refinement with duplicate avoidance (`refiner`)
//! - A post-generation consistency check (`validator`)
//! - Round configuration and outcome types (`round`)

/// High-level interface for splitting a total into per-attempt values.
///
/// Exposes slot-cap configuration, single-run distribution and full-round
/// generation with random top-level inputs.
pub mod distributor;

/// Internal candidate refinement step.
///
/// Narrows a raw range of legal next values to a preferred subset that
/// avoids duplicates. This module is not exposed publicly.
mod refiner;

/// Consistency checks for produced sequences.
///
/// Intended for development and testing; a failure indicates a generation
/// defect, not a recoverable runtime condition.
pub mod validator;

/// Round configuration and outcome types.
///
/// Stores the ranges used to draw the top-level total and attempt count,
/// and the serializable record of one generated round.
pub mod round;
