//! Integration layer for the Cantera CLI.
//!
//! Wires together table loading, the feature table builder and the scoring
//! engine into the commands the binary exposes.

pub(crate) mod pipeline;
