//! Property-based tests for DBSCAN labelling and the k-distance estimator.
//!
//! Generated point layouts are clustered and checked against brute-force
//! oracles: completeness, idempotence, density witnesses, strategy
//! equivalence, and the shape of the k-distance graph.

mod invariants;
mod strategies;
mod types;
