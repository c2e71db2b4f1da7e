//! Purpose: Sequence-processing combinators over iterators and streams.
//! Exports: `core` (sync operators, error model), `stream` (async operators), `api` (stable surface).
//! Role: Library crate backing the `lockstep-bench` binary and downstream callers.
//! Invariants: Operators are deferred; nothing is consumed until the adapter is driven.
//! Invariants: Strict variants surface length mismatches as explicit `Result` values, never panics.
pub mod api;
pub mod core;
pub mod stream;
