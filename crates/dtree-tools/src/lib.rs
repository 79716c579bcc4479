//! Tooling primitives for deterministic decision tree passes.
//!
//! This crate is lightweight and engine-agnostic. Richer inspectors (graph dumps, overlays)
//! belong in adapter crates built on top of [`TraceEvent`].

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod trace;

pub use trace::{NullTraceSink, TraceEvent, TraceLog, TraceSink, VecTraceSink};
