//! Tooling primitives for deterministic behavior tree debugging (trace/inspection).

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod trace;

pub use trace::{NullTraceSink, TraceEvent, TraceHandle, TraceLog, TraceSink, Traced};
