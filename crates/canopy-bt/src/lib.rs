//! Tick-driven behavior tree engine for scripted automation.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod bt;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod driver;
pub mod leaf;

pub use bt::{Node, Status};
// Defaults: memory control flow nodes (the cursor survives `Running` and the
// activation resumes at the same child next tick).
//
// Reactive variants re-evaluate earlier children on every tick and are
// available as `ReactiveSelector` / `ReactiveSequence` for cases where you
// explicitly want higher-priority children to preempt a running branch.
pub use composite::{
    Parallel, ParallelPolicy, ReactiveSelector, ReactiveSequence, Selector, Sequence,
};
pub use decorator::{Inverter, Repeat, Retry};
pub use driver::Driver;
pub use leaf::{Action, Condition, InverseCondition};
