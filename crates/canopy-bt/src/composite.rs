#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bt::{Node, Status};

/// Runs children in order until one fails; the cursor survives `Running`.
///
/// A child `Failure` fails the whole node; exhausting the list succeeds it.
/// Either terminal result resets the node, so the next tick starts a new
/// activation at child 0. While suspended, already-succeeded children are
/// never re-ticked. An empty child list succeeds immediately.
pub struct Sequence<C> {
    children: Vec<Box<dyn Node<C>>>,
    index: usize,
}

impl<C> Sequence<C> {
    pub fn new(children: Vec<Box<dyn Node<C>>>) -> Self {
        Self { children, index: 0 }
    }

    pub fn with_child(mut self, child: impl Node<C> + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }
}

impl<C> Node<C> for Sequence<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        while self.index < self.children.len() {
            match self.children[self.index].tick(ctx) {
                Status::Running => return Status::Running,
                Status::Failure => {
                    self.reset();
                    return Status::Failure;
                }
                Status::Success => self.index += 1,
            }
        }

        self.reset();
        Status::Success
    }

    fn reset(&mut self) {
        self.index = 0;
        for c in self.children.iter_mut() {
            c.reset();
        }
    }
}

/// Runs children in order until one succeeds; the cursor survives `Running`.
///
/// Mirror image of [`Sequence`]: a child `Success` succeeds the whole node,
/// exhausting the list fails it, and an empty child list fails immediately.
pub struct Selector<C> {
    children: Vec<Box<dyn Node<C>>>,
    index: usize,
}

impl<C> Selector<C> {
    pub fn new(children: Vec<Box<dyn Node<C>>>) -> Self {
        Self { children, index: 0 }
    }

    pub fn with_child(mut self, child: impl Node<C> + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }
}

impl<C> Node<C> for Selector<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        while self.index < self.children.len() {
            match self.children[self.index].tick(ctx) {
                Status::Running => return Status::Running,
                Status::Success => {
                    self.reset();
                    return Status::Success;
                }
                Status::Failure => self.index += 1,
            }
        }

        self.reset();
        Status::Failure
    }

    fn reset(&mut self) {
        self.index = 0;
        for c in self.children.iter_mut() {
            c.reset();
        }
    }
}

/// How many children must reach a terminal status for [`Parallel`] to adopt it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ParallelPolicy {
    RequireOne,
    RequireAll,
}

/// Ticks every child once per call, in list order, then combines the tallies.
///
/// There is no cursor and no short-circuit: children that already reported a
/// terminal status this activation still get ticked next call, so any
/// counters they own keep advancing. The failure policy is checked before the
/// success policy; when both are satisfied on the same tick, the node fails.
/// A terminal result resets the children (the node itself holds no state).
pub struct Parallel<C> {
    children: Vec<Box<dyn Node<C>>>,
    success_policy: ParallelPolicy,
    failure_policy: ParallelPolicy,
}

impl<C> Parallel<C> {
    pub fn new(
        success_policy: ParallelPolicy,
        failure_policy: ParallelPolicy,
        children: Vec<Box<dyn Node<C>>>,
    ) -> Self {
        Self {
            children,
            success_policy,
            failure_policy,
        }
    }

    pub fn with_child(mut self, child: impl Node<C> + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }
}

impl<C> Node<C> for Parallel<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        let mut succeeded = 0usize;
        let mut failed = 0usize;

        for child in self.children.iter_mut() {
            match child.tick(ctx) {
                Status::Success => succeeded += 1,
                Status::Failure => failed += 1,
                Status::Running => {}
            }
        }

        let total = self.children.len();
        let failure_met = match self.failure_policy {
            ParallelPolicy::RequireOne => failed > 0,
            ParallelPolicy::RequireAll => failed == total,
        };
        let success_met = match self.success_policy {
            ParallelPolicy::RequireOne => succeeded > 0,
            ParallelPolicy::RequireAll => succeeded == total,
        };

        let status = if failure_met {
            Status::Failure
        } else if success_met {
            Status::Success
        } else {
            Status::Running
        };

        if status != Status::Running {
            self.reset();
        }
        status
    }

    fn reset(&mut self) {
        for c in self.children.iter_mut() {
            c.reset();
        }
    }
}

/// [`Selector`] variant that restarts from child 0 on every tick.
///
/// Earlier (higher-priority) children get re-evaluated while a later child is
/// running; when the running child changes, the previously running one is
/// reset so it does not resume from stale progress.
pub struct ReactiveSelector<C> {
    children: Vec<Box<dyn Node<C>>>,
    running: Option<usize>,
}

impl<C> ReactiveSelector<C> {
    pub fn new(children: Vec<Box<dyn Node<C>>>) -> Self {
        Self {
            children,
            running: None,
        }
    }

    pub fn with_child(mut self, child: impl Node<C> + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }
}

impl<C> Node<C> for ReactiveSelector<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        for (i, child) in self.children.iter_mut().enumerate() {
            match child.tick(ctx) {
                Status::Failure => continue,
                Status::Success => {
                    self.reset();
                    return Status::Success;
                }
                Status::Running => {
                    if self.running != Some(i) {
                        if let Some(prev) = self.running {
                            self.children[prev].reset();
                        }
                        self.running = Some(i);
                    }
                    return Status::Running;
                }
            }
        }

        self.reset();
        Status::Failure
    }

    fn reset(&mut self) {
        self.running = None;
        for c in self.children.iter_mut() {
            c.reset();
        }
    }
}

/// [`Sequence`] variant that restarts from child 0 on every tick.
pub struct ReactiveSequence<C> {
    children: Vec<Box<dyn Node<C>>>,
    running: Option<usize>,
}

impl<C> ReactiveSequence<C> {
    pub fn new(children: Vec<Box<dyn Node<C>>>) -> Self {
        Self {
            children,
            running: None,
        }
    }

    pub fn with_child(mut self, child: impl Node<C> + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }
}

impl<C> Node<C> for ReactiveSequence<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        for (i, child) in self.children.iter_mut().enumerate() {
            match child.tick(ctx) {
                Status::Success => continue,
                Status::Failure => {
                    self.reset();
                    return Status::Failure;
                }
                Status::Running => {
                    if self.running != Some(i) {
                        if let Some(prev) = self.running {
                            self.children[prev].reset();
                        }
                        self.running = Some(i);
                    }
                    return Status::Running;
                }
            }
        }

        self.reset();
        Status::Success
    }

    fn reset(&mut self) {
        self.running = None;
        for c in self.children.iter_mut() {
            c.reset();
        }
    }
}
