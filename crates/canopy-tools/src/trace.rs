#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cell::RefCell;
use std::rc::Rc;

use canopy_bt::{Node, Status};

/// One recorded tick of a traced node.
///
/// Intentionally dumb data: record during a run, render with whatever tooling
/// sits on top.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceEvent {
    pub tick: u64,
    pub tag: Cow<'static, str>,
    pub status: Status,
}

impl TraceEvent {
    pub fn new(tick: u64, tag: impl Into<Cow<'static, str>>, status: Status) -> Self {
        Self {
            tick,
            tag: tag.into(),
            status,
        }
    }
}

pub trait TraceSink {
    fn emit(&mut self, event: TraceEvent);
}

#[derive(Debug, Default)]
pub struct NullTraceSink;

impl TraceSink for NullTraceSink {
    fn emit(&mut self, _event: TraceEvent) {}
}

#[derive(Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceLog {
    pub events: Vec<TraceEvent>,
}

impl TraceLog {
    pub fn push(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}

/// Cloneable handle to a shared [`TraceLog`].
///
/// A tree instance has exactly one caller, so a plain `Rc<RefCell<..>>` is
/// enough: clone the handle into any number of [`Traced`] nodes and read the
/// log from the driver side.
#[derive(Clone, Default)]
pub struct TraceHandle(Rc<RefCell<TraceLog>>);

impl TraceHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains and returns the accumulated log.
    pub fn take(&self) -> TraceLog {
        std::mem::take(&mut *self.0.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.0.borrow().events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TraceSink for TraceHandle {
    fn emit(&mut self, event: TraceEvent) {
        self.0.borrow_mut().push(event);
    }
}

/// Decorator that records the wrapped child's status after every tick.
///
/// The tick ordinal is diagnostic, not progress: it keeps counting across
/// activations so a log spanning several of them stays ordered, and `reset`
/// only resets the child.
pub struct Traced<C> {
    tag: Cow<'static, str>,
    child: Box<dyn Node<C>>,
    sink: Box<dyn TraceSink>,
    ticks: u64,
}

impl<C> Traced<C> {
    pub fn new(
        tag: impl Into<Cow<'static, str>>,
        child: impl Node<C> + 'static,
        sink: impl TraceSink + 'static,
    ) -> Self {
        Self {
            tag: tag.into(),
            child: Box::new(child),
            sink: Box::new(sink),
            ticks: 0,
        }
    }
}

impl<C> Node<C> for Traced<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        let status = self.child.tick(ctx);
        self.ticks = self.ticks.wrapping_add(1);
        self.sink
            .emit(TraceEvent::new(self.ticks, self.tag.clone(), status));
        status
    }

    fn reset(&mut self) {
        self.child.reset();
    }
}
