#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of ticking a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    /// The node has not finished; tick it again with its bookkeeping intact.
    Running,
    Success,
    Failure,
}

impl Status {
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    #[inline]
    pub fn is_terminal(self) -> bool {
        !self.is_running()
    }

    /// Swaps `Success` and `Failure`; `Running` passes through untouched.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
            Status::Running => Status::Running,
        }
    }
}

/// A behavior tree node, generic over the context the tree runs against.
///
/// `tick` advances the node by one step and returns exactly one [`Status`].
/// Returning [`Status::Running`] suspends the node: control goes back to the
/// driver, and the next `tick` must resume from the same internal position
/// rather than redo completed work. `reset` clears that position (cursors,
/// counters) so the next `tick` starts a fresh activation; it is recursive
/// through children and idempotent.
///
/// A tree instance is single-threaded: exactly one caller drives it at a
/// time. A panic inside a leaf's closure propagates to that caller; the
/// engine does not catch it.
pub trait Node<C> {
    fn tick(&mut self, ctx: &mut C) -> Status;

    fn reset(&mut self);
}

impl<C> Node<C> for Box<dyn Node<C>> {
    #[inline]
    fn tick(&mut self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }

    #[inline]
    fn reset(&mut self) {
        (**self).reset();
    }
}
