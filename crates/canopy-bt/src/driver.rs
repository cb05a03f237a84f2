use crate::bt::{Node, Status};

/// Owns a tree's root and drives it one tick at a time.
///
/// A terminal result ends the activation: the root is reset before the next
/// tick, so each `Success`/`Failure` starts the tree over. The caller owns
/// the notion of a tick (fixed-rate loop, per-frame callback, manual step);
/// the driver only advances and bookkeeps.
pub struct Driver<C> {
    root: Box<dyn Node<C>>,
    last: Status,
    ticks: u64,
}

impl<C> Driver<C> {
    pub fn new(root: impl Node<C> + 'static) -> Self {
        Self {
            root: Box::new(root),
            last: Status::Running,
            ticks: 0,
        }
    }

    pub fn tick(&mut self, ctx: &mut C) -> Status {
        self.ticks = self.ticks.wrapping_add(1);
        self.last = self.root.tick(ctx);
        if self.last != Status::Running {
            self.root.reset();
        }
        self.last
    }

    pub fn last_status(&self) -> Status {
        self.last
    }

    /// Ticks driven so far, across activations.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Drops any in-progress activation without ticking.
    pub fn abandon(&mut self) {
        self.root.reset();
        self.last = Status::Running;
    }
}
