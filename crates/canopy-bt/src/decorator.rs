use crate::bt::{Node, Status};

/// Flips the child's terminal status; `Running` passes through.
pub struct Inverter<C> {
    child: Box<dyn Node<C>>,
}

impl<C> Inverter<C> {
    pub fn new(child: impl Node<C> + 'static) -> Self {
        Self {
            child: Box::new(child),
        }
    }
}

impl<C> Node<C> for Inverter<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        self.child.tick(ctx).invert()
    }

    fn reset(&mut self) {
        self.child.reset();
    }
}

/// Re-attempts a failing child, up to `max_retries` extra attempts.
///
/// Failed attempts are retried within the same tick: the child is reset and
/// ticked again immediately, so a chain of instant failures costs one call.
/// A `Running` child suspends the decorator with the attempt counter intact;
/// the counter is node-local and cleared on any terminal result. With
/// `max_retries = 0` the child gets exactly one attempt.
pub struct Retry<C> {
    child: Box<dyn Node<C>>,
    max_retries: u32,
    retries: u32,
}

impl<C> Retry<C> {
    pub fn new(max_retries: u32, child: impl Node<C> + 'static) -> Self {
        Self {
            child: Box::new(child),
            max_retries,
            retries: 0,
        }
    }
}

impl<C> Node<C> for Retry<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        loop {
            match self.child.tick(ctx) {
                Status::Running => return Status::Running,
                Status::Success => {
                    self.reset();
                    return Status::Success;
                }
                Status::Failure => {
                    self.retries += 1;
                    if self.retries > self.max_retries {
                        self.reset();
                        return Status::Failure;
                    }
                    // Fresh attempt: the child restarts, the counter does not.
                    self.child.reset();
                }
            }
        }
    }

    fn reset(&mut self) {
        self.retries = 0;
        self.child.reset();
    }
}

/// Requires `max_repeats` consecutive child successes.
///
/// One child `Failure` aborts the whole repetition. Completed iterations are
/// looped through within the same tick when the child finishes instantly;
/// `Running` suspends with the iteration counter intact. With
/// `max_repeats = 0` the node succeeds without ever ticking the child.
pub struct Repeat<C> {
    child: Box<dyn Node<C>>,
    max_repeats: u32,
    repeats: u32,
}

impl<C> Repeat<C> {
    pub fn new(max_repeats: u32, child: impl Node<C> + 'static) -> Self {
        Self {
            child: Box::new(child),
            max_repeats,
            repeats: 0,
        }
    }
}

impl<C> Node<C> for Repeat<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        while self.repeats < self.max_repeats {
            match self.child.tick(ctx) {
                Status::Running => return Status::Running,
                Status::Failure => {
                    self.reset();
                    return Status::Failure;
                }
                Status::Success => {
                    self.repeats += 1;
                    self.child.reset();
                }
            }
        }

        self.reset();
        Status::Success
    }

    fn reset(&mut self) {
        self.repeats = 0;
        self.child.reset();
    }
}
