//! Boxing helpers for ergonomic tree assembly.
//!
//! `Box::new(Sequence::new(vec![Box::new(..), ..]))` gets noisy in deep
//! trees; these helpers shorten it to `sequence(vec![condition(..), ..])`.
//! Composites also expose chainable `with_child` for fluent assembly.

use crate::bt::{Node, Status};
use crate::composite::{
    Parallel, ParallelPolicy, ReactiveSelector, ReactiveSequence, Selector, Sequence,
};
use crate::decorator::{Inverter, Repeat, Retry};
use crate::leaf::{Action, Condition, InverseCondition};

#[inline]
pub fn action<C, F>(op: F) -> Box<dyn Node<C>>
where
    C: 'static,
    F: FnMut(&mut C) -> Status + 'static,
{
    Box::new(Action::new(op))
}

#[inline]
pub fn condition<C, F>(pred: F) -> Box<dyn Node<C>>
where
    C: 'static,
    F: FnMut(&C) -> bool + 'static,
{
    Box::new(Condition::new(pred))
}

#[inline]
pub fn inverse_condition<C, F>(pred: F) -> Box<dyn Node<C>>
where
    C: 'static,
    F: FnMut(&C) -> bool + 'static,
{
    Box::new(InverseCondition::new(pred))
}

#[inline]
pub fn sequence<C: 'static>(children: Vec<Box<dyn Node<C>>>) -> Box<dyn Node<C>> {
    Box::new(Sequence::new(children))
}

#[inline]
pub fn selector<C: 'static>(children: Vec<Box<dyn Node<C>>>) -> Box<dyn Node<C>> {
    Box::new(Selector::new(children))
}

#[inline]
pub fn reactive_sequence<C: 'static>(children: Vec<Box<dyn Node<C>>>) -> Box<dyn Node<C>> {
    Box::new(ReactiveSequence::new(children))
}

#[inline]
pub fn reactive_selector<C: 'static>(children: Vec<Box<dyn Node<C>>>) -> Box<dyn Node<C>> {
    Box::new(ReactiveSelector::new(children))
}

#[inline]
pub fn parallel<C: 'static>(
    success_policy: ParallelPolicy,
    failure_policy: ParallelPolicy,
    children: Vec<Box<dyn Node<C>>>,
) -> Box<dyn Node<C>> {
    Box::new(Parallel::new(success_policy, failure_policy, children))
}

#[inline]
pub fn inverter<C: 'static>(child: Box<dyn Node<C>>) -> Box<dyn Node<C>> {
    Box::new(Inverter::new(child))
}

#[inline]
pub fn retry<C: 'static>(max_retries: u32, child: Box<dyn Node<C>>) -> Box<dyn Node<C>> {
    Box::new(Retry::new(max_retries, child))
}

#[inline]
pub fn repeat<C: 'static>(max_repeats: u32, child: Box<dyn Node<C>>) -> Box<dyn Node<C>> {
    Box::new(Repeat::new(max_repeats, child))
}
