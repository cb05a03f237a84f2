use canopy_bt::builder::action;
use canopy_bt::{Inverter, Node, Repeat, Retry, Status};

#[derive(Default)]
struct Ctx {
    log: Vec<&'static str>,
    calls: u32,
}

fn fixed(name: &'static str, status: Status) -> Box<dyn Node<Ctx>> {
    action(move |ctx: &mut Ctx| {
        ctx.log.push(name);
        status
    })
}

#[test]
fn inverter_swaps_terminal_statuses_and_passes_running() {
    let mut ctx = Ctx::default();

    let mut inv = Inverter::new(fixed("s", Status::Success));
    assert_eq!(inv.tick(&mut ctx), Status::Failure);

    let mut inv = Inverter::new(fixed("f", Status::Failure));
    assert_eq!(inv.tick(&mut ctx), Status::Success);

    let mut inv = Inverter::new(fixed("r", Status::Running));
    assert_eq!(inv.tick(&mut ctx), Status::Running);
}

#[test]
fn retry_recovers_within_budget_in_one_tick() {
    // Fails on attempts 1 and 2, succeeds on attempt 3.
    let child = action(|ctx: &mut Ctx| {
        ctx.calls += 1;
        ctx.log.push("try");
        if ctx.calls < 3 {
            Status::Failure
        } else {
            Status::Success
        }
    });
    let mut retry = Retry::new(2, child);

    let mut ctx = Ctx::default();
    assert_eq!(retry.tick(&mut ctx), Status::Success);
    assert_eq!(ctx.calls, 3); // all three attempts inside one tick
}

#[test]
fn retry_fails_once_budget_is_exhausted_and_resets_counter() {
    let mut retry = Retry::new(1, fixed("try", Status::Failure));

    let mut ctx = Ctx::default();
    assert_eq!(retry.tick(&mut ctx), Status::Failure);
    assert_eq!(ctx.log.len(), 2); // max_retries + 1 attempts

    // The counter was cleared with the terminal result: a fresh activation
    // gets the full budget again.
    assert_eq!(retry.tick(&mut ctx), Status::Failure);
    assert_eq!(ctx.log.len(), 4);
}

#[test]
fn retry_zero_budget_means_single_attempt() {
    let mut retry = Retry::new(0, fixed("try", Status::Failure));

    let mut ctx = Ctx::default();
    assert_eq!(retry.tick(&mut ctx), Status::Failure);
    assert_eq!(ctx.log.len(), 1);
}

#[test]
fn retry_keeps_its_counter_across_a_running_attempt() {
    // Attempt 1 fails instantly; attempt 2 runs for a tick, then fails.
    let child = action(|ctx: &mut Ctx| {
        ctx.calls += 1;
        match ctx.calls {
            1 => Status::Failure,
            2 => Status::Running,
            _ => Status::Failure,
        }
    });
    let mut retry = Retry::new(1, child);

    let mut ctx = Ctx::default();
    assert_eq!(retry.tick(&mut ctx), Status::Running);
    // The suspended attempt resumes and fails; the earlier failure still
    // counts, so the budget is now exhausted.
    assert_eq!(retry.tick(&mut ctx), Status::Failure);
    assert_eq!(ctx.calls, 3);
}

#[test]
fn repeat_counts_consecutive_successes_in_one_tick() {
    let mut repeat = Repeat::new(3, fixed("go", Status::Success));

    let mut ctx = Ctx::default();
    assert_eq!(repeat.tick(&mut ctx), Status::Success);
    assert_eq!(ctx.log.len(), 3);
}

#[test]
fn repeat_aborts_on_first_failure_and_resets_counter() {
    // Succeeds on iteration 1, fails on iteration 2, then stays successful.
    let child = action(|ctx: &mut Ctx| {
        ctx.calls += 1;
        ctx.log.push("go");
        if ctx.calls == 2 {
            Status::Failure
        } else {
            Status::Success
        }
    });
    let mut repeat = Repeat::new(3, child);

    let mut ctx = Ctx::default();
    assert_eq!(repeat.tick(&mut ctx), Status::Failure);
    assert_eq!(ctx.log.len(), 2);

    // Counter was reset to 0: the next activation needs three fresh
    // successes, not one.
    assert_eq!(repeat.tick(&mut ctx), Status::Success);
    assert_eq!(ctx.log.len(), 5);
}

#[test]
fn repeat_zero_succeeds_without_ticking_the_child() {
    let mut repeat = Repeat::new(0, fixed("go", Status::Success));

    let mut ctx = Ctx::default();
    assert_eq!(repeat.tick(&mut ctx), Status::Success);
    assert!(ctx.log.is_empty());
}

#[test]
fn repeat_suspends_on_running_and_finishes_later() {
    // Iteration 1 succeeds instantly; iteration 2 takes a tick to finish.
    let child = action(|ctx: &mut Ctx| {
        ctx.calls += 1;
        match ctx.calls {
            1 => Status::Success,
            2 => Status::Running,
            _ => Status::Success,
        }
    });
    let mut repeat = Repeat::new(2, child);

    let mut ctx = Ctx::default();
    assert_eq!(repeat.tick(&mut ctx), Status::Running);
    assert_eq!(repeat.tick(&mut ctx), Status::Success);
    assert_eq!(ctx.calls, 3);
}
