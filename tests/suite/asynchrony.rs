//! Reactions never run inside the call that attached or triggered them.

use std::cell::Cell;
use std::rc::Rc;

use after_core::{Handler, ManualScheduler, Outcome, Promise, fulfilled, pending, rejected};

use crate::common::{entries, init_tracing, log, observe};

#[test]
fn then_on_fulfilled_promise_returns_before_handler_runs() {
    init_tracing();
    let scheduler = ManualScheduler::new();
    let source: Promise<i32, String> = fulfilled(&scheduler, 1);
    let ran = Rc::new(Cell::new(false));
    let flag = Rc::clone(&ran);

    source.then(
        Handler::new(move |v: i32| {
            flag.set(true);
            Outcome::Fulfill(v)
        }),
        Handler::Absent,
    );
    assert!(!ran.get());

    scheduler.run_until_idle().unwrap();
    assert!(ran.get());
}

#[test]
fn then_on_rejected_promise_returns_before_handler_runs() {
    init_tracing();
    let scheduler = ManualScheduler::new();
    let source: Promise<i32, String> = rejected(&scheduler, "E".to_string());
    let ran = Rc::new(Cell::new(false));
    let flag = Rc::clone(&ran);

    source.catch(move |reason| {
        flag.set(true);
        Outcome::Reject(reason)
    });
    assert!(!ran.get());

    scheduler.run_until_idle().unwrap();
    assert!(ran.get());
}

#[test]
fn fulfill_returns_before_reactions_run() {
    init_tracing();
    let scheduler = ManualScheduler::new();
    let deferred = pending::<i32, String, _>(&scheduler);
    let log = log();
    let sink = Rc::clone(&log);
    deferred.promise.and_then(move |v| {
        sink.borrow_mut().push("reaction".to_string());
        Outcome::Fulfill(v)
    });

    deferred.resolver.fulfill(1);
    log.borrow_mut().push("after fulfill".to_string());
    scheduler.run_until_idle().unwrap();

    assert_eq!(entries(&log), vec!["after fulfill", "reaction"]);
}

#[test]
fn caller_continuation_runs_before_reaction() {
    init_tracing();
    let scheduler = ManualScheduler::new();
    let source: Promise<i32, String> = fulfilled(&scheduler, 1);
    let log = log();
    let sink = Rc::clone(&log);

    log.borrow_mut().push("before then".to_string());
    source.and_then(move |v| {
        sink.borrow_mut().push("reaction".to_string());
        Outcome::Fulfill(v)
    });
    log.borrow_mut().push("after then".to_string());
    scheduler.run_until_idle().unwrap();

    assert_eq!(
        entries(&log),
        vec!["before then", "after then", "reaction"]
    );
}

#[test]
fn each_chain_link_takes_a_turn() {
    init_tracing();
    let scheduler = ManualScheduler::new();
    let source: Promise<i32, String> = fulfilled(&scheduler, 1);
    let observed = observe(&source.and_then(|v| Outcome::Fulfill(v + 1)));

    assert!(scheduler.run_next());
    assert!(!observed.is_settled());
    assert!(scheduler.run_next());
    assert_eq!(observed.get(), Some(Ok(2)));
    assert!(scheduler.is_empty());
}
