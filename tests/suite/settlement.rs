//! Single-assignment and reaction ordering.

use std::rc::Rc;

use after_core::{Handler, ManualScheduler, Outcome, Promise, PromiseState, pending};

use crate::common::{entries, init_tracing, log, observe};

#[test]
fn fulfill_twice_keeps_first_value() {
    init_tracing();
    let scheduler = ManualScheduler::new();
    let deferred = pending::<i32, String, _>(&scheduler);
    let observed = observe(&deferred.promise);

    deferred.resolver.fulfill(1);
    deferred.resolver.fulfill(2);
    scheduler.run_until_idle().unwrap();

    assert_eq!(observed.get(), Some(Ok(1)));
}

#[test]
fn reject_after_fulfill_is_ignored() {
    init_tracing();
    let scheduler = ManualScheduler::new();
    let deferred = pending::<i32, String, _>(&scheduler);
    let observed = observe(&deferred.promise);

    deferred.resolver.fulfill(1);
    deferred.resolver.reject("late".to_string());
    scheduler.run_until_idle().unwrap();

    assert_eq!(observed.get(), Some(Ok(1)));
    assert_eq!(deferred.promise.state(), PromiseState::Fulfilled);
}

#[test]
fn fulfill_after_reject_is_ignored() {
    init_tracing();
    let scheduler = ManualScheduler::new();
    let deferred = pending::<i32, String, _>(&scheduler);
    let observed = observe(&deferred.promise);

    deferred.resolver.reject("E".to_string());
    deferred.resolver.fulfill(1);
    scheduler.run_until_idle().unwrap();

    assert_eq!(observed.get(), Some(Err("E".to_string())));
}

#[test]
fn repeated_settlement_does_not_refire_reactions() {
    init_tracing();
    let scheduler = ManualScheduler::new();
    let deferred = pending::<i32, String, _>(&scheduler);
    let log = log();
    let sink = Rc::clone(&log);
    deferred.promise.and_then(move |v| {
        sink.borrow_mut().push(format!("fired:{v}"));
        Outcome::Fulfill(v)
    });

    deferred.resolver.fulfill(1);
    scheduler.run_until_idle().unwrap();
    deferred.resolver.fulfill(2);
    deferred.resolver.reject("E".to_string());
    scheduler.run_until_idle().unwrap();

    assert_eq!(entries(&log), vec!["fired:1"]);
}

#[test]
fn reactions_fire_in_registration_order() {
    init_tracing();
    let scheduler = ManualScheduler::new();
    let deferred = pending::<i32, String, _>(&scheduler);
    let log = log();
    for name in ["R1", "R2", "R3"] {
        let sink = Rc::clone(&log);
        deferred.promise.and_then(move |v| {
            sink.borrow_mut().push(format!("{name}:{v}"));
            Outcome::Fulfill(v)
        });
    }

    deferred.resolver.fulfill(9);
    scheduler.run_until_idle().unwrap();

    assert_eq!(entries(&log), vec!["R1:9", "R2:9", "R3:9"]);
}

#[test]
fn rejection_reactions_fire_in_registration_order() {
    init_tracing();
    let scheduler = ManualScheduler::new();
    let deferred = pending::<i32, String, _>(&scheduler);
    let log = log();
    for name in ["R1", "R2", "R3"] {
        let sink = Rc::clone(&log);
        deferred.promise.catch(move |reason| {
            sink.borrow_mut().push(format!("{name}:{reason}"));
            Outcome::Reject(reason)
        });
    }

    deferred.resolver.reject("E".to_string());
    scheduler.run_until_idle().unwrap();

    assert_eq!(entries(&log), vec!["R1:E", "R2:E", "R3:E"]);
}

#[test]
fn late_registration_fires_with_original_value() {
    init_tracing();
    let scheduler = ManualScheduler::new();
    let deferred = pending::<i32, String, _>(&scheduler);
    deferred.resolver.fulfill(3);
    scheduler.run_until_idle().unwrap();

    let observed = observe(&deferred.promise);
    assert!(!observed.is_settled());
    scheduler.run_until_idle().unwrap();

    assert_eq!(observed.get(), Some(Ok(3)));
}

#[test]
fn late_registration_on_rejected_fires_once() {
    init_tracing();
    let scheduler = ManualScheduler::new();
    let deferred = pending::<i32, String, _>(&scheduler);
    deferred.resolver.reject("E".to_string());

    let log = log();
    let sink = Rc::clone(&log);
    deferred.promise.catch(move |reason| {
        sink.borrow_mut().push(reason.clone());
        Outcome::Reject(reason)
    });

    assert_eq!(scheduler.run_until_idle().unwrap(), 1);
    assert_eq!(entries(&log), vec!["E"]);
}

#[test]
fn fulfill_then_register_then_double() {
    init_tracing();
    let scheduler = ManualScheduler::new();
    let deferred = pending::<i32, String, _>(&scheduler);
    deferred.resolver.fulfill(10);

    let doubled = deferred
        .promise
        .then(Handler::new(|v: i32| Outcome::Fulfill(v * 2)), Handler::Absent);
    let observed = observe(&doubled);
    scheduler.run_until_idle().unwrap();

    assert_eq!(observed.get(), Some(Ok(20)));
}

#[test]
fn unsettled_promise_stays_pending() {
    init_tracing();
    let scheduler = ManualScheduler::new();
    let deferred = pending::<i32, String, _>(&scheduler);
    let chained: Promise<i32, String> = deferred.promise.and_then(|v| Outcome::Fulfill(v + 1));
    let observed = observe(&chained);

    assert_eq!(scheduler.run_until_idle().unwrap(), 0);
    assert!(!observed.is_settled());
    assert_eq!(chained.state(), PromiseState::Pending);
}
