//! Verbosity gating and lazy message evaluation.

use std::cell::Cell;

use verdict_conformance::harness;
use verdict_report::{Message, Verbosity};

#[test]
fn normal_verbosity_scenario() {
    let h = harness(Verbosity::Normal);
    h.ctx.verbose_report("x");
    assert!(h.capture.is_empty());
    h.ctx.report("y");
    assert_eq!(h.capture.lines(), vec!["y"]);
}

#[test]
fn suppressed_debug_never_evaluates_producer() {
    for verbosity in [Verbosity::Quiet, Verbosity::Normal, Verbosity::Verbose] {
        let h = harness(verbosity);
        let counter = Cell::new(0u32);
        let delivered = h.ctx.debug_report(Message::lazy(|| {
            counter.set(counter.get() + 1);
            format!("expensive repr {}", counter.get())
        }));
        assert!(!delivered);
        assert_eq!(counter.get(), 0, "producer ran at {verbosity}");
        assert!(h.capture.is_empty());
    }
}

#[test]
fn delivered_lazy_message_is_evaluated_once() {
    let h = harness(Verbosity::Debug);
    let counter = Cell::new(0u32);
    h.ctx.debug_report(Message::lazy(|| {
        counter.set(counter.get() + 1);
        "shrunk to minimal example"
    }));
    assert_eq!(counter.get(), 1);
    assert_eq!(h.capture.lines(), vec!["shrunk to minimal example"]);
}

#[test]
fn each_level_matches_its_threshold() {
    let expectations = [
        (Verbosity::Quiet, 0),
        (Verbosity::Normal, 1),
        (Verbosity::Verbose, 2),
        (Verbosity::Debug, 3),
    ];
    for (verbosity, delivered) in expectations {
        let h = harness(verbosity);
        h.ctx.report("normal");
        h.ctx.verbose_report("verbose");
        h.ctx.debug_report("debug");
        assert_eq!(h.capture.len(), delivered, "at {verbosity}");
    }
}

#[test]
fn byte_messages_never_fail_delivery() {
    let h = harness(Verbosity::Normal);
    h.ctx.report(b"valid bytes");
    h.ctx.report(vec![0x66u8, 0x6f, 0x80]);
    assert_eq!(h.capture.lines(), vec!["valid bytes", "fo\\x80"]);
}
