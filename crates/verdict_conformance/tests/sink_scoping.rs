//! Scoped sink overrides: nesting, unwinding, and thread isolation.

use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use verdict_conformance::harness;
use verdict_report::{CaptureSink, SilentSink, SinkRef, Verbosity};

#[test]
fn n_nested_overrides_restore_original() {
    let h = harness(Verbosity::Normal);
    let original = h.ctx.current_sink();

    for n in 0..=16 {
        let sinks: Vec<SinkRef> = (0..n).map(|_| CaptureSink::new().sink()).collect();
        let mut guards = Vec::with_capacity(n);
        for sink in &sinks {
            guards.push(h.ctx.with_sink(Rc::clone(sink)));
        }
        while let Some(guard) = guards.pop() {
            drop(guard);
        }
        assert!(
            Rc::ptr_eq(&h.ctx.current_sink(), &original),
            "original sink not restored after {n} overrides"
        );
    }
}

#[test]
fn innermost_override_receives_reports() {
    let h = harness(Verbosity::Normal);
    let middle = CaptureSink::new();
    let inner = CaptureSink::new();
    {
        let _m = h.ctx.with_sink(middle.sink());
        h.ctx.report("to middle");
        {
            let _i = h.ctx.with_sink(inner.sink());
            h.ctx.report("to inner");
        }
        h.ctx.report("middle again");
    }
    h.ctx.report("to initial");

    assert_eq!(middle.lines(), vec!["to middle", "middle again"]);
    assert_eq!(inner.lines(), vec!["to inner"]);
    assert_eq!(h.capture.lines(), vec!["to initial"]);
}

#[test]
fn panicking_scope_restores_sink() {
    let h = harness(Verbosity::Normal);
    let original = h.ctx.current_sink();
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let _outer = h.ctx.with_sink(Rc::new(SilentSink));
        let _inner = h.ctx.with_sink(CaptureSink::new().sink());
        panic!("falsified");
    }));
    assert!(result.is_err());
    assert!(Rc::ptr_eq(&h.ctx.current_sink(), &original));
}

#[test]
fn thread_local_with_sink_captures_free_function_reports() {
    let capture = CaptureSink::new();
    verdict_report::set_verbosity(Verbosity::Normal);
    verdict_report::with_sink(capture.sink(), || {
        verdict_report::report("captured");
        verdict_report::verbose_report("suppressed");
    });
    assert_eq!(capture.lines(), vec!["captured"]);
}

#[test]
fn parallel_threads_do_not_see_each_others_sinks() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let capture = CaptureSink::new();
                verdict_report::set_verbosity(Verbosity::Normal);
                verdict_report::with_sink(capture.sink(), || {
                    for j in 0..10 {
                        verdict_report::report(format!("thread {i} line {j}"));
                    }
                });
                capture.lines()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let lines = handle.join().unwrap();
        assert_eq!(lines.len(), 10);
        assert!(lines.iter().all(|l| l.starts_with(&format!("thread {i} "))));
    }
}
