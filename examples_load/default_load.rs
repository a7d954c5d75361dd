use std::io;
use std::sync::Mutex;
use std::time::Instant;

use writer_log_sink::{CompletionStatus, EventSink, Kvs, LogLevel, WriterSink};

fn main() {
    let sink = WriterSink::new(Mutex::new(io::sink()), LogLevel::Info);

    let kvs: Kvs = [("foo", "bar"), ("qux", "dog")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let debug_kvs: Kvs = [("level", "debug")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    let n: u64 = 100_000;

    let start = Instant::now();
    for i in 0..n {
        sink.emit_timing("load", "iteration", i * 1_000, Some(&kvs));
    }
    report("written", n, start);

    let start = Instant::now();
    for _ in 0..n {
        sink.emit_event("load", "filtered", Some(&debug_kvs));
    }
    report("filtered", n, start);

    sink.emit_complete("load", CompletionStatus::Success, start.elapsed().as_nanos() as u64, None);
}

fn report(label: &str, n: u64, start: Instant) {
    let elapsed = start.elapsed();
    println!("{}: {} events in {:?} (~{:.0} ev/s)",
        label,
        n,
        elapsed,
        n as f64 / elapsed.as_secs_f64()
    );
}
