// Criterion benchmarks for the stepper hot path.
//
// Run:
//   cargo bench -p pushdown-sim

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use pushdown_sim::Dpda;

/// Balanced a^n b^n machine, the usual exploration workload.
fn anbn() -> Dpda {
    Dpda::builder()
        .initial_state("q0")
        .initial_stack_symbol("Z")
        .final_state("q2")
        .rule("q0", "a", "Z", "q0", &["A", "Z"])
        .rule("q0", "a", "A", "q0", &["A", "A"])
        .rule("q0", "b", "A", "q1", &[])
        .rule("q1", "b", "A", "q1", &[])
        .rule("q1", "", "Z", "q2", &["Z"])
        .build()
        .unwrap()
}

/// Walk a^512 b^512 plus the closing epsilon move, one step per symbol.
fn bench_step_walk(c: &mut Criterion) {
    let dpda = anbn();
    c.bench_function("step_anbn_512", |b| {
        b.iter(|| {
            let mut stepper = dpda.stepper();
            for _ in 0..512 {
                stepper.step(black_box("a")).unwrap();
            }
            for _ in 0..512 {
                stepper.step(black_box("b")).unwrap();
            }
            stepper.step(black_box("")).unwrap();
            black_box(stepper.is_accepting())
        });
    });
}

/// Probe the legal-input query without stepping.
fn bench_legal_inputs(c: &mut Criterion) {
    let dpda = anbn();
    let mut stepper = dpda.stepper();
    stepper.step("a").unwrap();
    c.bench_function("legal_inputs", |b| {
        b.iter(|| black_box(stepper.legal_inputs()));
    });
}

criterion_group!(benches, bench_step_walk, bench_legal_inputs);
criterion_main!(benches);
