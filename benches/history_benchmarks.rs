use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use undo_state::scenario::{self, builtin};
use undo_state::{DelegatedUndoState, MagicCommand, SetCommand, Viewer};

/// Benchmark filling a history and undoing all of it
fn bench_execute_undo(c: &mut Criterion) {
    let mut group = c.benchmark_group("history");

    for depth in [16usize, 256, 4096] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut state = DelegatedUndoState::new();
                for i in 0..depth {
                    if i % 4 == 3 {
                        state.execute(Box::new(MagicCommand::new("bench")));
                    } else {
                        state.execute(Box::new(SetCommand::new((i % 100) as i32, "bench")));
                    }
                }
                while state.undo().is_some() {}
                black_box(state.value())
            });
        });
    }
    group.finish();
}

/// Benchmark the builtin demo scenarios end to end (output discarded)
fn bench_builtin_scenarios(c: &mut Criterion) {
    let scenarios = builtin::inheritance();

    c.bench_function("builtin_inheritance", |b| {
        b.iter(|| {
            let mut viewer = Viewer::new(std::io::sink());
            for s in &scenarios {
                black_box(scenario::run(s, &mut viewer).ok());
            }
        });
    });
}

criterion_group!(benches, bench_execute_undo, bench_builtin_scenarios);
criterion_main!(benches);
