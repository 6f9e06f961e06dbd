//! Benchmark for the pure move-plan reducer, the hot path behind every
//! drag, arrow tap and rollback.

use chrono::Utc;
use criterion::{criterion_group, criterion_main, Criterion};
use pretor_kanban::{build_move_plan, Status, Task};
use std::hint::black_box;

fn board(size: usize) -> Vec<Task> {
    (0..size)
        .map(|i| {
            Task::new(format!("task {i}")).in_lane(Status::ALL[i % 3], i / 3)
        })
        .collect()
}

fn bench_build_move_plan(c: &mut Criterion) {
    for size in [30, 300] {
        let tasks = board(size);
        let task_id = tasks[0].id.clone();
        let now = Utc::now();

        c.bench_function(&format!("build_move_plan_{size}"), |b| {
            b.iter(|| {
                black_box(build_move_plan(
                    black_box(&tasks),
                    &task_id,
                    Status::Done,
                    Some(5),
                    now,
                ))
            })
        });
    }
}

criterion_group!(benches, bench_build_move_plan);
criterion_main!(benches);
