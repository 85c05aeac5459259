//! Benchmarks for the grid transform and search.
//!
//! Run with: cargo bench -p drone-search
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p drone-search -- --save-baseline main
//! 2. After changes: cargo bench -p drone-search -- --baseline main

#![allow(missing_docs, clippy::unwrap_used, clippy::cast_possible_truncation)]

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use drone_maze::transform_to_maze;
use drone_search::{MazeContext, astar, breadth_first, plan};
use drone_types::{Drone, GoalRegion, Heuristic, Obstacle, PlannerConfig, Scene, Window};
use nalgebra::Point3;

// =============================================================================
// Scenes
// =============================================================================

/// 30 x 30 x 30 window, 1 x 1 x 0.2 body at (2, 2, 2), goal at (20, 20, 20).
fn reference_scene() -> Scene {
    let drone = Drone::new(Point3::new(2.0, 2.0, 2.0), 1.0, 1.0, 0.2).unwrap();
    Scene::new(drone, Window::new(30.0, 30.0, 30.0), 1)
        .with_goal(GoalRegion::at(20.0, 20.0, 20.0))
}

/// The reference scene with a grid of pillars between start and goal.
fn pillar_scene() -> Scene {
    let mut obstacles = Vec::new();
    for i in 0..4 {
        for j in 0..4 {
            let x = 5.0 + 4.0 * f64::from(i);
            let y = 5.0 + 4.0 * f64::from(j);
            obstacles.push(Obstacle::from_coords(x, y, 0.0, x + 1.5, y + 1.5, 26.0));
        }
    }
    reference_scene().with_obstacles(obstacles)
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("Transform");
    group.sample_size(20);

    let open = reference_scene();
    let pillars = pillar_scene();
    group.throughput(Throughput::Elements(31 * 31 * 31));

    group.bench_function("open_30", |b| {
        b.iter(|| transform_to_maze(black_box(&open), 0.05));
    });

    group.bench_function("pillars_30", |b| {
        b.iter(|| transform_to_maze(black_box(&pillars), 0.05));
    });

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("Search");
    group.sample_size(20);

    let maze = transform_to_maze(&pillar_scene(), 0.05).unwrap();
    group.throughput(Throughput::Elements(maze.len() as u64));

    for heuristic in [Heuristic::Manhattan, Heuristic::Euclidean, Heuristic::Zero] {
        let context = MazeContext::new(&maze, heuristic);
        group.bench_function(format!("astar_{}", heuristic.name()), |b| {
            b.iter(|| astar(black_box(context.start())));
        });
    }

    let context = MazeContext::new(&maze, Heuristic::Zero);
    group.bench_function("bfs", |b| {
        b.iter(|| breadth_first(black_box(context.start())));
    });

    group.finish();
}

fn bench_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("Plan");
    group.sample_size(10);

    let scene = reference_scene();
    let config = PlannerConfig::default();
    group.bench_function("reference_30", |b| {
        b.iter(|| plan(black_box(&scene), &config));
    });

    group.finish();
}

// =============================================================================
// Criterion Setup
// =============================================================================

criterion_group!(benches, bench_transform, bench_search, bench_plan);
criterion_main!(benches);
