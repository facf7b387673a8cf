use std::time::Duration;

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use hrsw::Stopwatch;
use human_duration::human_duration;

use puzzles::problems::strings::StringsConfig;
use puzzles::solver::solve;

/// Maximum time willing to wait for a single benchmark instance.
/// Experiments are carried out at least 5s and at least 100 times, so running a
/// 1s instance takes 1m40s.
const MAX_INSTANCE_TIME: Duration = Duration::from_secs(1);

fn sample_ladders(c: &mut Criterion) {
    let mut group = c.benchmark_group("Strings Solver");

    for len in 1..=4 {
        let start = "A".repeat(len);
        let end = "M".repeat(len);
        let instance_name = format!("{start}->{end}");
        let config = StringsConfig::new(&start, &end).unwrap();

        let mut stopwatch = Stopwatch::new_started();
        let solution = solve(config.clone());
        stopwatch.stop();
        let elapsed = stopwatch.elapsed();

        println!("{instance_name}: {solution}");
        solution.print_memory_stats();
        if elapsed > MAX_INSTANCE_TIME {
            log::warn!(
                "Skipping {instance_name} as it takes too long ({})",
                human_duration(&elapsed)
            );
            continue;
        }

        group.bench_with_input(
            BenchmarkId::new("BFS", &instance_name),
            &config,
            |b, config| b.iter(|| solve(config.clone())),
        );
    }
    group.finish();
}

criterion_group!(benches, sample_ladders);
criterion_main!(benches);
