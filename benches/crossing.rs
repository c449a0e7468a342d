use chrono::{TimeDelta, TimeZone, Utc};
use criterion::criterion_main;
use rendezvous::{IntersectionMatcher, MatchConfig, Precision, Trajectory, Waypoint};

struct CrossingScenario {
    name: &'static str,
    waypoints: usize,
}

const CROSSING_CASES: [CrossingScenario; 3] = [
    CrossingScenario {
        name: "SHORT_WALK",
        waypoints: 100,
    },
    CrossingScenario {
        name: "CITY_RIDE",
        waypoints: 500,
    },
    CrossingScenario {
        name: "DAY_TRIP",
        waypoints: 2000,
    },
];

/// A straight diagonal through Amsterdam, sampled every ten seconds.
/// `rising` selects the direction, so two walks form an X meeting
/// halfway through both, at the same time.
fn diagonal(waypoints: usize, rising: bool) -> Trajectory {
    let start = Utc
        .with_ymd_and_hms(2018, 3, 14, 9, 0, 0)
        .single()
        .expect("timestamp must be valid");

    let step = 0.01 / waypoints as f64;

    (0..waypoints)
        .map(|index| {
            let offset = step * index as f64;
            let lat = if rising {
                52.36 + offset
            } else {
                52.37 - offset
            };

            Waypoint::new(
                lat,
                4.88 + offset,
                start + TimeDelta::seconds(10 * index as i64),
            )
        })
        .collect()
}

fn target_benchmark(c: &mut criterion::Criterion) {
    let mut group = c.benchmark_group("crossing");
    group.significance_level(0.1).sample_size(30);

    let config = MatchConfig::default();

    CROSSING_CASES.into_iter().for_each(|sc| {
        let first = diagonal(sc.waypoints, true);
        let second = diagonal(sc.waypoints, false);

        group.bench_function(format!("exact: {}", sc.name), |b| {
            b.iter(|| config.exact(Precision::Medium).matches(&first, &second))
        });

        group.bench_function(format!("proximity: {}", sc.name), |b| {
            b.iter(|| config.proximity().rank(&first, &second))
        });

        group.bench_function(format!("intersection: {}", sc.name), |b| {
            b.iter(|| {
                IntersectionMatcher::default()
                    .find_crossing(&first, &second)
                    .expect("diagonals must cross")
                    .meeting_point()
            })
        });
    });

    group.finish();
}

criterion::criterion_group!(targeted_benches, target_benchmark);
criterion_main!(targeted_benches);
