//! Property-based tests for Poisson-disc distributions.
//!
//! Random domains, spacings and seeds must always yield:
//! - pairwise separation of at least `min_distance`
//! - every child within `2 * min_distance` of its parent
//! - containment in the domain
//! - one grid cell per emitted point

use poisson::{Config, Point, PoissonError, RngSource, Sample, Sampler};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

const EPSILON: f32 = 1e-3;

fn config_strategy() -> impl Strategy<Value = Config> {
    (5.0f32..60.0, 5.0f32..60.0, 1.0f32..6.0, 1u32..40).prop_map(
        |(width, height, min_distance, attempts)| {
            Config::new(width, height, min_distance).with_max_attempts(attempts)
        },
    )
}

fn sample_all(config: &Config, seed: u64) -> (Vec<Sample>, usize) {
    let bounds = config.clone();
    let mut sampler = Sampler::new(
        config.clone(),
        RngSource(Pcg64Mcg::seed_from_u64(seed)),
        move |p: Point| bounds.contains(p),
    )
    .expect("strategy only builds valid configs");
    let samples: Vec<Sample> = sampler
        .by_ref()
        .collect::<Result<_, PoissonError>>()
        .expect("rectangular predicate keeps points in the domain");
    (samples, sampler.grid().len())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: no pair of points is closer than `min_distance`.
    #[test]
    fn prop_min_distance(config in config_strategy(), seed in any::<u64>()) {
        let (samples, _) = sample_all(&config, seed);
        for (i, a) in samples.iter().enumerate() {
            for b in &samples[i + 1..] {
                prop_assert!(a.point.distance(&b.point) + EPSILON >= config.min_distance);
            }
        }
    }

    /// Property: children land in the annulus around their parent.
    #[test]
    fn prop_parent_gap(config in config_strategy(), seed in any::<u64>()) {
        let (samples, _) = sample_all(&config, seed);
        prop_assert!(samples[0].parent.is_none());
        for sample in &samples[1..] {
            let parent = sample.parent.expect("non-seed sample has a parent");
            let d = sample.point.distance(&parent);
            prop_assert!(d <= 2.0 * config.min_distance + EPSILON);
            prop_assert!(d + EPSILON >= config.min_distance);
        }
    }

    /// Property: every point lies in `[0, width) x [0, height)`.
    #[test]
    fn prop_containment(config in config_strategy(), seed in any::<u64>()) {
        let (samples, recorded) = sample_all(&config, seed);
        prop_assert_eq!(samples.len(), recorded);
        for sample in &samples {
            prop_assert!(config.contains(sample.point));
        }
    }

    /// Property: an explicit start point is always emitted first.
    #[test]
    fn prop_start_respected(
        config in config_strategy(),
        fx in 0.0f32..1.0,
        fy in 0.0f32..1.0,
        seed in any::<u64>(),
    ) {
        let start = Point::new(fx * config.width, fy * config.height);
        prop_assume!(config.contains(start));
        let config = config.with_start(start);
        let (samples, _) = sample_all(&config, seed);
        prop_assert_eq!(samples[0].point, start);
    }

    /// Property: the point count is bounded by the area each point reserves.
    #[test]
    fn prop_count_bounded_by_area(config in config_strategy(), seed in any::<u64>()) {
        let (samples, _) = sample_all(&config, seed);
        let r = config.min_distance / 2.0;
        // Discs of radius min_distance / 2 are disjoint and stay within the padded domain.
        let padded = (config.width + 2.0 * r) * (config.height + 2.0 * r);
        let bound = padded / (std::f32::consts::PI * r * r);
        prop_assert!(samples.len() as f32 <= bound + 1.0);
    }
}
