//! Property-based invariant tests for the spirograph core.
//!
//! 1. Angle lookups are periodic with the table resolution.
//! 2. The raised cosine stays within [0, 1] for any position.
//! 3. Envelope offsets lie in [0, 1), in-phase group first, then ascending.
//! 4. Every frame has exactly one point per base angle.
//! 5. A lone base-circle element traces a circle of the element radius.

use glam::Vec2;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use spiromorph::params::{RenderConfig, SpiroConfig};
use spiromorph::spiro::{envelope_offsets, AngleTable, Element, FrameEvaluator, SpiroSystem};

// ── Helpers ─────────────────────────────────────────────────────────────

fn resolution_strategy() -> impl Strategy<Value = usize> {
    (8u32..=13).prop_map(|shift| 1usize << shift)
}

fn config_strategy() -> impl Strategy<Value = SpiroConfig> {
    (1usize..=8, 1u32..=12, 8u32..=11, 0.0f32..2.0, 0.1f32..3.0)
        .prop_flat_map(|(count, fmax, shift, speed, amplitude)| {
            (1usize..=count).prop_map(move |in_phase| SpiroConfig {
                element_count: count,
                envelopes_in_phase: in_phase,
                max_element_frequency: fmax,
                angular_resolution: 1 << shift,
                envelope_speed: speed,
                amplitude_scale: amplitude,
            })
        })
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Periodicity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn lookup_is_periodic(resolution in resolution_strategy(), brads in -1_000_000i64..1_000_000, turns in -50i64..50) {
        let table = AngleTable::new(resolution);
        let shifted = brads + turns * resolution as i64;
        prop_assert_eq!(table.wrap(brads), table.wrap(shifted));
        prop_assert!(table.wrap(brads) < resolution);
        prop_assert_eq!(table.sin(table.wrap(brads)), table.sin(table.wrap(brads + resolution as i64)));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Raised cosine range
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn raised_cosine_in_unit_range(resolution in resolution_strategy(), position in -10.0f32..10.0) {
        let value = AngleTable::new(resolution).raised_cosine(position);
        prop_assert!((0.0..=1.0).contains(&value), "shape({}) = {}", position, value);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Envelope offsets
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn envelope_offsets_are_staggered(count in 1usize..64, in_phase_seed in 0usize..64) {
        let in_phase = 1 + in_phase_seed % count;
        let offsets = envelope_offsets(count, in_phase);

        prop_assert_eq!(offsets.len(), count);
        prop_assert!(offsets.iter().all(|o| (0.0..1.0).contains(o)));
        prop_assert!(offsets[..in_phase].iter().all(|&o| o == 0.0));
        prop_assert!(offsets[in_phase - 1..].windows(2).all(|w| w[1] > w[0]));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Frame length
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn frame_has_one_point_per_angle(config in config_strategy(), seed in any::<u64>(), dt in 0.0f32..1.0) {
        prop_assert!(config.validate().is_ok());

        let mut system = SpiroSystem::new(&config, &RenderConfig::default());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for _ in 0..3 {
            let frame = system.update(dt, &mut rng);
            prop_assert_eq!(frame.points.len(), config.angular_resolution);
            prop_assert_eq!(frame.colors.len(), config.angular_resolution);
            prop_assert!(frame.points.iter().all(|p| p.is_finite()));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Base circle
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn base_element_traces_circle(
        resolution in resolution_strategy(),
        radius in 1.0f32..2000.0,
        cx in 0.0f32..2000.0,
        cy in 0.0f32..2000.0,
    ) {
        let angles = AngleTable::new(resolution);
        let center = Vec2::new(cx, cy);
        let evaluator = FrameEvaluator::new(center, radius);

        let mut points = Vec::new();
        evaluator.trace(&[Element::default()], &angles, &mut points);

        let tolerance = radius * 1e-4 + 1e-2;
        for point in points {
            prop_assert!((point.distance(center) - radius).abs() < tolerance);
        }
    }
}
