//! Grid generator turning a [`PlacementRule`] into placements.
use tracing::debug;

use crate::error::Result;
use crate::layout::rule::PlacementRule;
use crate::layout::Placement;
use crate::random::RandomSource;

/// Expands `rule` into one placement per grid cell, row-major.
///
/// Cell `(i, j)` sits at `origin + (j * spacing_x, i * spacing_z)` and draws exactly one
/// value from `rng` for its scale. The rule is validated before the first draw, so a
/// rejected rule leaves `rng` untouched.
pub fn generate(rule: &PlacementRule, rng: &mut dyn RandomSource) -> Result<Vec<Placement>> {
    rule.validate()?;

    let rows = rule.rows as usize;
    let cols = rule.cols as usize;

    let mut out = Vec::with_capacity(rule.cell_count());
    for i in 0..rows {
        let z = rule.origin_z + i as f32 * rule.spacing_z;
        for j in 0..cols {
            let x = rule.origin_x + j as f32 * rule.spacing_x;
            // Lerp without `max - min`, which overflows for wide finite ranges.
            let t = rng.next();
            let scale = (rule.scale_min * (1.0 - t) + rule.scale_max * t)
                .clamp(rule.scale_min, rule.scale_max);
            out.push(Placement::new(rule.kind, x, z, scale));
        }
    }

    debug!(
        "Generated {} {} placement(s) from a {}x{} grid.",
        out.len(),
        rule.kind,
        rule.rows,
        rule.cols
    );
    Ok(out)
}

/// Stateless handle over [`generate`] for callers that prefer a value to pass around.
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneLayoutGenerator;

impl SceneLayoutGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(
        &self,
        rule: &PlacementRule,
        rng: &mut dyn RandomSource,
    ) -> Result<Vec<Placement>> {
        generate(rule, rng)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::error::Error;
    use crate::layout::Kind;
    use crate::random::ScriptedSource;

    fn tree_rule() -> PlacementRule {
        PlacementRule::grid(Kind::Tree, 6, 6)
            .with_origin(-25.0, 50.0)
            .with_spacing(10.0, 10.0)
            .with_scale_range(0.9, 1.2)
    }

    #[test]
    fn tree_grid_matches_expected_layout() {
        let mut rng = StdRng::seed_from_u64(42);
        let out = generate(&tree_rule(), &mut rng).unwrap();

        assert_eq!(out.len(), 36);
        assert_eq!((out[0].x, out[0].z), (-25.0, 50.0));
        assert_eq!((out[35].x, out[35].z), (25.0, 100.0));
        for p in &out {
            assert_eq!(p.kind, Kind::Tree);
            assert!(
                (0.9..=1.2).contains(&p.scale),
                "scale {} out of range",
                p.scale
            );
        }
    }

    #[test]
    fn count_is_rows_times_cols() {
        let mut rng = StdRng::seed_from_u64(1);
        for (rows, cols) in [(1, 1), (2, 7), (5, 3), (10, 10)] {
            let rule = PlacementRule::grid(Kind::Mountain, rows, cols);
            let out = generate(&rule, &mut rng).unwrap();
            assert_eq!(out.len(), (rows * cols) as usize);
        }
    }

    #[test]
    fn positions_follow_row_major_cells() {
        let rule = PlacementRule::grid(Kind::House, 3, 4)
            .with_origin(1.0, -2.0)
            .with_spacing(2.5, 4.0);
        let mut rng = ScriptedSource::constant(0.5);
        let out = generate(&rule, &mut rng).unwrap();

        let mut seen = HashSet::new();
        for (idx, p) in out.iter().enumerate() {
            let i = idx / 4;
            let j = idx % 4;
            assert_eq!(p.x, 1.0 + j as f32 * 2.5);
            assert_eq!(p.z, -2.0 + i as f32 * 4.0);
            assert!(seen.insert((p.x.to_bits(), p.z.to_bits())));
        }
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn scripted_draws_map_linearly_onto_scale_range() {
        let rule = PlacementRule::grid(Kind::Tree, 1, 3).with_scale_range(1.0, 3.0);
        let mut rng = ScriptedSource::new([0.0, 0.5, 0.25]);
        let out = generate(&rule, &mut rng).unwrap();

        let scales: Vec<f32> = out.iter().map(|p| p.scale).collect();
        assert_eq!(scales, vec![1.0, 2.0, 1.5]);
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn scale_never_exceeds_max_for_highest_draw() {
        let rule = PlacementRule::grid(Kind::Tree, 2, 2).with_scale_range(0.9, 1.2);
        let mut rng = ScriptedSource::constant(1.0);
        for p in generate(&rule, &mut rng).unwrap() {
            assert!(p.scale <= 1.2);
        }
    }

    #[test]
    fn widest_finite_scale_range_stays_in_bounds() {
        let rule = PlacementRule::grid(Kind::Tree, 1, 2).with_scale_range(-3.0e38, 3.0e38);
        assert!(rule.validate().is_ok());
        let mut rng = ScriptedSource::new([0.0, 0.5]);
        let out = generate(&rule, &mut rng).unwrap();

        assert_eq!(out[0].scale, -3.0e38);
        assert_eq!(out[1].scale, 0.0);
        for p in &out {
            assert!(
                (-3.0e38..=3.0e38).contains(&p.scale),
                "scale {} out of range",
                p.scale
            );
        }
    }

    #[test]
    fn same_source_sequence_gives_identical_output() {
        let rule = tree_rule();
        let mut a = StdRng::seed_from_u64(123);
        let mut b = StdRng::seed_from_u64(123);
        assert_eq!(
            generate(&rule, &mut a).unwrap(),
            generate(&rule, &mut b).unwrap()
        );

        let mut s1 = ScriptedSource::new([0.1, 0.9, 0.4]);
        let mut s2 = ScriptedSource::new([0.1, 0.9, 0.4]);
        assert_eq!(
            generate(&rule, &mut s1).unwrap(),
            generate(&rule, &mut s2).unwrap()
        );
    }

    #[test]
    fn zero_rows_or_cols_yields_empty() {
        let mut rng = ScriptedSource::constant(0.3);
        assert!(generate(&PlacementRule::grid(Kind::Tree, 0, 6), &mut rng)
            .unwrap()
            .is_empty());
        assert!(generate(&PlacementRule::grid(Kind::Tree, 6, 0), &mut rng)
            .unwrap()
            .is_empty());
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn negative_rows_is_invalid_and_draws_nothing() {
        let mut rng = ScriptedSource::constant(0.3);
        let err = generate(&PlacementRule::grid(Kind::Tree, -1, 6), &mut rng).unwrap_err();
        assert!(matches!(err, Error::InvalidRule(_)));
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn inverted_scale_range_is_invalid() {
        let rule = PlacementRule::grid(Kind::Tree, 2, 2).with_scale_range(1.2, 0.9);
        let mut rng = StdRng::seed_from_u64(5);
        assert!(matches!(
            generate(&rule, &mut rng),
            Err(Error::InvalidRule(_))
        ));
    }

    #[test]
    fn generator_handle_forwards_to_free_function() {
        let rule = tree_rule();
        let mut a = ScriptedSource::new([0.2, 0.8]);
        let mut b = ScriptedSource::new([0.2, 0.8]);
        assert_eq!(
            SceneLayoutGenerator::new().generate(&rule, &mut a).unwrap(),
            generate(&rule, &mut b).unwrap()
        );
    }
}
