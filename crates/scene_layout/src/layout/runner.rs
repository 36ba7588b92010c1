//! Runner for executing layout plans rule by rule.
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::layout::events::{EventSink, LayoutEvent, LayoutEventKind, PlacementSource};
use crate::layout::generator::generate;
use crate::layout::plan::LayoutPlan;
use crate::layout::Placement;
use crate::random::RandomSource;

/// Result of running a layout plan.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutResult {
    /// Placements in output order: rule output first, fixed placements last.
    pub placements: Vec<Placement>,
    /// Number of placements generated from rules.
    pub generated: usize,
    /// Number of fixed placements copied from the plan.
    pub fixed: usize,
}

impl LayoutResult {
    /// Creates a new empty [`LayoutResult`].
    pub fn new() -> Self {
        Self {
            placements: Vec::new(),
            generated: 0,
            fixed: 0,
        }
    }

    /// Sets the placements and returns a new instance.
    pub fn with_placements(mut self, placements: Vec<Placement>) -> Self {
        self.placements = placements;
        self
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

/// Convenience wrapper holding a plan to run repeatedly with different sources.
pub struct LayoutRunner<'a> {
    /// Plan executed by this runner.
    pub plan: &'a LayoutPlan,
}

impl<'a> LayoutRunner<'a> {
    /// Validates every rule of `plan` up front.
    pub fn try_new(plan: &'a LayoutPlan) -> Result<Self> {
        validate_plan(plan)?;
        Ok(Self { plan })
    }

    /// Runs the plan, returning the result.
    pub fn run(&mut self, rng: &mut dyn RandomSource) -> Result<LayoutResult> {
        run_plan(self.plan, rng, None)
    }

    pub fn run_with_events(
        &mut self,
        rng: &mut dyn RandomSource,
        sink: &mut dyn EventSink,
    ) -> Result<LayoutResult> {
        run_plan_with_events(self.plan, rng, sink)
    }
}

fn validate_plan(plan: &LayoutPlan) -> Result<()> {
    for (index, rule) in plan.rules.iter().enumerate() {
        rule.validate().map_err(|e| match e {
            Error::InvalidRule(msg) => Error::InvalidRule(format!("rule {index}: {msg}")),
            other => other,
        })?;
    }
    Ok(())
}

pub fn run_plan(
    plan: &LayoutPlan,
    rng: &mut dyn RandomSource,
    sink: Option<&mut dyn EventSink>,
) -> Result<LayoutResult> {
    if let Some(s) = sink {
        run_plan_with_events(plan, rng, s)
    } else {
        run_plan_with_events(plan, rng, &mut ())
    }
}

/// Runs `plan`, reporting progress to `sink`.
///
/// All rules are validated before anything is generated or emitted, so an invalid plan
/// returns [`Error::InvalidRule`] without events and without consuming randomness.
pub fn run_plan_with_events(
    plan: &LayoutPlan,
    rng: &mut dyn RandomSource,
    sink: &mut dyn EventSink,
) -> Result<LayoutResult> {
    validate_plan(plan)?;

    if sink.wants(LayoutEventKind::RunStarted) {
        sink.send(LayoutEvent::RunStarted {
            rule_count: plan.rules.len(),
            fixed_count: plan.fixed.len(),
        });
    }

    if plan.is_empty() {
        warn!("Layout plan has no rules and no fixed placements.");
        if sink.wants(LayoutEventKind::Warning) {
            sink.send(LayoutEvent::Warning {
                context: "plan".into(),
                message: "Layout plan has no rules and no fixed placements".into(),
            });
        }
    }

    let mut placements: Vec<Placement> = Vec::with_capacity(plan.expected_len());

    for (index, rule) in plan.rules.iter().enumerate() {
        let cells = rule.cell_count();
        info!(
            "Rule {}: {} | grid: {}x{} | cells: {}.",
            index, rule.kind, rule.rows, rule.cols, cells
        );

        if sink.wants(LayoutEventKind::RuleStarted) {
            sink.send(LayoutEvent::RuleStarted {
                index,
                kind: rule.kind,
                cells,
            });
        }

        if cells == 0 {
            warn!("Rule {} ({}) has an empty grid; nothing placed.", index, rule.kind);
            if sink.wants(LayoutEventKind::Warning) {
                sink.send(LayoutEvent::Warning {
                    context: format!("rule:{index}"),
                    message: format!("Rule has an empty {}x{} grid", rule.rows, rule.cols),
                });
            }
        }

        let generated = generate(rule, rng)?;
        if sink.wants(LayoutEventKind::PlacementMade) {
            for placement in &generated {
                sink.send(LayoutEvent::PlacementMade {
                    source: PlacementSource::Rule(index),
                    placement: *placement,
                });
            }
        }

        if sink.wants(LayoutEventKind::RuleFinished) {
            sink.send(LayoutEvent::RuleFinished {
                index,
                kind: rule.kind,
                placed: generated.len(),
            });
        }
        placements.extend(generated);
    }

    let generated_count = placements.len();

    for (index, placement) in plan.fixed.iter().enumerate() {
        if sink.wants(LayoutEventKind::PlacementMade) {
            sink.send(LayoutEvent::PlacementMade {
                source: PlacementSource::Fixed(index),
                placement: *placement,
            });
        }
        placements.push(*placement);
    }

    let result = LayoutResult {
        placements,
        generated: generated_count,
        fixed: plan.fixed.len(),
    };

    info!(
        "Layout finished: {} placement(s) ({} generated, {} fixed).",
        result.len(),
        result.generated,
        result.fixed
    );

    if sink.wants(LayoutEventKind::RunFinished) {
        sink.send(LayoutEvent::RunFinished {
            result: result.clone(),
        });
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::layout::events::VecSink;
    use crate::layout::rule::PlacementRule;
    use crate::layout::Kind;
    use crate::random::ScriptedSource;

    fn small_plan() -> LayoutPlan {
        LayoutPlan::new()
            .with_rule(PlacementRule::grid(Kind::Tree, 2, 2).with_scale_range(0.5, 1.5))
            .with_rule(PlacementRule::grid(Kind::Mountain, 1, 3).with_spacing(20.0, 0.0))
            .with_fixed(Placement::new(Kind::House, 10.0, -10.0, 1.0))
    }

    #[test]
    fn rules_come_first_then_fixed() {
        let mut rng = StdRng::seed_from_u64(42);
        let result = run_plan(&small_plan(), &mut rng, None).unwrap();

        assert_eq!(result.len(), 8);
        assert_eq!(result.generated, 7);
        assert_eq!(result.fixed, 1);
        let kinds: Vec<Kind> = result.placements.iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            vec![
                Kind::Tree,
                Kind::Tree,
                Kind::Tree,
                Kind::Tree,
                Kind::Mountain,
                Kind::Mountain,
                Kind::Mountain,
                Kind::House
            ]
        );
        assert_eq!(
            result.placements[7],
            Placement::new(Kind::House, 10.0, -10.0, 1.0)
        );
    }

    #[test]
    fn invalid_rule_aborts_without_events_or_draws() {
        let plan = small_plan().with_rule(PlacementRule::grid(Kind::Tree, -1, 2));
        let mut rng = ScriptedSource::constant(0.5);
        let mut sink = VecSink::new();

        let err = run_plan_with_events(&plan, &mut rng, &mut sink).unwrap_err();
        assert!(matches!(err, Error::InvalidRule(ref m) if m.starts_with("rule 2:")));
        assert!(sink.is_empty());
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn events_follow_run_structure() {
        let mut rng = ScriptedSource::constant(0.0);
        let mut sink = VecSink::new();
        run_plan_with_events(&small_plan(), &mut rng, &mut sink).unwrap();

        let events = sink.into_inner();
        assert!(matches!(
            events.first(),
            Some(LayoutEvent::RunStarted {
                rule_count: 2,
                fixed_count: 1
            })
        ));
        assert!(matches!(events.last(), Some(LayoutEvent::RunFinished { .. })));

        let started: Vec<usize> = events
            .iter()
            .filter_map(|e| match e {
                LayoutEvent::RuleStarted { index, .. } => Some(*index),
                _ => None,
            })
            .collect();
        assert_eq!(started, vec![0, 1]);

        let sources: Vec<PlacementSource> = events
            .iter()
            .filter_map(|e| match e {
                LayoutEvent::PlacementMade { source, .. } => Some(*source),
                _ => None,
            })
            .collect();
        assert_eq!(sources.len(), 8);
        assert_eq!(sources[0], PlacementSource::Rule(0));
        assert_eq!(sources[4], PlacementSource::Rule(1));
        assert_eq!(sources[7], PlacementSource::Fixed(0));
    }

    #[test]
    fn empty_grid_and_empty_plan_warn() {
        let mut rng = ScriptedSource::constant(0.0);

        let mut sink = VecSink::new().only([LayoutEventKind::Warning]);
        let plan = LayoutPlan::new().with_rule(PlacementRule::grid(Kind::Tree, 0, 4));
        let result = run_plan_with_events(&plan, &mut rng, &mut sink).unwrap();
        assert!(result.is_empty());
        assert!(matches!(
            sink.as_slice(),
            [LayoutEvent::Warning { context, .. }] if context == "rule:0"
        ));

        let mut sink = VecSink::new().only([LayoutEventKind::Warning]);
        run_plan_with_events(&LayoutPlan::new(), &mut rng, &mut sink).unwrap();
        assert!(matches!(
            sink.as_slice(),
            [LayoutEvent::Warning { context, .. }] if context == "plan"
        ));
    }

    #[test]
    fn runner_is_deterministic_for_same_seed() {
        let plan = small_plan();
        let mut runner = LayoutRunner::try_new(&plan).unwrap();
        let a = runner.run(&mut StdRng::seed_from_u64(7)).unwrap();
        let b = runner.run(&mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn runner_rejects_invalid_plan_up_front() {
        let plan = LayoutPlan::new()
            .with_rule(PlacementRule::grid(Kind::Tree, 1, 1).with_scale_range(3.0, 1.0));
        assert!(matches!(
            LayoutRunner::try_new(&plan),
            Err(Error::InvalidRule(_))
        ));
    }
}
