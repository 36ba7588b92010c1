use scene_layout::prelude::*;
use scene_layout_examples::init_tracing;
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // A scripted source makes the jitter reproducible without a seed.
    let mut source = ScriptedSource::new([0.0, 0.25, 0.5, 0.75]);

    let plan = LayoutPlan::new()
        .with_rule(farm_tree_rule())
        .with_rule(PlacementRule::grid(Kind::House, 0, 3));

    let mut sink = FnSink::new(|event| match event {
        LayoutEvent::RuleStarted { index, kind, cells } => {
            info!("rule {index}: expanding {cells} {kind} cell(s)");
        }
        LayoutEvent::RuleFinished { index, placed, .. } => {
            info!("rule {index}: placed {placed}");
        }
        LayoutEvent::Warning { context, message } => warn!("[{context}] {message}"),
        _ => {}
    });
    let result = run_plan_with_events(&plan, &mut source, &mut sink)?;

    let (min, max) = result
        .placements
        .iter()
        .fold((f32::MAX, f32::MIN), |(lo, hi), p| {
            (lo.min(p.scale), hi.max(p.scale))
        });
    info!(
        "{} placement(s), scales in [{min:.3}, {max:.3}], {} draw(s).",
        result.len(),
        source.draws()
    );

    // A malformed rule is reported, not silently skipped.
    let broken = LayoutPlan::new().with_rule(PlacementRule::grid(Kind::Tree, -1, 6));
    if let Err(err) = run_plan(&broken, &mut source, None) {
        warn!("rejected: {err}");
    }

    Ok(())
}
