use rand::rngs::StdRng;
use rand::SeedableRng;
use scene_layout::prelude::*;
use scene_layout_examples::{init_tracing, render_layout_to_png, RenderConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let settings = SceneSettings::farm();
    settings.validate()?;

    // Same seed, same grove.
    let plan = farm_plan();
    let mut rng = StdRng::seed_from_u64(42);
    let result = run_plan(&plan, &mut rng, None)?;

    // Stand-in for a renderer: record what would be instantiated.
    let mut scene: Vec<Placement> = Vec::with_capacity(result.len());
    let handed_over = instantiate_all(&result.placements, &mut scene);
    info!("Handed {handed_over} placement(s) to the scene graph.");

    for p in scene.iter().filter(|p| p.kind != Kind::Tree) {
        info!("{} at ({:.1}, {:.1}) scale {:.2}", p.kind, p.x, p.z, p.scale);
    }

    let rc = RenderConfig::from_scene((1000, 1000), &settings);
    render_layout_to_png(&result, &rc, "farm-layout.png")?;
    Ok(())
}
