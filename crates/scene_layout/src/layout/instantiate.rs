//! Seam between generated placements and the rendering collaborator.
//!
//! The scene graph is always passed in explicitly; nothing here holds global scene state.
use crate::layout::Placement;

/// Receives placements and turns them into visual objects.
pub trait SceneGraph {
    fn instantiate(&mut self, placement: &Placement);
}

/// Recording scene graph, useful for headless tools and tests.
impl SceneGraph for Vec<Placement> {
    fn instantiate(&mut self, placement: &Placement) {
        self.push(*placement);
    }
}

/// Hands every placement to `scene` once, in order. Returns the number handed over.
pub fn instantiate_all<S>(placements: &[Placement], scene: &mut S) -> usize
where
    S: SceneGraph + ?Sized,
{
    for placement in placements {
        scene.instantiate(placement);
    }
    placements.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Kind;

    #[test]
    fn vec_scene_records_in_order() {
        let placements = vec![
            Placement::new(Kind::Tree, 0.0, 0.0, 1.0),
            Placement::new(Kind::House, 5.0, 5.0, 1.0),
        ];
        let mut scene: Vec<Placement> = Vec::new();
        assert_eq!(instantiate_all(&placements, &mut scene), 2);
        assert_eq!(scene, placements);
    }

    struct CountingScene {
        calls: usize,
    }

    impl SceneGraph for CountingScene {
        fn instantiate(&mut self, _placement: &Placement) {
            self.calls += 1;
        }
    }

    #[test]
    fn scene_is_called_once_per_placement() {
        let placements = vec![Placement::new(Kind::Mountain, -30.0, -20.0, 8.0); 3];
        let mut scene = CountingScene { calls: 0 };
        instantiate_all(&placements, &mut scene);
        assert_eq!(scene.calls, 3);
    }

    #[test]
    fn works_through_trait_object() {
        let placements = vec![Placement::new(Kind::Tree, 1.0, 2.0, 1.1)];
        let mut recorded: Vec<Placement> = Vec::new();
        let scene: &mut dyn SceneGraph = &mut recorded;
        instantiate_all(&placements, scene);
        assert_eq!(recorded.len(), 1);
    }
}
