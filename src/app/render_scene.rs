//! Builder für Render-Szenen aus dem AppState.

use glam::Vec2;

use crate::app::AppState;
use crate::shared::{ActorDot, ActorShape, CameraOutline, PaintOption, RenderScene};

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Alles außerhalb des sichtbaren Weltausschnitts wird verworfen.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
    let camera = state.view.camera.clone();
    let Some(scenario) = state.scenario() else {
        return RenderScene {
            camera,
            viewport_size,
            ..Default::default()
        };
    };

    let options = &state.options;
    let view = camera.visible_rect(Vec2::from(viewport_size));

    let map_areas = if options.paint_geometry {
        scenario.map_geometry.visible_areas(&view).cloned().collect()
    } else {
        Vec::new()
    };

    let cameras = scenario
        .collision_cameras
        .values()
        .filter(|c| c.is_visible(options.paint_collision_cameras))
        .filter(|c| c.bounds().intersects(&view))
        .filter_map(|c| {
            Some(CameraOutline {
                name: c.name().to_string(),
                polygons: c.polygons().to_vec(),
                label_anchor: c.label_anchor()?,
            })
        })
        .collect();

    // Shapes: nur gecheckte Actors; selektierte unabhängig von der Zeichen-Option
    let mut shapes = Vec::new();
    for (reference, actor_shapes) in &scenario.shapes {
        let Some(actor) = scenario.get_actor(reference) else {
            continue;
        };
        if !actor.is_checked() {
            continue;
        }
        let selected = actor.is_selected();
        shapes.extend(
            actor_shapes
                .iter()
                .filter(|s| selected || options.paint(PaintOption::for_category(s.category())))
                .filter(|s| s.primitive.bounds().intersects(&view))
                .map(|s| ActorShape {
                    shape: s.clone(),
                    kind: actor.layer_kind(),
                    selected,
                    hovered: actor.is_hovered(),
                }),
        );
    }

    let actors = scenario
        .actors
        .values()
        .filter(|actor| actor.is_checked())
        .filter_map(|actor| {
            let rect = actor.dot_rect();
            rect.intersects(&view).then(|| ActorDot {
                actor: actor.reference().clone(),
                rect,
                kind: actor.layer_kind(),
                selected: actor.is_selected(),
                hovered: actor.is_hovered(),
            })
        })
        .collect();

    RenderScene {
        camera,
        viewport_size,
        bounds: scenario.map_bounds,
        map_areas,
        cameras,
        shapes,
        actors,
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::test_support::{entity, light, loaded_state, CAMERA};
    use crate::app::AppState;
    use crate::core::SelectionChange;

    fn overview() -> AppState {
        let mut state = loaded_state();
        state.view.camera.look_at(glam::Vec2::new(500.0, 250.0));
        state.view.camera.zoom = 4.0;
        state
    }

    #[test]
    fn empty_state_has_no_scenario() {
        let state = AppState::new();

        let scene = build(&state, [1280.0, 720.0]);

        assert!(!scene.has_scenario());
        assert!(scene.actors.is_empty());
    }

    #[test]
    fn only_checked_actors_get_dots() {
        let state = overview();
        state
            .rom
            .get_actor(&light("lamp_001"))
            .expect("Actor")
            .set_checked(false);

        let scene = build(&state, [800.0, 600.0]);

        assert!(scene.has_scenario());
        let names: Vec<_> = scene.actors.iter().map(|d| d.actor.name.as_str()).collect();
        assert_eq!(names, vec!["door_001", "switch_001"]);
    }

    #[test]
    fn dots_outside_view_are_culled() {
        let mut state = loaded_state();
        state.view.camera.look_at(glam::Vec2::ZERO);

        let scene = build(&state, [800.0, 600.0]);

        assert!(scene.actors.iter().all(|d| d.actor.name != "switch_001"));
        assert!(scene.actors.iter().any(|d| d.actor.name == "door_001"));
    }

    #[test]
    fn dot_flags_follow_actor_state() {
        let state = overview();
        state
            .rom
            .get_actor(&entity("door_001"))
            .expect("Actor")
            .set_selected(SelectionChange::Select);

        let scene = build(&state, [800.0, 600.0]);

        let door = scene
            .actors
            .iter()
            .find(|d| d.actor == entity("door_001"))
            .expect("Punkt");
        assert!(door.selected);
        assert!(!door.hovered);
    }

    #[test]
    fn cameras_follow_paint_option_and_expansion() {
        let mut state = overview();

        assert_eq!(build(&state, [800.0, 600.0]).cameras.len(), 1);

        state.options.paint_collision_cameras = false;
        assert!(build(&state, [800.0, 600.0]).cameras.is_empty());

        state
            .scenario()
            .and_then(|s| s.collision_camera(CAMERA))
            .expect("Kamera")
            .request_enable();
        assert_eq!(build(&state, [800.0, 600.0]).cameras[0].name, CAMERA);
    }

    #[test]
    fn geometry_toggle_hides_map_areas() {
        let mut state = overview();

        assert_eq!(build(&state, [800.0, 600.0]).map_areas.len(), 1);

        state.options.paint_geometry = false;
        assert!(build(&state, [800.0, 600.0]).map_areas.is_empty());
    }
}
