//! Use-Case-Funktionen für Kamera-Steuerung.

use glam::Vec2;

use crate::app::AppState;

/// Passt die Kamera auf das geöffnete Szenario ein, ohne Szenario auf Default.
pub fn reset_camera(state: &mut AppState) {
    let bounds = state.scenario().map(|scenario| scenario.map_bounds);
    match bounds {
        Some(bounds) => fit_to_bounds(state, bounds),
        None => state.view.camera = Default::default(),
    }
}

/// Zentriert auf `bounds` und wählt den Zoom so, dass alles sichtbar ist.
///
/// Ohne bekannte Viewport-Größe wird nur zentriert.
pub fn fit_to_bounds(state: &mut AppState, bounds: crate::core::Rect2) {
    let [width, height] = state.view.viewport_size;
    if width <= 0.0 || height <= 0.0 {
        state.view.camera.look_at(bounds.center());
        return;
    }

    state.view.camera.fit_to(bounds, Vec2::new(width, height));
    state.view.camera.zoom = state
        .view
        .camera
        .zoom
        .clamp(state.options.camera_zoom_min, state.options.camera_zoom_max);

    log::info!(
        "Szenario-Grenzen: ({:.1}, {:.1}) bis ({:.1}, {:.1}), Zoom: {:.3}",
        bounds.min.x,
        bounds.min.y,
        bounds.max.x,
        bounds.max.y,
        state.view.camera.zoom
    );
}

/// Zoomt die Kamera stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    state.view.camera.zoom_by(
        state.options.camera_zoom_step,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
}

/// Zoomt die Kamera stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    state.view.camera.zoom_by(
        1.0 / state.options.camera_zoom_step,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
}

/// Verschiebt die Kamera basierend auf einem Delta.
pub fn pan(state: &mut AppState, delta: Vec2) {
    state.view.camera.pan(delta);
}

/// Zoomt auf einen optionalen Fokuspunkt (Mausposition) hin.
///
/// Falls `focus_world` angegeben ist, bleibt der Welt-Punkt unter
/// der Maus nach dem Zoom stabil an derselben Bildschirmposition.
pub fn zoom_towards(state: &mut AppState, factor: f32, focus_world: Option<Vec2>) {
    let old_zoom = state.view.camera.zoom;
    state.view.camera.zoom_by(
        factor,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );

    if let Some(focus) = focus_world {
        let scale = old_zoom / state.view.camera.zoom;
        state.view.camera.position = focus + (state.view.camera.position - focus) * scale;
    }
}

/// Übernimmt einen offenen Fokuswunsch der Selektion.
pub fn apply_focus_request(state: &mut AppState) {
    if let Some(target) = state.selection.take_focus_request() {
        log::debug!("Kamera fokussiert ({:.1}, {:.1})", target.x, target.y);
        state.view.camera.look_at(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rect2;
    use approx::assert_relative_eq;

    #[test]
    fn reset_without_scenario_restores_default() {
        let mut state = AppState::new();
        state.view.camera.look_at(Vec2::new(100.0, 200.0));
        state.view.camera.zoom = 5.0;

        reset_camera(&mut state);

        assert_eq!(state.view.camera.position, Vec2::ZERO);
        assert_relative_eq!(state.view.camera.zoom, 1.0);
    }

    #[test]
    fn fit_without_viewport_only_centers() {
        let mut state = AppState::new();

        fit_to_bounds(
            &mut state,
            Rect2::from_corners(Vec2::new(0.0, 0.0), Vec2::new(200.0, 100.0)),
        );

        assert_relative_eq!(state.view.camera.position.x, 100.0);
        assert_relative_eq!(state.view.camera.position.y, 50.0);
        assert_relative_eq!(state.view.camera.zoom, 1.0);
    }

    #[test]
    fn zoom_steps_respect_option_limits() {
        let mut state = AppState::new();
        state.options.camera_zoom_max = 1.5;

        zoom_in(&mut state);
        assert_relative_eq!(state.view.camera.zoom, 1.2);
        zoom_in(&mut state);
        assert_relative_eq!(state.view.camera.zoom, 1.5);
        zoom_out(&mut state);
        assert_relative_eq!(state.view.camera.zoom, 1.25);
    }

    #[test]
    fn zoom_towards_keeps_focus_stable() {
        let mut state = AppState::new();
        let focus = Vec2::new(100.0, 0.0);

        zoom_towards(&mut state, 2.0, Some(focus));

        assert_relative_eq!(state.view.camera.zoom, 2.0);
        assert_relative_eq!(state.view.camera.position.x, 50.0);
    }

    #[test]
    fn focus_request_is_consumed_once() {
        let mut state = AppState::new();
        state.selection.request_focus(Vec2::new(7.0, -3.0));

        apply_focus_request(&mut state);
        state.view.camera.pan(Vec2::new(1.0, 0.0));
        apply_focus_request(&mut state);

        assert_relative_eq!(state.view.camera.position.x, 8.0);
        assert_relative_eq!(state.view.camera.position.y, -3.0);
    }
}
