#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    use glam::Vec3;

    use crate::commands::ViewerCommand;
    use crate::components::{Button, ButtonAction};
    use crate::config::{ButtonConfig, ConfigError, ViewerConfig};
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::ViewerEvent;
    use crate::types::{Aabb, FrameTime};

    #[test]
    fn test_default_config_is_valid() {
        let config = ViewerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.buttons.len(), 4);
        assert_eq!(config.panoramas.len(), DEFAULT_PANORAMAS.len());

        // Buttons are laid out left to right, centered on the console.
        let xs: Vec<f32> = config.buttons.iter().map(|b| b.position.x).collect();
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
        let center = xs.iter().sum::<f32>() / xs.len() as f32;
        assert!(center.abs() < 1e-6, "layout should be centered, got {center}");
    }

    #[test]
    fn test_config_json_defaults_fill_tuning() {
        let json = r#"{
            "panoramas": ["a.jpg", "b.jpg"],
            "buttons": [
                { "kind": "NextPanorama", "position": [0.1, 0.0, 0.0] }
            ]
        }"#;
        let config = ViewerConfig::from_json(json).unwrap();
        let button = &config.buttons[0];
        assert_eq!(button.kind, ButtonKind::NextPanorama);
        assert_eq!(button.surface_y, BUTTON_SURFACE_Y);
        assert_eq!(button.recovery_speed, BUTTON_RECOVERY_SPEED);
        assert_eq!(button.full_press_distance, BUTTON_FULL_PRESS_DISTANCE);
        assert_eq!(button.press_sound, None);
        assert_eq!(
            config.console_offset,
            Vec3::from_array(CONSOLE_CALIBRATION_OFFSET)
        );
    }

    #[test]
    fn test_config_rejects_non_positive_full_press_distance() {
        let mut config = ViewerConfig::default();
        config.buttons[2].full_press_distance = 0.0;
        match config.validate() {
            Err(ConfigError::InvalidButton { index, field, .. }) => {
                assert_eq!(index, 2);
                assert_eq!(field, "full_press_distance");
            }
            other => panic!("expected InvalidButton, got {other:?}"),
        }
    }

    #[test]
    fn test_config_rejects_negative_recovery_and_flat_extents() {
        let mut button = ButtonConfig::new(ButtonKind::ExitSession, Vec3::ZERO);
        button.recovery_speed = -1.0;
        assert!(matches!(
            button.validate(0),
            Err(ConfigError::InvalidButton {
                field: "recovery_speed",
                ..
            })
        ));

        let mut button = ButtonConfig::new(ButtonKind::ExitSession, Vec3::ZERO);
        button.half_extents = Vec3::new(0.02, 0.0, 0.02);
        assert_eq!(
            button.validate(3),
            Err(ConfigError::InvalidExtents { index: 3 })
        );
    }

    #[test]
    fn test_config_parse_error_is_reported() {
        let err = ViewerConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse viewer config"));
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = ViewerConfig::default();
        let json = config.to_json_pretty().unwrap();
        let back = ViewerConfig::from_json(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    #[should_panic(expected = "full_press_distance must be positive")]
    fn test_button_new_asserts_full_press_distance() {
        let _ = Button::new(0.05, 1.0, 0.0);
    }

    #[test]
    #[should_panic(expected = "recovery_speed must be non-negative")]
    fn test_button_new_asserts_recovery_speed() {
        let _ = Button::new(0.05, -0.1, 0.02);
    }

    #[test]
    fn test_button_starts_resting_and_unbound() {
        let button = Button::new(0.05, 1.0, 0.02);
        assert_eq!(button.curr_state, ButtonState::Resting);
        assert_eq!(button.prev_state, ButtonState::Resting);
        assert_eq!(button.resting_y, None);
        assert_eq!(button.full_press_y(), None);
        assert!(button.press_sound.is_none());
        assert!(!button.action.is_bound());
    }

    #[test]
    fn test_button_action_default_is_noop_and_bound_action_runs() {
        let mut noop = ButtonAction::default();
        noop.invoke();
        assert!(!noop.is_bound());

        let count = Arc::new(AtomicU32::new(0));
        let counter = count.clone();
        let mut action = ButtonAction::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        action.invoke();
        action.invoke();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_button_state_contact() {
        assert!(ButtonState::Pressed.is_in_contact());
        assert!(ButtonState::FullyPressed.is_in_contact());
        assert!(!ButtonState::Resting.is_in_contact());
        assert!(!ButtonState::Recovering.is_in_contact());
    }

    #[test]
    fn test_command_from_button_kind() {
        assert_eq!(
            ViewerCommand::from(ButtonKind::NextPanorama),
            ViewerCommand::NextPanorama
        );
        assert_eq!(
            ViewerCommand::from(ButtonKind::ExitSession),
            ViewerCommand::ExitSession
        );
    }

    #[test]
    fn test_event_serializes_with_type_tag() {
        let event = ViewerEvent::ButtonFullyPressed {
            entity: 7,
            kind: Some(ButtonKind::NextPanorama),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"ButtonFullyPressed""#), "{json}");
        assert!(json.contains(r#""kind":"NextPanorama""#), "{json}");
    }

    #[test]
    fn test_frame_time_advance() {
        let mut time = FrameTime::default();
        time.advance(0.016, 0.016);
        time.advance(-1.0, 0.030);
        assert_eq!(time.frame, 2);
        assert_eq!(time.delta_secs, 0.0, "negative delta should clamp to zero");
        assert_eq!(time.elapsed_secs, 0.030);

        time.advance(f32::NAN, f64::NAN);
        assert_eq!(time.delta_secs, 0.0);
        assert_eq!(time.elapsed_secs, 0.030, "non-finite elapsed is ignored");
    }

    #[test]
    fn test_aabb_sphere_overlap() {
        let bounds = Aabb::from_center(Vec3::ZERO, Vec3::splat(0.01));
        assert!(bounds.intersects_sphere(Vec3::ZERO, 0.001), "center inside");
        assert!(bounds.intersects_sphere(Vec3::new(0.0, 0.015, 0.0), 0.006));
        assert!(!bounds.intersects_sphere(Vec3::new(0.0, 0.015, 0.0), 0.004));
        assert!(!bounds.intersects_sphere(Vec3::new(0.02, 0.02, 0.0), 0.01));
    }
}
