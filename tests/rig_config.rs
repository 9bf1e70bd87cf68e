//! Rig configuration documents.

#![cfg(feature = "serde")]

use zenfov::{RigConfig, SolveParams};

#[test]
fn partial_document_fills_defaults() {
    let config: RigConfig = toml::from_str(
        r#"
        diagonal_fov = 52.0
        surface_width = 1920
        surface_height = 1080
        horizontal_offset = 10.0
        "#,
    )
    .unwrap();

    assert_eq!(config.diagonal_fov, 52.0);
    assert_eq!(config.distance, 1.0);
    assert_eq!(config.vertical_offset, 0.0);
    assert_eq!(config.solver, SolveParams::default());

    let layout = config.layout().unwrap();
    assert!(layout.screen.is_converged());
    assert!((layout.screen.diagonal_fov() - 52.0).abs() < 0.01);
}

#[test]
fn solver_section_overrides_bracket() {
    let config: RigConfig = toml::from_str(
        r#"
        [solver]
        min_ratio = 0.5
        max_iterations = 200
        "#,
    )
    .unwrap();

    assert_eq!(config.solver.min_ratio, 0.5);
    assert_eq!(config.solver.max_ratio, 3.0);
    assert_eq!(config.solver.max_iterations, 200);
}

#[test]
fn round_trips_through_toml() {
    let config = RigConfig {
        distance: 2.5,
        vertical_offset: -4.0,
        ..RigConfig::default()
    };
    let text = toml::to_string(&config).unwrap();
    let back: RigConfig = toml::from_str(&text).unwrap();
    assert_eq!(back, config);
}
