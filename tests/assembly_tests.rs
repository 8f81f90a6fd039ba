mod support;

use fitment_tester::{ConfigError, FitmentConfig, NominalSize, generate};
use support::{approx_eq, bounding_box, scenario_config};

#[test]
fn default_configuration_is_valid() {
    assert!(FitmentConfig::default().validate().is_ok());
}

#[test]
fn produces_four_named_parts_in_order() {
    let parts = generate(&scenario_config()).unwrap();
    let names: Vec<_> = parts.iter().map(|p| p.name).collect();
    assert_eq!(
        names,
        vec!["plate", "plate_labels", "cylinders", "cylinder_labels"]
    );
    for part in &parts {
        assert!(!part.solid.polygons.is_empty(), "{} is non-empty", part.name);
    }
}

#[test]
fn scenario_parts_land_where_expected() {
    let config = scenario_config();
    let parts = generate(&config).unwrap();

    // plate: 54 x 36 grid plus margin on the labeled sides
    let plate_bb = bounding_box(&parts[0].solid.polygons);
    assert!(approx_eq(plate_bb[0], -config.margin, 1e-9));
    assert!(approx_eq(plate_bb[3], 54.0, 1e-9));
    assert!(approx_eq(plate_bb[1], -config.margin, 1e-9));
    assert!(approx_eq(plate_bb[4], 36.0, 1e-9));

    // pegs: one grid unit left of the plate, radii 3 and 5
    let cylinders_bb = bounding_box(&parts[2].solid.polygons);
    assert!(approx_eq(cylinders_bb[0], -config.spacing - 5.0, 1e-9));
    assert!(approx_eq(cylinders_bb[3], -config.spacing + 5.0, 1e-9));
    assert!(approx_eq(cylinders_bb[1], 6.0, 1e-9));
    assert!(approx_eq(cylinders_bb[4], 32.0, 1e-9));
    assert!(approx_eq(cylinders_bb[5], config.peg_height, 1e-9));
}

#[test]
fn generation_is_deterministic() {
    let config = scenario_config();
    let first = generate(&config).unwrap();
    let second = generate(&config).unwrap();

    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.name, b.name);
        assert_eq!(a.solid.polygons.len(), b.solid.polygons.len());
        assert_eq!(
            bounding_box(&a.solid.polygons),
            bounding_box(&b.solid.polygons)
        );
    }
}

#[test]
fn rejects_non_positive_spacing() {
    let mut config = scenario_config();
    config.spacing = 0.0;
    let err = generate(&config).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::NonPositiveParameter { name: "spacing", .. }
    ));
}

#[test]
fn rejects_non_positive_text_depth() {
    let mut config = scenario_config();
    config.text_depth = 0.0;
    let err = generate(&config).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::NonPositiveParameter { name: "text_depth", .. }
    ));
}

#[test]
fn rejects_non_positive_diameter() {
    let mut config = scenario_config();
    config.sizes.push(NominalSize::new(-1.0, "bogus"));
    let err = generate(&config).unwrap_err();
    assert!(matches!(err, ConfigError::NonPositiveDiameter { .. }));
}

#[test]
fn rejects_delta_that_closes_a_hole() {
    let mut config = scenario_config();
    config.deltas.push(-7.0); // 6 mm nominal - 7 mm delta: no hole left
    let err = generate(&config).unwrap_err();
    assert!(matches!(err, ConfigError::DegenerateHole { .. }));
}

#[test]
fn rejects_negative_margin() {
    let mut config = scenario_config();
    config.margin = -1.0;
    let err = generate(&config).unwrap_err();
    assert!(matches!(err, ConfigError::NegativeMargin { .. }));
}
