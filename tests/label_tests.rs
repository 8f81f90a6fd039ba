mod support;

use csgrs::float_types::Real;
use fitment_tester::PartAttributes;
use fitment_tester::labels::{column_labels, format_delta, plate_labels, row_labels};
use support::{approx_eq, bounding_box, scenario_config};

#[test]
fn deltas_format_with_explicit_sign() {
    assert_eq!(format_delta(0.0), "+0");
    assert_eq!(format_delta(-0.0), "+0");
    assert_eq!(format_delta(0.1), "+0.1");
    assert_eq!(format_delta(0.6), "+0.6");
    assert_eq!(format_delta(-0.2), "-0.2");
}

#[test]
fn row_labels_line_up_with_their_rows() {
    let config = scenario_config();
    let labels = row_labels(&config);
    assert_eq!(labels.len(), 2);

    for (row, label) in labels.iter().enumerate() {
        let bb = bounding_box(&label.polygons);
        let center_x = (bb[0] + bb[3]) / 2.0;
        let center_y = (bb[1] + bb[4]) / 2.0;
        assert!(approx_eq(center_x, -config.margin / 4.0, 1e-6));
        assert!(approx_eq(
            center_y,
            (row as Real + 0.5) * config.spacing,
            1e-6
        ));
        assert!(approx_eq(bb[2], config.plate_thickness, 1e-6), "on the plate");
        assert!(approx_eq(bb[5], config.plate_thickness + config.text_depth, 1e-6));
    }
}

#[test]
fn column_labels_line_up_with_their_columns() {
    let config = scenario_config();
    let labels = column_labels(&config);
    assert_eq!(labels.len(), 3);

    for (col, label) in labels.iter().enumerate() {
        let bb = bounding_box(&label.polygons);
        let center_x = (bb[0] + bb[3]) / 2.0;
        let center_y = (bb[1] + bb[4]) / 2.0;
        assert!(approx_eq(
            center_x,
            (col as Real + 0.5) * config.spacing,
            1e-6
        ));
        assert!(approx_eq(center_y, 0.0, 1e-6), "at the grid's bottom edge");
        assert!(approx_eq(bb[2], config.plate_thickness, 1e-6));
    }
}

#[test]
fn plate_labels_combine_into_one_colorized_solid() {
    let config = scenario_config();
    let combined = plate_labels(&config);
    assert!(!combined.polygons.is_empty());

    let expected = PartAttributes {
        color: config.text_color,
    };
    for polygon in &combined.polygons {
        assert_eq!(polygon.metadata(), Some(&expected));
    }
}
