//! Test support library
//! Provides helper functions shared by the integration tests.
#![allow(dead_code)]

use csgrs::float_types::Real;
use csgrs::mesh::polygon::Polygon;
use fitment_tester::{FitmentConfig, NominalSize};

/// Returns the approximate bounding box
/// `[min_x, min_y, min_z, max_x, max_y, max_z]` for a set of polygons.
pub fn bounding_box<S: Clone + Send + Sync + std::fmt::Debug>(polygons: &[Polygon<S>]) -> [Real; 6] {
    let mut bb = [
        Real::MAX,
        Real::MAX,
        Real::MAX,
        Real::MIN,
        Real::MIN,
        Real::MIN,
    ];
    for poly in polygons {
        for v in &poly.vertices {
            let p = v.pos;
            bb[0] = bb[0].min(p.x);
            bb[1] = bb[1].min(p.y);
            bb[2] = bb[2].min(p.z);
            bb[3] = bb[3].max(p.x);
            bb[4] = bb[4].max(p.y);
            bb[5] = bb[5].max(p.z);
        }
    }
    bb
}

pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// A small artifact used across the integration tests: two nominal sizes
/// against three deltas on an 18 mm pitch.
pub fn scenario_config() -> FitmentConfig {
    FitmentConfig {
        sizes: vec![NominalSize::new(6.0, "6mm"), NominalSize::new(10.0, "10mm")],
        deltas: vec![-0.2, 0.0, 0.2],
        spacing: 18.0,
        plate_thickness: 10.0,
        ..FitmentConfig::default()
    }
}
