//! Text-to-solid conversion.
//!
//! Labels start as skeletal stroke polylines from [`crate::glyphs`]. Each
//! polyline is fattened into a 2D outline by placing a disc of radius
//! `line_width / 2` at every vertex and convex-hulling consecutive disc
//! pairs, the same trick a pen of that width tracing the skeleton would
//! produce. The hulls are unioned into one flat sketch, extruded to a thin
//! solid, colorized, and centered on the X/Y plane (the extrusion base stays
//! at z = 0 so the label sits flush on whatever surface it is placed on).

use crate::glyphs;
use crate::parts::{Solid, colorize};
use csgrs::float_types::{Real, TAU};
use csgrs::sketch::Sketch;
use csgrs::traits::CSG;
use geo::{ConvexHull, MultiPoint, Point as GeoPoint};
use nalgebra::Point2;

/// Resolution of the discs placed along each stroke
const DISC_SEGMENTS: usize = 16;

/// Everything about label text that is shared across one artifact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Cap height of the glyphs
    pub glyph_height: Real,
    /// Annotation color, RGB in [0, 1]
    pub color: [Real; 3],
}

/// Sample points of a disc around `center`.
fn disc_points(center: Point2<Real>, radius: Real) -> Vec<GeoPoint<Real>> {
    (0..DISC_SEGMENTS)
        .map(|i| {
            let theta = TAU * (i as Real) / (DISC_SEGMENTS as Real);
            GeoPoint::new(
                center.x + radius * theta.cos(),
                center.y + radius * theta.sin(),
            )
        })
        .collect()
}

/// Convex hull of the discs around two consecutive stroke vertices: a
/// capsule-shaped outline of the pen path between them.
fn hull_pair(a: Point2<Real>, b: Point2<Real>, radius: Real) -> Sketch<crate::PartAttributes> {
    let mut points = disc_points(a, radius);
    points.extend(disc_points(b, radius));
    let hull = MultiPoint::from(points).convex_hull();
    // the exterior ring repeats its first coordinate at the end; drop it
    let mut ring: Vec<[Real; 2]> = hull.exterior().coords().map(|c| [c.x, c.y]).collect();
    ring.pop();
    Sketch::polygon(&ring, None)
}

/// Fattens one stroke polyline into a flat 2D solid of the given pen width.
///
/// A single-vertex polyline degenerates to one disc (used for dots).
fn fatten_polyline(points: &[Point2<Real>], line_width: Real) -> Sketch<crate::PartAttributes> {
    let radius = line_width / 2.0;
    if points.len() == 1 {
        let ring: Vec<[Real; 2]> = disc_points(points[0], radius)
            .iter()
            .map(|p| [p.x(), p.y()])
            .collect();
        return Sketch::polygon(&ring, None);
    }
    points.windows(2).fold(Sketch::new(), |acc, pair| {
        acc.union(&hull_pair(pair[0], pair[1], radius))
    })
}

/// Builds a 3D solid of `message` extruded by `extrusion_height`.
///
/// An empty message (or one with no renderable characters) is not an error;
/// it yields the empty solid. The result is centered on x = 0, y = 0 with its
/// extrusion base at z = 0.
pub fn flat_text(
    message: &str,
    extrusion_height: Real,
    line_width: Real,
    style: &TextStyle,
) -> Solid {
    if message.is_empty() {
        return Solid::new();
    }
    let strokes = glyphs::vector_text(message, style.glyph_height);
    if strokes.is_empty() {
        return Solid::new();
    }

    let flat = strokes.iter().fold(Sketch::new(), |acc, stroke| {
        acc.union(&fatten_polyline(stroke, line_width))
    });
    let solid = colorize(flat.extrude(extrusion_height), style.color);
    center_xy(solid)
}

/// Translates `solid` so its bounding box is centered on the X/Y axes,
/// leaving z untouched.
fn center_xy(solid: Solid) -> Solid {
    let aabb = solid.bounding_box();
    let center_x = (aabb.mins.x + aabb.maxs.x) * 0.5;
    let center_y = (aabb.mins.y + aabb.maxs.y) * 0.5;
    solid.translate(-center_x, -center_y, 0.0)
}
