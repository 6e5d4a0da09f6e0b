use egui::epaint::{CircleShape, EllipseShape, Mesh, QuadraticBezierShape, Shape};
use egui::{Color32, Pos2, Stroke};

/// One quadratic curve segment of a [`MouthPath`], continuing from the
/// previous segment's end point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadSegment {
    pub control: Pos2,
    pub end: Pos2,
}

/// The mouth: a filled closed path built from two quadratic curves, out
/// from the left corner and back again.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MouthPath {
    pub start: Pos2,
    pub segments: [QuadSegment; 2],
    pub fill: Color32,
}

impl MouthPath {
    /// Matched samples per lip curve when meshing.
    const SAMPLES: u32 = 24;

    /// The two lip curves, re-parameterized to share a direction:
    /// both run from `start` to the far mouth corner.
    fn lips(&self) -> (QuadraticBezierShape, QuadraticBezierShape) {
        let [first, second] = self.segments;
        let upper = QuadraticBezierShape::from_points_stroke(
            [self.start, first.control, first.end],
            false,
            Color32::TRANSPARENT,
            Stroke::NONE,
        );
        // The second segment runs corner -> start; reversing it keeps the
        // same control point.
        let lower = QuadraticBezierShape::from_points_stroke(
            [second.end, second.control, first.end],
            false,
            Color32::TRANSPARENT,
            Stroke::NONE,
        );
        (upper, lower)
    }

    /// Fill the area between the two lip curves with a triangle strip.
    ///
    /// The enclosed region is a lune, concave along one lip, so it cannot
    /// go through epaint's convex fill. A strip between matched samples of
    /// the two curves covers exactly the enclosed area.
    pub fn to_mesh(&self) -> Mesh {
        let (upper, lower) = self.lips();
        let mut mesh = Mesh::default();
        for i in 0..=Self::SAMPLES {
            let t = i as f32 / Self::SAMPLES as f32;
            mesh.colored_vertex(upper.sample(t), self.fill);
            mesh.colored_vertex(lower.sample(t), self.fill);
        }
        for i in 0..Self::SAMPLES {
            let a = 2 * i; // upper sample; `a + 1` is the matching lower one
            mesh.add_triangle(a, a + 1, a + 2);
            mesh.add_triangle(a + 1, a + 3, a + 2);
        }
        mesh
    }
}

/// An abstract drawing instruction for a rendering surface.
///
/// [`crate::face_shapes`] returns these in paint order: background circle,
/// border circle, two eye ellipses, mouth path.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Filled or stroked circle (face background and border).
    Circle(CircleShape),
    /// Filled oval (eyes).
    Ellipse(EllipseShape),
    /// Filled closed path (mouth).
    Path(MouthPath),
}

impl DrawCommand {
    /// Convert into something an [`egui::Painter`] can draw.
    pub fn to_shape(&self) -> Shape {
        match self {
            Self::Circle(circle) => Shape::Circle(*circle),
            Self::Ellipse(ellipse) => Shape::Ellipse(*ellipse),
            Self::Path(mouth) => Shape::mesh(mouth.to_mesh()),
        }
    }
}
