//! The geometry of the face: a pure function from (size, expression,
//! style) to drawing commands.

use egui::epaint::{CircleShape, EllipseShape};
use egui::{Rect, Stroke, pos2};

use crate::{
    DrawCommand, EmoticonStyle, Expression, MouthPath, QuadSegment, UnknownExpressionError,
};

/// Compute the drawing commands for a face of the given square `size`.
///
/// `state` is the integer expression code (see [`Expression::code`]); it
/// is validated once, before anything is emitted, so an unknown code never
/// produces a partially drawn face. A `size` of zero (from a degenerate
/// layout) yields a zero-area face, not an error.
///
/// The commands come in a fixed order: background circle, border circle,
/// left eye, right eye, mouth. All coordinates lie in `[0, size]²`;
/// callers translate into their own screen rect.
pub fn face_shapes(
    size: f32,
    state: i64,
    style: &EmoticonStyle,
) -> Result<Vec<DrawCommand>, UnknownExpressionError> {
    let expression = Expression::from_code(state)?;

    let mut commands = Vec::with_capacity(5);
    push_background(size, style, &mut commands);
    push_eyes(size, expression, style, &mut commands);
    push_mouth(size, expression, style, &mut commands);
    Ok(commands)
}

fn push_background(size: f32, style: &EmoticonStyle, out: &mut Vec<DrawCommand>) {
    let center = pos2(size / 2.0, size / 2.0);
    let radius = size / 2.0;
    out.push(DrawCommand::Circle(CircleShape::filled(
        center,
        radius,
        style.main_color,
    )));
    // Inset by half the stroke so the border's outer edge meets the disk edge.
    out.push(DrawCommand::Circle(CircleShape::stroke(
        center,
        radius - style.border_width / 2.0,
        Stroke::new(style.border_width, style.border_color),
    )));
}

fn push_eyes(size: f32, expression: Expression, style: &EmoticonStyle, out: &mut Vec<DrawCommand>) {
    let (left, right) = match expression {
        Expression::Happy => (
            Rect::from_min_max(pos2(0.32 * size, 0.23 * size), pos2(0.43 * size, 0.50 * size)),
            Rect::from_min_max(pos2(0.57 * size, 0.23 * size), pos2(0.68 * size, 0.50 * size)),
        ),
        Expression::Sad => (
            Rect::from_min_max(pos2(0.29 * size, 0.27 * size), pos2(0.46 * size, 0.46 * size)),
            Rect::from_min_max(pos2(0.55 * size, 0.27 * size), pos2(0.72 * size, 0.46 * size)),
        ),
    };
    for eye in [left, right] {
        out.push(DrawCommand::Ellipse(EllipseShape::filled(
            eye.center(),
            eye.size() / 2.0,
            style.eyes_color,
        )));
    }
}

fn push_mouth(
    size: f32,
    expression: Expression,
    style: &EmoticonStyle,
    out: &mut Vec<DrawCommand>,
) {
    let start = pos2(0.22 * size, 0.70 * size);
    let corner = pos2(0.78 * size, 0.70 * size);
    // Control points below the corners make the mouth smile,
    // above them make it frown.
    let (there, back) = match expression {
        Expression::Happy => (0.80 * size, 0.90 * size),
        Expression::Sad => (0.50 * size, 0.60 * size),
    };
    out.push(DrawCommand::Path(MouthPath {
        start,
        segments: [
            QuadSegment {
                control: pos2(0.50 * size, there),
                end: corner,
            },
            QuadSegment {
                control: pos2(0.50 * size, back),
                end: start,
            },
        ],
        fill: style.mouth_color,
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Pos2, Vec2};

    fn assert_pos_eq(actual: Pos2, expected: Pos2) {
        assert!(
            (actual.x - expected.x).abs() < 1e-3 && (actual.y - expected.y).abs() < 1e-3,
            "{actual:?} != {expected:?}"
        );
    }

    fn eye_bounds(command: &DrawCommand) -> Rect {
        match command {
            DrawCommand::Ellipse(eye) => Rect::from_center_size(eye.center, eye.radius * 2.0),
            other => panic!("expected an eye ellipse, got {other:?}"),
        }
    }

    #[test]
    fn commands_come_in_fixed_order() {
        for state in [crate::HAPPY_CODE, crate::SAD_CODE] {
            let commands = face_shapes(100.0, state, &EmoticonStyle::default()).unwrap();
            assert_eq!(commands.len(), 5);
            assert!(matches!(commands[0], DrawCommand::Circle(_)));
            assert!(matches!(commands[1], DrawCommand::Circle(_)));
            assert!(matches!(commands[2], DrawCommand::Ellipse(_)));
            assert!(matches!(commands[3], DrawCommand::Ellipse(_)));
            assert!(matches!(commands[4], DrawCommand::Path(_)));
        }
    }

    #[test]
    fn background_fills_the_square_and_border_is_inset() {
        let style = EmoticonStyle::default();
        let commands = face_shapes(100.0, crate::HAPPY_CODE, &style).unwrap();

        let DrawCommand::Circle(background) = &commands[0] else {
            panic!("expected background circle");
        };
        assert_pos_eq(background.center, pos2(50.0, 50.0));
        assert_eq!(background.radius, 50.0);
        assert_eq!(background.fill, style.main_color);

        let DrawCommand::Circle(border) = &commands[1] else {
            panic!("expected border circle");
        };
        assert_pos_eq(border.center, pos2(50.0, 50.0));
        assert_eq!(border.radius, 50.0 - style.border_width / 2.0);
        assert_eq!(border.stroke.width, style.border_width);
        assert_eq!(border.stroke.color, style.border_color);
    }

    #[test]
    fn happy_eyes_at_size_100() {
        let commands = face_shapes(100.0, crate::HAPPY_CODE, &EmoticonStyle::default()).unwrap();
        let left = eye_bounds(&commands[2]);
        let right = eye_bounds(&commands[3]);
        assert_pos_eq(left.min, pos2(32.0, 23.0));
        assert_pos_eq(left.max, pos2(43.0, 50.0));
        assert_pos_eq(right.min, pos2(57.0, 23.0));
        assert_pos_eq(right.max, pos2(68.0, 50.0));
    }

    #[test]
    fn sad_eyes_at_size_100() {
        let commands = face_shapes(100.0, crate::SAD_CODE, &EmoticonStyle::default()).unwrap();
        let left = eye_bounds(&commands[2]);
        let right = eye_bounds(&commands[3]);
        assert_pos_eq(left.min, pos2(29.0, 27.0));
        assert_pos_eq(left.max, pos2(46.0, 46.0));
        assert_pos_eq(right.min, pos2(55.0, 27.0));
        assert_pos_eq(right.max, pos2(72.0, 46.0));
    }

    #[test]
    fn mouth_at_size_100() {
        let commands = face_shapes(100.0, crate::HAPPY_CODE, &EmoticonStyle::default()).unwrap();
        let DrawCommand::Path(mouth) = &commands[4] else {
            panic!("expected mouth path");
        };
        assert_pos_eq(mouth.start, pos2(22.0, 70.0));
        assert_pos_eq(mouth.segments[0].control, pos2(50.0, 80.0));
        assert_pos_eq(mouth.segments[0].end, pos2(78.0, 70.0));
        assert_pos_eq(mouth.segments[1].control, pos2(50.0, 90.0));
        assert_pos_eq(mouth.segments[1].end, mouth.start);

        let commands = face_shapes(100.0, crate::SAD_CODE, &EmoticonStyle::default()).unwrap();
        let DrawCommand::Path(mouth) = &commands[4] else {
            panic!("expected mouth path");
        };
        assert_pos_eq(mouth.segments[0].control, pos2(50.0, 50.0));
        assert_pos_eq(mouth.segments[1].control, pos2(50.0, 60.0));
    }

    #[test]
    fn all_coordinates_stay_inside_the_square() {
        let size = 100.0;
        for state in [crate::HAPPY_CODE, crate::SAD_CODE] {
            let commands = face_shapes(size, state, &EmoticonStyle::default()).unwrap();
            let bounds = Rect::from_min_size(Pos2::ZERO, Vec2::splat(size));
            for command in &commands {
                let rect = command.to_shape().visual_bounding_rect();
                assert!(
                    bounds.expand(0.5).contains_rect(rect),
                    "{command:?} escapes the square: {rect:?}"
                );
            }
        }
    }

    #[test]
    fn zero_size_renders_a_degenerate_face() {
        let commands = face_shapes(0.0, crate::HAPPY_CODE, &EmoticonStyle::default()).unwrap();
        assert_eq!(commands.len(), 5);
        let DrawCommand::Circle(background) = &commands[0] else {
            panic!("expected background circle");
        };
        assert_eq!(background.radius, 0.0);
    }

    #[test]
    fn unknown_expression_code_draws_nothing() {
        let err = face_shapes(100.0, 2, &EmoticonStyle::default()).unwrap_err();
        assert_eq!(err, UnknownExpressionError { code: 2 });
    }
}
