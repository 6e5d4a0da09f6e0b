use egui::{Response, Sense, Ui, Vec2, Widget, WidgetInfo, WidgetType};

use crate::{EmoticonStyle, Expression, face};

/// A circular happy/sad face. Clicking it toggles the expression.
///
/// ```
/// # egui::__run_test_ui(|ui| {
/// # let mut expression = egui_emoticon::Expression::Happy;
/// ui.add(egui_emoticon::Emoticon::new(&mut expression));
/// # });
/// ```
#[must_use = "You should put this widget in a ui with `ui.add(widget);`"]
pub struct Emoticon<'a> {
    expression: &'a mut Expression,
    style: EmoticonStyle,
    size: Option<f32>,
}

impl<'a> Emoticon<'a> {
    pub fn new(expression: &'a mut Expression) -> Self {
        Self {
            expression,
            style: EmoticonStyle::default(),
            size: None,
        }
    }

    /// Visual configuration. Defaults to a yellow face with black features.
    #[inline]
    pub fn style(mut self, style: EmoticonStyle) -> Self {
        self.style = style;
        self
    }

    /// Side of the (square) face. By default the largest square that fits
    /// the available space is used.
    #[inline]
    pub fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }
}

impl Widget for Emoticon<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let Self {
            expression,
            style,
            size,
        } = self;

        // The face is always square, inscribed in the allotted box.
        let side = size
            .unwrap_or_else(|| ui.available_size().min_elem())
            .max(0.0);
        let (rect, mut response) = ui.allocate_exact_size(Vec2::splat(side), Sense::click());

        if response.clicked() {
            *expression = expression.toggled();
            response.mark_changed();
        }
        response.widget_info(|| {
            let label = match *expression {
                Expression::Happy => "happy face",
                Expression::Sad => "sad face",
            };
            WidgetInfo::labeled(WidgetType::Button, ui.is_enabled(), label)
        });

        if ui.is_rect_visible(rect) {
            match face::face_shapes(rect.width(), expression.code(), &style) {
                Ok(commands) => {
                    let offset = rect.min.to_vec2();
                    let painter = ui.painter();
                    for command in &commands {
                        let mut shape = command.to_shape();
                        shape.translate(offset);
                        painter.add(shape);
                    }
                }
                Err(err) => {
                    // Not reachable through the typed `Expression` API.
                    log::error!("not painting emoticon: {err}");
                }
            }
        }

        response
    }
}
