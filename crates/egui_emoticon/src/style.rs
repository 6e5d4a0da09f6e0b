use egui::Color32;

/// Colors and stroke width controlling the appearance of the face.
///
/// All lengths are in logical points, independent of pixel density.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmoticonStyle {
    /// Fill color of the face disk.
    pub main_color: Color32,
    pub eyes_color: Color32,
    pub mouth_color: Color32,
    pub border_color: Color32,
    /// Stroke width of the face border.
    pub border_width: f32,
}

impl Default for EmoticonStyle {
    fn default() -> Self {
        Self {
            main_color: Color32::YELLOW,
            eyes_color: Color32::BLACK,
            mouth_color: Color32::BLACK,
            border_color: Color32::BLACK,
            border_width: 4.0,
        }
    }
}

impl EmoticonStyle {
    #[inline]
    pub fn main_color(mut self, color: impl Into<Color32>) -> Self {
        self.main_color = color.into();
        self
    }

    #[inline]
    pub fn eyes_color(mut self, color: impl Into<Color32>) -> Self {
        self.eyes_color = color.into();
        self
    }

    #[inline]
    pub fn mouth_color(mut self, color: impl Into<Color32>) -> Self {
        self.mouth_color = color.into();
        self
    }

    #[inline]
    pub fn border_color(mut self, color: impl Into<Color32>) -> Self {
        self.border_color = color.into();
        self
    }

    #[inline]
    pub fn border_width(mut self, width: f32) -> Self {
        self.border_width = width.max(0.0);
        self
    }
}
