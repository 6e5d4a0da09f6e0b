//! A toggleable happy/sad emoticon face widget for [`egui`].
//!
//! The face is a colored disk with a border, two eyes and a mouth. All of
//! its geometry is derived from a single square size and the current
//! [`Expression`], so the crate can be used two ways:
//!
//! - [`Emoticon`]: a ready-made [`egui::Widget`]. Clicking the face
//!   toggles it between happy and sad.
//! - [`EmoticonRenderer`] and [`face_shapes`]: the underlying renderer for
//!   hosts that drive layout, input and persistence themselves and only
//!   want the [`DrawCommand`]s.
//!
//! ```
//! # egui::__run_test_ui(|ui| {
//! let mut expression = egui_emoticon::Expression::Happy;
//! if ui.add(egui_emoticon::Emoticon::new(&mut expression)).changed() {
//!     // the face was clicked and toggled
//! }
//! # });
//! ```

mod command;
mod expression;
mod face;
mod renderer;
mod snapshot;
mod style;
mod widget;

pub use command::{DrawCommand, MouthPath, QuadSegment};
pub use expression::{Expression, HAPPY_CODE, SAD_CODE, UnknownExpressionError};
pub use face::face_shapes;
pub use renderer::EmoticonRenderer;
pub use snapshot::{STATE_KEY, SUPER_STATE_KEY, Snapshot, SnapshotError, SnapshotValue};
pub use style::EmoticonStyle;
pub use widget::Emoticon;
