use crate::snapshot::{STATE_KEY, SUPER_STATE_KEY, Snapshot, SnapshotValue};
use crate::{DrawCommand, EmoticonStyle, Expression, UnknownExpressionError, face};

/// The face renderer for hosts that drive layout, input and persistence
/// themselves. Owns the current expression, the visual style and the
/// layout size, and hands out [`DrawCommand`]s on demand.
///
/// For egui hosts, [`crate::Emoticon`] wraps all of this into a widget.
#[derive(Clone, Debug)]
pub struct EmoticonRenderer {
    expression: Expression,
    style: EmoticonStyle,
    size: f32,
    host_state: Option<SnapshotValue>,
    repaint_requested: bool,
}

impl Default for EmoticonRenderer {
    fn default() -> Self {
        Self::new(EmoticonStyle::default())
    }
}

impl EmoticonRenderer {
    pub fn new(style: EmoticonStyle) -> Self {
        Self {
            expression: Expression::Happy,
            style,
            size: 0.0,
            host_state: None,
            repaint_requested: false,
        }
    }

    /// Override the initial expression (construction-time configuration).
    #[inline]
    pub fn with_expression(mut self, expression: Expression) -> Self {
        self.expression = expression;
        self
    }

    #[inline]
    pub fn expression(&self) -> Expression {
        self.expression
    }

    #[inline]
    pub fn style(&self) -> &EmoticonStyle {
        &self.style
    }

    /// Set the expression. Always raises a repaint request, even when the
    /// value is unchanged.
    pub fn set_expression(&mut self, expression: Expression) {
        self.expression = expression;
        self.repaint_requested = true;
    }

    /// The tap interaction: binary flip of the expression.
    /// Returns the new value.
    pub fn toggle_expression(&mut self) -> Expression {
        self.set_expression(self.expression.toggled());
        self.expression
    }

    /// Called by the host on every layout pass, before rendering.
    ///
    /// Stores and returns the forced square side,
    /// `min(measured_width, measured_height)`, so the host can re-measure
    /// itself as exactly square.
    pub fn on_layout(&mut self, measured_width: f32, measured_height: f32) -> f32 {
        self.size = measured_width.min(measured_height).max(0.0);
        self.size
    }

    /// The square side stored by the last [`Self::on_layout`] call.
    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Drawing commands for the current state, in paint order.
    pub fn shapes(&self) -> Result<Vec<DrawCommand>, UnknownExpressionError> {
        face::face_shapes(self.size, self.expression.code(), &self.style)
    }

    /// True if an expression change happened since the last call.
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.repaint_requested)
    }

    /// Attach the host's own base state so it survives snapshots.
    pub fn set_host_state(&mut self, blob: impl Into<Vec<u8>>) {
        self.host_state = Some(SnapshotValue::Opaque(blob.into()));
    }

    /// The host base state carried through the last restore, if any.
    pub fn host_state(&self) -> Option<&SnapshotValue> {
        self.host_state.as_ref()
    }

    pub fn snapshot(&self) -> Snapshot {
        let mut snapshot = Snapshot::default();
        snapshot.insert(STATE_KEY, SnapshotValue::Int(self.expression.code()));
        if let Some(host_state) = &self.host_state {
            snapshot.insert(SUPER_STATE_KEY, host_state.clone());
        }
        snapshot
    }

    /// Restore from a snapshot taken with [`Self::snapshot`].
    ///
    /// A missing or malformed expression entry falls back to
    /// [`Expression::Happy`]; it is never an error. The host entry is
    /// kept verbatim, without interpretation.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        let expression = match snapshot.get(STATE_KEY) {
            Some(SnapshotValue::Int(code)) => {
                Expression::from_code(*code).unwrap_or_else(|err| {
                    log::warn!("ignoring persisted expression: {err}");
                    Expression::Happy
                })
            }
            Some(SnapshotValue::Opaque(_)) => {
                log::warn!("persisted expression has the wrong type; defaulting to happy");
                Expression::Happy
            }
            None => Expression::Happy,
        };
        self.set_expression(expression);
        self.host_state = snapshot.get(SUPER_STATE_KEY).cloned();
    }
}
