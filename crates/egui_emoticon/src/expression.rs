use serde::{Deserialize, Serialize};

/// Wire code for [`Expression::Happy`] in a [`crate::Snapshot`].
pub const HAPPY_CODE: i64 = 0;

/// Wire code for [`Expression::Sad`] in a [`crate::Snapshot`].
pub const SAD_CODE: i64 = 1;

/// The discrete emotional state of the face.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Expression {
    #[default]
    Happy,
    Sad,
}

impl Expression {
    /// The integer code used when persisting the expression.
    #[inline]
    pub const fn code(self) -> i64 {
        match self {
            Self::Happy => HAPPY_CODE,
            Self::Sad => SAD_CODE,
        }
    }

    /// Decode a persisted wire code.
    pub const fn from_code(code: i64) -> Result<Self, UnknownExpressionError> {
        match code {
            HAPPY_CODE => Ok(Self::Happy),
            SAD_CODE => Ok(Self::Sad),
            _ => Err(UnknownExpressionError { code }),
        }
    }

    /// The binary flip used by the tap-to-toggle interaction:
    /// `Happy` becomes `Sad`, anything not happy becomes `Happy`.
    #[inline]
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Happy => Self::Sad,
            _ => Self::Happy,
        }
    }
}

/// An expression code outside the defined set.
///
/// The set is closed today, so hitting this is a programming error:
/// it guards against a future expression being added without a matching
/// geometry case.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
#[error("unknown expression code {code} (expected 0 for happy or 1 for sad)")]
pub struct UnknownExpressionError {
    pub code: i64,
}
