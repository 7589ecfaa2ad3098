//! Algebra errors

use std::fmt::Display;

/// Raised by the operations that divide by the norm when the operand is the
/// zero quaternion `w = x = y = z = 0`.
///
/// The norm check is exact equality against zero, not an epsilon threshold:
/// any nonzero quaternion, however small, normalizes and inverts. Not
/// retryable; callers avoid it by checking [`norm`](crate::Quaternion::norm)
/// first or by guaranteeing nonzero construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ZeroQuaternionError {
    /// (Normalize) `normalize` or `normalize_mut` called on the zero quaternion
    Normalize,
    /// (Inverse) `inverse` called on the zero quaternion, also reached through `rotate_vector`
    Inverse,
}

impl Display for ZeroQuaternionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZeroQuaternionError::Normalize => {
                write!(f, "Cannot normalize a zero quaternion.")
            },
            ZeroQuaternionError::Inverse => {
                write!(f, "Cannot compute inverse of a zero quaternion.")
            },
        }
    }
}
