// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error type shared by every fallible constructor and by matrix inversion.

/// Errors reported by this crate.
///
/// All of them are local to the call that produced them: nothing is retried and
/// nothing is fatal to the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MathError {
    /// A slice constructor received the wrong number of elements.
    #[error("expected {expected} elements, got {actual}")]
    InvalidLength {
        /// The exact number of elements the type requires.
        expected: usize,
        /// The number of elements actually provided.
        actual: usize,
    },

    /// A projection builder received out-of-domain parameters.
    #[error("invalid frustum: {0}")]
    InvalidFrustum(&'static str),

    /// The matrix has a zero determinant and cannot be inverted.
    #[error("matrix is singular (determinant is zero)")]
    SingularMatrix,
}

/// A `Result` alias using [`MathError`].
pub type Result<T> = std::result::Result<T, MathError>;

/// Checks that `actual` matches the fixed length a type expects.
pub(crate) fn check_len(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        log::debug!("rejecting slice of {actual} elements, expected {expected}");
        Err(MathError::InvalidLength { expected, actual })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_len() {
        assert!(check_len(3, 3).is_ok());
        assert_eq!(
            check_len(4, 2),
            Err(MathError::InvalidLength {
                expected: 4,
                actual: 2
            })
        );
    }

    #[test]
    fn test_display() {
        let err = MathError::InvalidLength {
            expected: 16,
            actual: 9,
        };
        assert_eq!(err.to_string(), "expected 16 elements, got 9");
        assert_eq!(
            MathError::SingularMatrix.to_string(),
            "matrix is singular (determinant is zero)"
        );
        assert_eq!(
            MathError::InvalidFrustum("near must be positive").to_string(),
            "invalid frustum: near must be positive"
        );
    }
}
