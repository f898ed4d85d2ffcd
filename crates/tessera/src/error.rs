use thiserror::Error;

/// Errors returned by fallible matrix, vector and basis operations.
///
/// All of these are detectable from the inputs alone, so retrying an operation with the same
/// inputs will fail in the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The matrix has a determinant of exactly zero and cannot be inverted.
    #[error("matrix is not regular (its determinant is zero)")]
    NonRegularMatrix,

    /// A row, column or vector index was outside of `0..dimension`.
    #[error("index {index} is out of bounds for dimension {dimension}")]
    IndexOutOfBounds { index: usize, dimension: usize },

    /// The vectors or matrix given as a basis are linearly dependent.
    #[error("vectors are linearly dependent and do not form a basis")]
    DegenerateBasis,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Ok(index)` if `index` is a valid index into something of size `dimension`.
pub(crate) fn check_index(index: usize, dimension: usize) -> Result<usize> {
    if index < dimension {
        Ok(index)
    } else {
        Err(Error::IndexOutOfBounds { index, dimension })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        assert_eq!(check_index(0, 2), Ok(0));
        assert_eq!(check_index(1, 2), Ok(1));
        assert_eq!(
            check_index(2, 2),
            Err(Error::IndexOutOfBounds {
                index: 2,
                dimension: 2
            })
        );
    }

    #[test]
    fn messages() {
        assert_eq!(
            Error::IndexOutOfBounds {
                index: 4,
                dimension: 3
            }
            .to_string(),
            "index 4 is out of bounds for dimension 3"
        );
        assert_eq!(
            Error::NonRegularMatrix.to_string(),
            "matrix is not regular (its determinant is zero)"
        );
    }
}
