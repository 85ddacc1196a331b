use nalgebra::{DMatrix, DVector};

/// The Jacobian could not be factorized reliably.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Singular {
    /// Smallest over largest pivot magnitude of the LU factorization.
    pub(super) pivot_ratio: f64,
}

/// Solves `J·Δx = −F` using LU factorization with partial pivoting.
///
/// The factorization is rejected when a pivot is zero or the pivot ratio
/// falls below `min_pivot_ratio`.
pub(super) fn newton_direction(
    jacobian: &DMatrix<f64>,
    fx: &DVector<f64>,
    min_pivot_ratio: f64,
) -> Result<DVector<f64>, Singular> {
    let lu = jacobian.clone().lu();

    let pivots = lu.u().diagonal().abs();
    let largest = pivots.max();
    let pivot_ratio = if largest > 0.0 {
        pivots.min() / largest
    } else {
        0.0
    };

    if pivot_ratio <= 0.0 || pivot_ratio < min_pivot_ratio {
        return Err(Singular { pivot_ratio });
    }

    lu.solve(&(-fx)).ok_or(Singular { pivot_ratio })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn solves_a_well_conditioned_system() {
        let jacobian = DMatrix::from_row_slice(2, 2, &[2.0, 1.0, 1.0, 3.0]);
        let fx = DVector::from_vec(vec![-3.0, -5.0]);

        let dx = newton_direction(&jacobian, &fx, 1e-12).unwrap();

        // 2a + b = 3, a + 3b = 5
        assert_relative_eq!(dx[0], 0.8, epsilon = 1e-14);
        assert_relative_eq!(dx[1], 1.4, epsilon = 1e-14);
    }

    #[test]
    fn rejects_a_zero_pivot() {
        let jacobian = DMatrix::from_row_slice(2, 2, &[1.0, 1.0, 2.0, 2.0]);
        let fx = DVector::from_vec(vec![1.0, 1.0]);

        let err = newton_direction(&jacobian, &fx, 1e-12).unwrap_err();
        assert_relative_eq!(err.pivot_ratio, 0.0);
    }

    #[test]
    fn rejects_an_ill_conditioned_matrix() {
        let jacobian = DMatrix::from_row_slice(2, 2, &[1.0, 1.0, 1.0, 1.0 + 1e-15]);
        let fx = DVector::from_vec(vec![1.0, 2.0]);

        let err = newton_direction(&jacobian, &fx, 1e-12).unwrap_err();
        assert!(err.pivot_ratio > 0.0 && err.pivot_ratio < 1e-12);

        // The same matrix is accepted once the threshold is disabled.
        assert!(newton_direction(&jacobian, &fx, 0.0).is_ok());
    }
}
