use nalgebra::{DMatrix, Point3};

/// Computes the full N×N matrix of Euclidean distances between all pairs of
/// points in a conformation.
///
/// The result is symmetric with a zero diagonal. Empty and single-point
/// inputs yield a 0×0 or 1×1 all-zero matrix.
pub fn distance_matrix(coords: &[Point3<f64>]) -> DMatrix<f64> {
    let n = coords.len();
    DMatrix::from_fn(n, n, |i, j| (coords[i] - coords[j]).norm())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn distance_matrix_of_empty_input_is_empty() {
        let dist = distance_matrix(&[]);
        assert_eq!(dist.nrows(), 0);
        assert_eq!(dist.ncols(), 0);
    }

    #[test]
    fn distance_matrix_of_single_point_is_one_by_one_zero() {
        let dist = distance_matrix(&[Point3::new(1.0, -2.0, 3.0)]);
        assert_eq!(dist.nrows(), 1);
        assert!(f64_approx_equal(dist[(0, 0)], 0.0));
    }

    #[test]
    fn distance_matrix_entries_match_euclidean_norm() {
        let coords = [Point3::new(0.0, 0.0, 0.0), Point3::new(3.0, 4.0, 0.0)];
        let dist = distance_matrix(&coords);
        assert!(f64_approx_equal(dist[(0, 1)], 5.0));
        assert!(f64_approx_equal(dist[(1, 0)], 5.0));
    }

    #[test]
    fn distance_matrix_is_symmetric_with_zero_diagonal() {
        let coords = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.5, -2.0, 0.5),
            Point3::new(-3.0, 1.0, 2.0),
            Point3::new(4.0, 4.0, 4.0),
        ];
        let dist = distance_matrix(&coords);
        for i in 0..coords.len() {
            assert!(f64_approx_equal(dist[(i, i)], 0.0));
            for j in 0..coords.len() {
                assert!(f64_approx_equal(dist[(i, j)], dist[(j, i)]));
            }
        }
    }

    #[test]
    fn distance_matrix_is_translation_invariant() {
        let coords = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 2.0, 3.0),
            Point3::new(-2.0, 0.5, 1.0),
        ];
        let shift = nalgebra::Vector3::new(10.0, -7.0, 3.3);
        let shifted: Vec<Point3<f64>> = coords.iter().map(|p| p + shift).collect();

        let dist = distance_matrix(&coords);
        let dist_shifted = distance_matrix(&shifted);
        for i in 0..coords.len() {
            for j in 0..coords.len() {
                assert!(f64_approx_equal(dist[(i, j)], dist_shifted[(i, j)]));
            }
        }
    }
}
