// =========================================================================
// Matrix primitives contract
//
// Algebraic identities the arithmetic must hold for arbitrary valid
// inputs, not just the worked examples in matrix_tests.rs.
//
// References:
//   - Golub & Van Loan (2013) "Matrix Computations"
// =========================================================================

use super::*;

/// Transpose involution: (A^T)^T = A
#[test]
fn contract_transpose_involution() {
    let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid");
    let att = a
        .transpose()
        .expect("valid matrix")
        .transpose()
        .expect("valid matrix");

    assert_eq!(att.shape(), a.shape());
    for i in 0..2 {
        for j in 0..3 {
            assert!(
                (att.get(i, j) - a.get(i, j)).abs() < 1e-12,
                "(A^T)^T[{i},{j}] != A[{i},{j}]"
            );
        }
    }
}

/// Transpose swaps shape: (m×n)^T = (n×m)
#[test]
fn contract_transpose_swaps_shape() {
    let a = Matrix::from_vec(3, 5, vec![0.0; 15]).expect("valid");
    let at = a.transpose().expect("valid matrix");
    assert_eq!(at.shape(), (5, 3));
}

/// Matmul shape: (m×k) * (k×n) = (m×n)
#[test]
fn contract_matmul_shape() {
    let a = Matrix::from_vec(2, 3, vec![1.0; 6]).expect("valid");
    let b = Matrix::from_vec(3, 4, vec![1.0; 12]).expect("valid");
    let c = a.matmul(&b).expect("compatible dims");
    assert_eq!(c.shape(), (2, 4));
}

/// Determinant of the identity is one, for every order the cofactor
/// recursion can reach cheaply.
#[test]
fn contract_identity_determinant() {
    for n in 1..=5 {
        let mut eye = Matrix::zeros(n, n).expect("positive dims");
        for i in 0..n {
            eye.set(i, i, 1.0);
        }
        let det = eye.determinant().expect("square");
        assert!((det - 1.0).abs() < 1e-12, "det(I_{n}) = {det}");
    }
}

mod matrix_proptest_contract {
    use super::*;
    use proptest::prelude::*;

    /// Transpose involution for random matrices
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn contract_prop_transpose_involution(
            rows in 1..=8usize,
            cols in 1..=8usize,
            seed in 0..500u32,
        ) {
            let data: Vec<Scalar> = (0..rows * cols)
                .map(|i| ((i as Scalar + Scalar::from(seed)) * 0.37).sin() * 10.0)
                .collect();
            let a = Matrix::from_vec(rows, cols, data).expect("valid");
            let att = a
                .transpose()
                .expect("valid matrix")
                .transpose()
                .expect("valid matrix");

            prop_assert_eq!(att.shape(), a.shape());
            for i in 0..rows {
                for j in 0..cols {
                    prop_assert!(
                        (att.get(i, j) - a.get(i, j)).abs() < 1e-9,
                        "(A^T)^T[{},{}] != A[{},{}]", i, j, i, j
                    );
                }
            }
        }
    }

    /// Identity matmul for random square matrices
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn contract_prop_identity_matmul(
            n in 1..=6usize,
            seed in 0..500u32,
        ) {
            let data: Vec<Scalar> = (0..n * n)
                .map(|i| ((i as Scalar + Scalar::from(seed)) * 0.37).sin() * 10.0)
                .collect();
            let a = Matrix::from_vec(n, n, data).expect("valid");
            let mut eye = Matrix::zeros(n, n).expect("positive dims");
            for i in 0..n {
                eye.set(i, i, 1.0);
            }
            let result = a.matmul(&eye).expect("compatible");

            for i in 0..n {
                for j in 0..n {
                    prop_assert!(
                        (result.get(i, j) - a.get(i, j)).abs() < 1e-9,
                        "(A*I)[{},{}] != A[{},{}]", i, j, i, j
                    );
                }
            }
        }
    }

    /// Subtraction undoes addition: (A + B) - B = A
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn contract_prop_sub_undoes_add(
            rows in 1..=8usize,
            cols in 1..=8usize,
            seed in 0..500u32,
        ) {
            let fill = |offset: Scalar| -> Vec<Scalar> {
                (0..rows * cols)
                    .map(|i| ((i as Scalar + Scalar::from(seed) + offset) * 0.53).cos() * 25.0)
                    .collect()
            };
            let a = Matrix::from_vec(rows, cols, fill(0.0)).expect("valid");
            let b = Matrix::from_vec(rows, cols, fill(101.0)).expect("valid");

            let back = a
                .add(&b)
                .expect("same shape")
                .sub(&b)
                .expect("same shape");
            for i in 0..rows {
                for j in 0..cols {
                    prop_assert!(
                        (back.get(i, j) - a.get(i, j)).abs() < 1e-9,
                        "((A+B)-B)[{},{}] != A[{},{}]", i, j, i, j
                    );
                }
            }
        }
    }

    /// Determinant is invariant under transpose: det(A^T) = det(A)
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn contract_prop_determinant_transpose_invariant(
            n in 1..=4usize,
            seed in 0..500u32,
        ) {
            let data: Vec<Scalar> = (0..n * n)
                .map(|i| ((i as Scalar + Scalar::from(seed)) * 0.71).sin() * 5.0)
                .collect();
            let a = Matrix::from_vec(n, n, data).expect("valid");
            let det_a = a.determinant().expect("square");
            let det_at = a
                .transpose()
                .expect("valid matrix")
                .determinant()
                .expect("square");

            prop_assert!(
                (det_a - det_at).abs() < 1e-6 * (1.0 + det_a.abs()),
                "det(A)={} det(A^T)={}", det_a, det_at
            );
        }
    }
}
