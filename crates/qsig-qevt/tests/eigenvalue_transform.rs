//! Integration tests for the QEVT pipeline: block encoding → projector
//! phases → composite → polynomial-transformed block.

use ndarray::Array2;
use num_complex::Complex64;

use qsig_qevt::linalg::{dagger, hermitian_eig, identity, spectral_norm};
use qsig_qevt::{EigenvalueTransform, block_encode, qevt};
use qsig_qsp::reference::chebyshev;

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

fn assert_close(a: &Array2<Complex64>, b: &Array2<Complex64>, tol: f64) {
    assert_eq!(a.shape(), b.shape());
    for ((i, j), x) in a.indexed_iter() {
        let diff = (x - b[[i, j]]).norm();
        assert!(
            diff < tol,
            "mismatch at ({i}, {j}): {x:?} vs {:?} (diff {diff:.3e})",
            b[[i, j]]
        );
    }
}

/// Deterministic pseudo-random Hermitian with spectral norm safely below 1.
fn random_hermitian(n: usize, seed: u64) -> Array2<Complex64> {
    let mut state = seed;
    let mut next = move || -> f64 {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (state >> 33) as f64 / f64::from(1u32 << 31) * 2.0 - 1.0
    };

    let mut h = Array2::zeros((n, n));
    for i in 0..n {
        h[[i, i]] = c(next(), 0.0);
        for j in (i + 1)..n {
            let x = c(next(), next());
            h[[i, j]] = x;
            h[[j, i]] = x.conj();
        }
    }
    let norm = spectral_norm(&h);
    h.mapv(|x| x / c(1.25 * norm, 0.0))
}

#[test]
fn block_encoding_of_random_hermitian_is_unitary() {
    let h = random_hermitian(3, 7);
    let u = block_encode(&h).unwrap();
    assert_close(&u.dot(&dagger(&u)), &identity(6), 1e-9);
    for i in 0..3 {
        for j in 0..3 {
            assert_eq!(u[[i, j]], h[[i, j]], "top-left block altered");
        }
    }
    assert_close(&dagger(&dagger(&u)), &u, 1e-15);
}

#[test]
fn chebyshev_program_matches_matrix_polynomial() {
    // φ = [π/2; 3] gives i³·T₃(H) = −i·(4H³ − 3H) under the reflection
    // encoding (each Π_{π/2} contributes a global phase i).
    let h = random_hermitian(3, 21);
    let p = qevt(&h, EigenvalueTransform::chebyshev(3).unwrap().phases()).unwrap();

    let h3 = h.dot(&h).dot(&h);
    let t3 = h3.mapv(|x| x * c(4.0, 0.0)) - h.mapv(|x| x * c(3.0, 0.0));
    let expected = t3.mapv(|x| x * c(0.0, -1.0));
    assert_close(&p, &expected, 1e-8);
}

#[test]
fn chebyshev_program_transforms_each_eigenvalue() {
    let h = random_hermitian(3, 3);
    let (eigvals, v) = hermitian_eig(&h);
    let p = qevt(&h, EigenvalueTransform::chebyshev(2).unwrap().phases()).unwrap();

    // Poly(H) shares H's eigenvectors, so V diagonalises it too; each
    // eigenvalue is i²·T₂(λ) = −(2λ² − 1).
    let d = dagger(&v).dot(&p).dot(&v);
    for i in 0..3 {
        for j in 0..3 {
            if i != j {
                assert!(d[[i, j]].norm() < 1e-8, "eigenvectors not preserved");
            }
        }
        let want = c(-chebyshev(2, eigvals[i]), 0.0);
        assert!(
            (d[[i, i]] - want).norm() < 1e-8,
            "eigenvalue {i}: got {:?}, want {want:?}",
            d[[i, i]]
        );
    }
}

#[test]
fn generic_program_reduces_to_scalar_sequence_per_eigenvalue() {
    // The defining property: for any phase list, conjugating Poly(H) by
    // H's eigenbasis is diagonal, and each diagonal entry equals the same
    // composition run on the 1×1 matrix [λ].
    for (phases, seed) in [
        (vec![0.4, -0.9, 1.3], 11u64),          // odd length
        (vec![0.2, 0.5, -0.7, 1.9], 13u64),     // even length
        (vec![1.0], 17u64),                     // minimal program
    ] {
        let h = random_hermitian(4, seed);
        let (eigvals, v) = hermitian_eig(&h);
        let p = qevt(&h, &phases).unwrap();
        let d = dagger(&v).dot(&p).dot(&v);

        for i in 0..4 {
            for j in 0..4 {
                if i != j {
                    assert!(
                        d[[i, j]].norm() < 1e-8,
                        "phases {phases:?}: off-diagonal at ({i}, {j})"
                    );
                }
            }
            let scalar = Array2::from_elem((1, 1), c(eigvals[i], 0.0));
            let want = qevt(&scalar, &phases).unwrap()[[0, 0]];
            assert!(
                (d[[i, i]] - want).norm() < 1e-8,
                "phases {phases:?}, λ={}: got {:?}, want {want:?}",
                eigvals[i],
                d[[i, i]]
            );
        }
    }
}

#[test]
fn composite_unitary_for_both_parities() {
    let h = random_hermitian(2, 5);
    for phases in [vec![0.3, 1.2], vec![0.3, 1.2, -0.4]] {
        let u = EigenvalueTransform::new(phases).unwrap().unitary(&h).unwrap();
        assert_close(&u.dot(&dagger(&u)), &identity(4), 1e-9);
    }
}
