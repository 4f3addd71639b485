//! Dense complex linear algebra for small Hermitian operators.
//!
//! Everything QEVT needs beyond plain matrix products: a Hermitian
//! eigensolver (cyclic complex Jacobi), the principal square root on the
//! PSD branch, and a general matrix exponential (scaling-and-squaring with
//! Padé(13), Higham 2005). All routines work on `Array2<Complex64>` and
//! are tuned for the small dimensions QEVT uses, not for large-scale
//! numerics.

use ndarray::{Array1, Array2, s};
use num_complex::Complex64;

/// Convergence threshold for the Jacobi sweep, relative to the diagonal
/// scale.
const JACOBI_TOL: f64 = 1e-13;

/// Rotation cap per matrix entry; Jacobi converges quadratically, so
/// this is never approached for the dimensions QEVT handles.
const JACOBI_MAX_ROTATIONS_PER_ENTRY: usize = 60;

/// The n×n complex identity.
pub fn identity(n: usize) -> Array2<Complex64> {
    Array2::from_diag_elem(n, Complex64::new(1.0, 0.0))
}

/// Conjugate transpose.
pub fn dagger(a: &Array2<Complex64>) -> Array2<Complex64> {
    a.t().mapv(|x| x.conj())
}

/// Largest entry-wise deviation from Hermiticity, `max |A − A†|`.
pub fn hermitian_deviation(a: &Array2<Complex64>) -> f64 {
    let n = a.nrows();
    let mut max_dev = 0.0f64;
    for i in 0..n {
        for j in 0..n {
            let dev = (a[[i, j]] - a[[j, i]].conj()).norm();
            max_dev = max_dev.max(dev);
        }
    }
    max_dev
}

/// Eigendecomposition of a Hermitian matrix by cyclic complex Jacobi
/// rotations.
///
/// Returns `(λ, V)` with real eigenvalues `λ` in ascending order and a
/// unitary `V` whose columns are the matching eigenvectors, so that
/// `A = V·diag(λ)·V†`. The caller is responsible for Hermiticity; only
/// the upper triangle drives the rotations.
pub fn hermitian_eig(a: &Array2<Complex64>) -> (Array1<f64>, Array2<Complex64>) {
    let n = a.nrows();
    let mut m = a.clone();
    let mut v = identity(n);

    if n > 1 {
        let max_rotations = JACOBI_MAX_ROTATIONS_PER_ENTRY * n * n;
        for _ in 0..max_rotations {
            // Pivot on the largest off-diagonal element.
            let mut off = 0.0f64;
            let (mut p, mut q) = (0, 1);
            for i in 0..n {
                for j in (i + 1)..n {
                    let mag = m[[i, j]].norm();
                    if mag > off {
                        off = mag;
                        p = i;
                        q = j;
                    }
                }
            }
            let scale = (0..n).map(|i| m[[i, i]].norm()).fold(1.0f64, f64::max);
            if off < JACOBI_TOL * scale {
                break;
            }

            rotate(&mut m, &mut v, p, q);
        }
    }

    let mut pairs: Vec<(f64, usize)> = (0..n).map(|i| (m[[i, i]].re, i)).collect();
    pairs.sort_by(|x, y| x.0.total_cmp(&y.0));

    let eigvals = Array1::from_iter(pairs.iter().map(|(lambda, _)| *lambda));
    let mut eigvecs = Array2::zeros((n, n));
    for (dst, (_, src)) in pairs.iter().enumerate() {
        eigvecs.column_mut(dst).assign(&v.column(*src));
    }
    (eigvals, eigvecs)
}

/// One Jacobi similarity `M ← J†·M·J` annihilating the (p, q) entry, with
/// the rotation accumulated into `V ← V·J`.
///
/// For a Hermitian pivot `m_pq = r·e^{iα}` the plane rotation is
///
///   J = [[c, s·e^{iα}], [−s·e^{−iα}, c]]
///
/// restricted to the (p, q) plane, with tan 2φ = 2r / (m_qq − m_pp) and
/// (c, s) = (cos φ, sin φ) chosen as the smaller rotation.
fn rotate(m: &mut Array2<Complex64>, v: &mut Array2<Complex64>, p: usize, q: usize) {
    let n = m.nrows();
    let pivot = m[[p, q]];
    let r = pivot.norm();
    if r == 0.0 {
        return;
    }
    let phase = pivot / Complex64::new(r, 0.0); // e^{iα}

    let app = m[[p, p]].re;
    let aqq = m[[q, q]].re;
    let tau = (aqq - app) / (2.0 * r);
    let t = tau.signum() / (tau.abs() + (1.0 + tau * tau).sqrt());
    let c = 1.0 / (1.0 + t * t).sqrt();
    let sc = Complex64::new(t * c, 0.0);
    let cc = Complex64::new(c, 0.0);

    // Column update M ← M·J.
    for i in 0..n {
        let mip = m[[i, p]];
        let miq = m[[i, q]];
        m[[i, p]] = cc * mip - sc * phase.conj() * miq;
        m[[i, q]] = sc * phase * mip + cc * miq;
    }
    // Row update M ← J†·M.
    for j in 0..n {
        let mpj = m[[p, j]];
        let mqj = m[[q, j]];
        m[[p, j]] = cc * mpj - sc * phase * mqj;
        m[[q, j]] = sc * phase.conj() * mpj + cc * mqj;
    }
    // Force the annihilated pair to exact zero against roundoff drift.
    m[[p, q]] = Complex64::new(0.0, 0.0);
    m[[q, p]] = Complex64::new(0.0, 0.0);

    for i in 0..n {
        let vip = v[[i, p]];
        let viq = v[[i, q]];
        v[[i, p]] = cc * vip - sc * phase.conj() * viq;
        v[[i, q]] = sc * phase * vip + cc * viq;
    }
}

/// Spectral norm of a Hermitian matrix: the largest |λ|.
pub fn spectral_norm(a: &Array2<Complex64>) -> f64 {
    let (eigvals, _) = hermitian_eig(a);
    eigvals.iter().fold(0.0f64, |acc, x| acc.max(x.abs()))
}

/// Principal square root of a Hermitian positive-semidefinite matrix.
///
/// Eigendecomposes, clamps roundoff-negative eigenvalues to zero, and
/// rebuilds `V·diag(√λ)·V†`. The clamp keeps `√(I − H²)` real when H has
/// an eigenvalue on the unit boundary.
pub fn sqrtm_psd(a: &Array2<Complex64>) -> Array2<Complex64> {
    let (eigvals, v) = hermitian_eig(a);
    let roots = Array2::from_diag(&Array1::from_iter(
        eigvals.iter().map(|l| Complex64::new(l.max(0.0).sqrt(), 0.0)),
    ));
    v.dot(&roots).dot(&dagger(&v))
}

/// General matrix exponential by scaling-and-squaring with a Padé(13,13)
/// approximant (Higham 2005, SIAM J. Matrix Anal. Appl. 26(4)).
///
/// Works for any square complex matrix; QEVT feeds it the skew-Hermitian
/// generators of projector-phase gates, but nothing here assumes
/// normality.
///
/// # Panics
/// Panics if the input is not square.
pub fn expm(a: &Array2<Complex64>) -> Array2<Complex64> {
    let n = a.nrows();
    assert_eq!(n, a.ncols(), "expm requires a square matrix");
    if n == 0 {
        return Array2::zeros((0, 0));
    }
    if n == 1 {
        let mut out = Array2::zeros((1, 1));
        out[[0, 0]] = a[[0, 0]].exp();
        return out;
    }

    // Scale A down until ||A/2^s||₁ is inside the Padé(13) radius
    // θ₁₃ = 5.37 (Higham, Table 10.2), approximate, then square back up.
    const THETA_13: f64 = 5.37;
    let norm = one_norm(a);
    let squarings = if norm > THETA_13 {
        (norm / THETA_13).log2().ceil() as u32
    } else {
        0
    };
    let scaled = a * Complex64::new(0.5f64.powi(squarings as i32), 0.0);

    let mut out = pade13(&scaled);
    for _ in 0..squarings {
        out = out.dot(&out);
    }
    out
}

/// Padé(13,13) numerator/denominator coefficients (Higham eq. 10.33).
const PADE13: [f64; 14] = [
    1.0,
    0.5,
    0.12,
    1.833_333_333_333_333_4e-2,
    1.992_753_623_188_405_8e-3,
    1.630_434_782_608_696e-4,
    1.035_196_687_370_600_3e-5,
    5.175_983_436_853_002e-7,
    2.043_151_356_652_5e-8,
    6.306_022_705_717_593e-10,
    1.483_770_048_404_14e-11,
    2.529_153_491_597_966e-13,
    2.810_170_546_219_962_4e-15,
    1.544_049_750_670_309e-17,
];

/// Evaluate the Padé(13,13) approximant of exp(A) for a pre-scaled A.
fn pade13(a: &Array2<Complex64>) -> Array2<Complex64> {
    let n = a.nrows();
    let eye = identity(n);
    let re = |x: f64| Complex64::new(x, 0.0);

    let a2 = a.dot(a);
    let a4 = a2.dot(&a2);
    let a6 = a2.dot(&a4);

    // Odd part U = A·(A6·(b13·A6 + b11·A4 + b9·A2) + b7·A6 + b5·A4 + b3·A2 + b1·I).
    let odd_high = &a6 * re(PADE13[13]) + &a4 * re(PADE13[11]) + &a2 * re(PADE13[9]);
    let odd = odd_high.dot(&a6)
        + &a6 * re(PADE13[7])
        + &a4 * re(PADE13[5])
        + &a2 * re(PADE13[3])
        + &eye * re(PADE13[1]);
    let u = a.dot(&odd);

    // Even part V, same Horner split with the even coefficients.
    let even_high = &a6 * re(PADE13[12]) + &a4 * re(PADE13[10]) + &a2 * re(PADE13[8]);
    let v = even_high.dot(&a6)
        + &a6 * re(PADE13[6])
        + &a4 * re(PADE13[4])
        + &a2 * re(PADE13[2])
        + &eye * re(PADE13[0]);

    // exp(A) ≈ (V − U)⁻¹ · (V + U).
    solve(&v - &u, &v + &u)
}

/// Solve `A·X = B` by Gaussian elimination with partial pivoting.
fn solve(a: Array2<Complex64>, b: Array2<Complex64>) -> Array2<Complex64> {
    let n = a.nrows();
    let m = b.ncols();
    debug_assert_eq!(n, a.ncols());
    debug_assert_eq!(n, b.nrows());

    let mut aug: Array2<Complex64> = Array2::zeros((n, n + m));
    aug.slice_mut(s![.., ..n]).assign(&a);
    aug.slice_mut(s![.., n..]).assign(&b);

    for col in 0..n {
        let pivot_row = (col..n)
            .max_by(|&r1, &r2| aug[[r1, col]].norm().total_cmp(&aug[[r2, col]].norm()))
            .unwrap_or(col);
        if pivot_row != col {
            for j in 0..(n + m) {
                let tmp = aug[[col, j]];
                aug[[col, j]] = aug[[pivot_row, j]];
                aug[[pivot_row, j]] = tmp;
            }
        }
        let pivot = aug[[col, col]];
        // The Padé denominator is well-conditioned after scaling; a
        // vanishing pivot can only come from a caller-corrupted input.
        assert!(pivot.norm() > 1e-300, "singular Padé denominator");
        for row in (col + 1)..n {
            let factor = aug[[row, col]] / pivot;
            for j in col..(n + m) {
                let head = aug[[col, j]];
                aug[[row, j]] -= factor * head;
            }
        }
    }

    let mut x: Array2<Complex64> = Array2::zeros((n, m));
    for col in (0..n).rev() {
        let pivot = aug[[col, col]];
        for j in 0..m {
            let mut sum = aug[[col, n + j]];
            for k in (col + 1)..n {
                sum -= aug[[col, k]] * x[[k, j]];
            }
            x[[col, j]] = sum / pivot;
        }
    }
    x
}

/// Matrix 1-norm: the largest column sum of entry magnitudes.
fn one_norm(a: &Array2<Complex64>) -> f64 {
    let mut max_sum = 0.0f64;
    for col in a.columns() {
        let sum: f64 = col.iter().map(|x| x.norm()).sum();
        max_sum = max_sum.max(sum);
    }
    max_sum
}
