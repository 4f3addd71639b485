//! qsig demo suite.
//!
//! Prints the sample sweeps the library is built for: QSP responses
//! against their target polynomials (Chebyshev, BB1) and QEVT eigenvalue
//! maps. No plotting — each demo emits aligned columns a caller can pipe
//! into any plotting tool.

use console::style;
use ndarray::Array2;
use num_complex::Complex64;

/// Deterministic pseudo-random Hermitian with spectral norm below 1.
///
/// The same seed always yields the same operator, so demo output is
/// reproducible run to run.
pub fn random_hermitian(n: usize, seed: u64) -> Array2<Complex64> {
    let mut state = seed;
    let mut next = move || -> f64 {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (state >> 33) as f64 / f64::from(1u32 << 31) * 2.0 - 1.0
    };

    let mut h = Array2::zeros((n, n));
    for i in 0..n {
        h[[i, i]] = Complex64::new(next(), 0.0);
        for j in (i + 1)..n {
            let x = Complex64::new(next(), next());
            h[[i, j]] = x;
            h[[j, i]] = x.conj();
        }
    }
    let norm = qsig_qevt::linalg::spectral_norm(&h);
    h.mapv(|x| x / Complex64::new(1.25 * norm, 0.0))
}

/// Print a demo header.
pub fn print_header(title: &str) {
    println!();
    println!("{}", style("═".repeat(60)).cyan());
    println!("{}", style(format!("  {title}")).cyan().bold());
    println!("{}", style("═".repeat(60)).cyan());
    println!();
}

/// Print a demo section.
pub fn print_section(title: &str) {
    println!();
    println!("{}", style(format!("▶ {title}")).green().bold());
    println!("{}", style("─".repeat(40)).dim());
}

/// Print a result line.
pub fn print_result(label: &str, value: impl std::fmt::Display) {
    println!("  {} {}", style(format!("{label}:")).dim(), value);
}

/// Print one row of a sweep table.
pub fn print_row(x: f64, got: f64, want: f64) {
    println!("  {x:>8.3}  {got:>12.6}  {want:>12.6}  {:>10.2e}", (got - want).abs());
}

/// Print the sweep table header.
pub fn print_table_header(x_label: &str) {
    println!(
        "  {}",
        style(format!(
            "{x_label:>8}  {:>12}  {:>12}  {:>10}",
            "sequence", "reference", "error"
        ))
        .dim()
    );
}

/// Install the tracing subscriber, honouring `RUST_LOG`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
