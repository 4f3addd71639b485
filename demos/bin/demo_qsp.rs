//! Scalar QSP sweeps.
//!
//! Sweeps the signal value across its domain for the Chebyshev phase
//! lists and the rotation angle for BB1, printing the composed response
//! next to the closed-form target.

use clap::Parser;

use qsig_demos::{init_tracing, print_header, print_result, print_row, print_section,
    print_table_header};
use qsig_qsp::reference::{bb1_response, chebyshev};
use qsig_qsp::{PhaseSequence, compose, signal_response};

#[derive(Parser)]
#[command(name = "demo-qsp", about = "QSP sequences vs. their target polynomials")]
struct Args {
    /// Number of samples per sweep.
    #[arg(long, default_value_t = 21)]
    samples: usize,

    /// Highest Chebyshev degree to sweep.
    #[arg(long, default_value_t = 3)]
    max_degree: usize,
}

fn main() {
    init_tracing();
    let args = Args::parse();

    print_header("Quantum Signal Processing");

    for degree in 1..=args.max_degree {
        let phases = PhaseSequence::chebyshev(degree);
        print_section(&format!("Chebyshev T_{degree} (phases: {} zeros)", phases.len()));
        print_table_header("a");
        for i in 0..args.samples {
            let a = -1.0 + 2.0 * i as f64 / (args.samples - 1) as f64;
            let got = signal_response(a, &phases).expect("a in domain by construction");
            print_row(a, got, chebyshev(degree, a));
        }
    }

    let bb1 = PhaseSequence::bb1();
    print_section("BB1 robust rotation (survival probability)");
    print_result("phases", format!("{:.4?}", bb1.angles()));
    print_table_header("theta");
    for i in 0..args.samples {
        let theta = -2.0 + 4.0 * i as f64 / (args.samples - 1) as f64;
        let a = (theta / 2.0).cos();
        let got = compose(a, &bb1).expect("cos is in domain").prob();
        print_row(theta, got, bb1_response(theta));
    }
}
