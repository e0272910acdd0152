use clap::{Parser, Subcommand, ValueEnum};
use fl_core::{DEFAULT_TOLERANCE, Real, Tolerance};
use fl_lab::{
    DifferenceScheme, Sweep, SweepType, best_step, compare_formulas, decades, error_sweep,
    one_plus_small, sqrt_difference, standard_probes,
};
use fl_roots::{QuadraticCoefficients, solve_quadratic, solve_quadratic_real};
use serde::Serialize;
use tracing::Level;

mod error;
mod report;

use error::CliResult;
use report::{EqualReport, SolveReport};

/// 10^-300 and 10^300 are still normal doubles.
const MAX_DECADES: u32 = 300;

#[derive(Parser)]
#[command(name = "fl-cli")]
#[command(about = "floatlab CLI - floating point pitfalls, measured", long_about = None)]
struct Cli {
    /// Print JSON instead of tables
    #[arg(long, global = true)]
    json: bool,
    /// Log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two numbers exactly and within a tolerance
    #[command(allow_negative_numbers = true)]
    Equal {
        x: Real,
        y: Real,
        /// Tolerance (absolute unless --relative)
        #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
        tol: Real,
        /// Scale the tolerance by max(|x|, |y|, 1)
        #[arg(long)]
        relative: bool,
    },
    /// Solve a·x² + b·x + c = 0 with the stable formula
    #[command(allow_negative_numbers = true)]
    Solve {
        a: Real,
        b: Real,
        c: Real,
        /// Fail instead of returning complex roots
        #[arg(long)]
        real_only: bool,
    },
    /// Classic equality probes (0.1 + 0.2 vs 0.3, ...)
    Probes {
        #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
        tol: Real,
    },
    /// Catastrophic cancellation tables
    Cancel {
        /// Number of decades to tabulate
        #[arg(
            long,
            default_value_t = 16,
            value_parser = clap::value_parser!(u32).range(1..=MAX_DECADES as i64)
        )]
        points: u32,
    },
    /// Textbook vs stable quadratic formula
    #[command(allow_negative_numbers = true)]
    Compare { a: Real, b: Real, c: Real },
    /// Finite-difference error against step size
    #[command(allow_negative_numbers = true)]
    Derivative {
        /// Function to differentiate
        #[arg(long, value_enum, default_value_t = TestFunction::Sin)]
        function: TestFunction,
        /// Point of evaluation
        #[arg(long, default_value_t = 1.0)]
        x: Real,
        /// Largest step
        #[arg(long, default_value_t = 1e-1)]
        from: Real,
        /// Smallest step
        #[arg(long, default_value_t = 1e-15)]
        to: Real,
        /// Number of log-spaced steps
        #[arg(long, default_value_t = 15)]
        points: usize,
        /// Use the central difference instead of the forward one
        #[arg(long)]
        central: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TestFunction {
    Sin,
    Exp,
}

impl TestFunction {
    fn value(self, x: Real) -> Real {
        match self {
            TestFunction::Sin => x.sin(),
            TestFunction::Exp => x.exp(),
        }
    }

    fn derivative(self, x: Real) -> Real {
        match self {
            TestFunction::Sin => x.cos(),
            TestFunction::Exp => x.exp(),
        }
    }
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let json = cli.json;
    match cli.command {
        Commands::Equal {
            x,
            y,
            tol,
            relative,
        } => cmd_equal(x, y, tol, relative, json),
        Commands::Solve { a, b, c, real_only } => cmd_solve(a, b, c, real_only, json),
        Commands::Probes { tol } => cmd_probes(tol, json),
        Commands::Cancel { points } => cmd_cancel(points, json),
        Commands::Compare { a, b, c } => cmd_compare(a, b, c, json),
        Commands::Derivative {
            function,
            x,
            from,
            to,
            points,
            central,
        } => cmd_derivative(function, x, from, to, points, central, json),
    }
}

fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cmd_equal(x: Real, y: Real, tol: Real, relative: bool, json: bool) -> CliResult<()> {
    let tolerance = if relative {
        Tolerance::relative(tol)?
    } else {
        Tolerance::absolute(tol)?
    };
    let report = EqualReport {
        x,
        y,
        tolerance,
        exact_equal: x == y,
        approx_equal: tolerance.admits(x, y),
    };
    if json {
        return print_json(&report);
    }

    println!("x = {x:e}, y = {y:e}, |x - y| = {:e}", (x - y).abs());
    println!("  x == y      : {}", report.exact_equal);
    println!("  within {tolerance:?}: {}", report.approx_equal);
    Ok(())
}

fn cmd_solve(a: Real, b: Real, c: Real, real_only: bool, json: bool) -> CliResult<()> {
    let coefficients = QuadraticCoefficients::new(a, b, c);
    let solution = if real_only {
        solve_quadratic_real(a, b, c)?
    } else {
        solve_quadratic(a, b, c)?
    };
    if json {
        return print_json(&SolveReport::new(coefficients, &solution));
    }

    println!("{coefficients} = 0");
    println!("  kind: {}", solution.kind());
    if let Some(pair) = solution.roots() {
        println!("  x1 = {}", pair.x1);
        println!("  x2 = {}", pair.x2);
    }
    Ok(())
}

fn cmd_probes(tol: Real, json: bool) -> CliResult<()> {
    let probes = standard_probes(Tolerance::absolute(tol)?);
    if json {
        return print_json(&probes);
    }

    println!(
        "{:<20} {:>24} {:>24} {:>10} {:>6} {:>6}",
        "probe", "lhs", "rhs", "|diff|", "==", "≈"
    );
    for p in &probes {
        println!(
            "{:<20} {:>24} {:>24} {:>10.2e} {:>6} {:>6}",
            p.label, p.lhs, p.rhs, p.difference, p.exact_equal, p.approx_equal
        );
    }
    Ok(())
}

fn cmd_cancel(points: u32, json: bool) -> CliResult<()> {
    let last = (points.clamp(1, MAX_DECADES) - 1) as i32;
    let small = one_plus_small(&decades(-1, -1 - last));
    let large = sqrt_difference(&decades(0, last));
    if json {
        #[derive(Serialize)]
        struct CancelReport<T, U> {
            one_plus_small: T,
            sqrt_difference: U,
        }
        return print_json(&CancelReport {
            one_plus_small: &small,
            sqrt_difference: &large,
        });
    }

    println!("(1 + x) - 1");
    println!("{:>10} {:>24} {:>12}", "x", "computed", "rel. error");
    for row in &small {
        println!("{:>10.0e} {:>24e} {:>12.2e}", row.x, row.computed, row.relative_error);
    }
    println!();
    println!("sqrt(x + 1) - sqrt(x) vs 1 / (sqrt(x + 1) + sqrt(x))");
    println!("{:>10} {:>24} {:>24} {:>12}", "x", "naive", "rewritten", "rel. error");
    for row in &large {
        println!(
            "{:>10.0e} {:>24e} {:>24e} {:>12.2e}",
            row.x, row.naive, row.rewritten, row.relative_error
        );
    }
    Ok(())
}

fn cmd_compare(a: Real, b: Real, c: Real, json: bool) -> CliResult<()> {
    let comparison = compare_formulas(QuadraticCoefficients::new(a, b, c))?;
    if json {
        return print_json(&comparison);
    }

    println!("{} = 0", comparison.coefficients);
    println!(
        "{:>24} {:>24} {:>12} {:>12} {:>12}",
        "naive", "stable", "|p(naive)|", "|p(stable)|", "rel. diff"
    );
    for r in &comparison.roots {
        println!(
            "{:>24e} {:>24e} {:>12.2e} {:>12.2e} {:>12.2e}",
            r.naive, r.stable, r.naive_residual, r.stable_residual, r.disagreement
        );
    }
    Ok(())
}

fn cmd_derivative(
    function: TestFunction,
    x: Real,
    from: Real,
    to: Real,
    points: usize,
    central: bool,
    json: bool,
) -> CliResult<()> {
    let scheme = if central {
        DifferenceScheme::Central
    } else {
        DifferenceScheme::Forward
    };
    let sweep = Sweep::new(from, to, points, SweepType::Logarithmic)?;
    let series = error_sweep(
        |t| function.value(t),
        |t| function.derivative(t),
        x,
        &sweep,
        scheme,
    )?;
    if json {
        return print_json(&series);
    }

    println!("{function:?}'({x}) by {scheme:?} difference, {sweep}");
    println!("{:>10} {:>24} {:>12}", "h", "estimate", "error");
    for p in &series {
        println!("{:>10.2e} {:>24e} {:>12.2e}", p.h, p.estimate, p.error);
    }
    if let Some(best) = best_step(&series) {
        println!("best h = {:.2e} (error {:.2e})", best.h, best.error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_negative_coefficients() {
        let cli = Cli::try_parse_from(["fl-cli", "solve", "0", "2", "-4"]).unwrap();
        match cli.command {
            Commands::Solve { a, b, c, real_only } => {
                assert_eq!((a, b, c), (0.0, 2.0, -4.0));
                assert!(!real_only);
            }
            _ => panic!("expected solve"),
        }
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["fl-cli", "probes", "--json", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn derivative_defaults() {
        let cli = Cli::try_parse_from(["fl-cli", "derivative", "--central"]).unwrap();
        match cli.command {
            Commands::Derivative {
                x, from, to, points, central, ..
            } => {
                assert_eq!(x, 1.0);
                assert_eq!(from, 1e-1);
                assert_eq!(to, 1e-15);
                assert_eq!(points, 15);
                assert!(central);
            }
            _ => panic!("expected derivative"),
        }
    }

    #[test]
    fn cancel_points_are_bounded() {
        let cli = Cli::try_parse_from(["fl-cli", "cancel", "--points", "300"]).unwrap();
        assert!(matches!(cli.command, Commands::Cancel { points: 300 }));
        assert!(Cli::try_parse_from(["fl-cli", "cancel", "--points", "301"]).is_err());
        assert!(Cli::try_parse_from(["fl-cli", "cancel", "--points", "0"]).is_err());
        assert!(Cli::try_parse_from(["fl-cli", "cancel", "--points", "2147483649"]).is_err());
        assert!(cmd_cancel(u32::MAX, true).is_ok());
    }

    #[test]
    fn negative_tolerance_is_an_error() {
        assert!(cmd_equal(1.0, 1.0, -1.0, false, true).is_err());
    }
}
