mod error;

use clap::{Args, Parser, Subcommand, ValueEnum};
use error::{CliError, CliResult};
use std::path::{Path, PathBuf};
use zf_core::{Bracket, OperatingPoint};
use zf_gas::{GasSample, operating_point, parse_pressure, parse_temperature};
use zf_solver::{
    BisectionConfig, BisectionOutcome, BisectionStep, Sensitivity, solve_derivative,
    solve_z_with_observer,
};
use zf_sweeps::compute_family;

#[derive(Parser)]
#[command(name = "zfactor")]
#[command(about = "Natural gas compressibility factor (DAK) calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Z at a field pressure and temperature
    Z {
        /// Absolute pressure, e.g. "3250 psia" or "221 atm" (plain number: atm)
        #[arg(long)]
        pressure: String,
        /// Temperature, e.g. "213 F" or "100 C" (plain number: °C)
        #[arg(long)]
        temperature: String,
        /// Gas specific gravity (air = 1)
        #[arg(long)]
        sg: f64,
        #[command(flatten)]
        z_bracket: ZBracketArgs,
        #[command(flatten)]
        solver: SolverArgs,
        /// Print every bisection step
        #[arg(long)]
        trace: bool,
    },
    /// Z at a pseudo-reduced operating point
    ZReduced {
        #[arg(long)]
        ppr: f64,
        #[arg(long)]
        tpr: f64,
        #[command(flatten)]
        z_bracket: ZBracketArgs,
        #[command(flatten)]
        solver: SolverArgs,
        /// Print every bisection step
        #[arg(long)]
        trace: bool,
    },
    /// dZ/dTpr or dZ/dPpr at a pseudo-reduced operating point
    Derivative {
        /// Independent variable
        #[arg(long, value_enum)]
        wrt: WrtArg,
        #[arg(long)]
        ppr: f64,
        #[arg(long)]
        tpr: f64,
        /// Lower end of the derivative bracket
        #[arg(long, allow_hyphen_values = true)]
        low: f64,
        /// Upper end of the derivative bracket
        #[arg(long, allow_hyphen_values = true)]
        high: f64,
        #[command(flatten)]
        z_bracket: ZBracketArgs,
        #[command(flatten)]
        solver: SolverArgs,
    },
    /// Compute the curve family described by a study file
    Sweep {
        /// Path to the study YAML (or .json) file
        study_path: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Csv)]
        format: Format,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate study file syntax and structure
    Validate {
        /// Path to the study YAML (or .json) file
        study_path: PathBuf,
    },
}

#[derive(Args, Clone, Copy)]
struct ZBracketArgs {
    /// Lower end of the Z bracket
    #[arg(long, default_value_t = Bracket::Z_DEFAULT.low)]
    z_low: f64,
    /// Upper end of the Z bracket
    #[arg(long, default_value_t = Bracket::Z_DEFAULT.high)]
    z_high: f64,
}

impl ZBracketArgs {
    fn bracket(self) -> Bracket {
        Bracket::new(self.z_low, self.z_high)
    }
}

#[derive(Args, Clone, Copy)]
struct SolverArgs {
    /// Bracket width at which bisection stops
    #[arg(long, default_value_t = BisectionConfig::DEFAULT_TOLERANCE)]
    tolerance: f64,
    /// Iteration cap
    #[arg(long, default_value_t = BisectionConfig::DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,
}

impl SolverArgs {
    fn config(self) -> BisectionConfig {
        BisectionConfig {
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum WrtArg {
    Tpr,
    Ppr,
}

impl From<WrtArg> for Sensitivity {
    fn from(arg: WrtArg) -> Self {
        match arg {
            WrtArg::Tpr => Sensitivity::Tpr,
            WrtArg::Ppr => Sensitivity::Ppr,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
enum Format {
    Csv,
    Json,
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Z {
            pressure,
            temperature,
            sg,
            z_bracket,
            solver,
            trace,
        } => cmd_z(&pressure, &temperature, sg, z_bracket.bracket(), solver.config(), trace),
        Commands::ZReduced {
            ppr,
            tpr,
            z_bracket,
            solver,
            trace,
        } => cmd_z_reduced(
            OperatingPoint::new(ppr, tpr),
            z_bracket.bracket(),
            solver.config(),
            trace,
        ),
        Commands::Derivative {
            wrt,
            ppr,
            tpr,
            low,
            high,
            z_bracket,
            solver,
        } => cmd_derivative(
            wrt.into(),
            OperatingPoint::new(ppr, tpr),
            Bracket::new(low, high),
            z_bracket.bracket(),
            solver.config(),
        ),
        Commands::Sweep {
            study_path,
            format,
            output,
        } => cmd_sweep(&study_path, format, output.as_deref()),
        Commands::Validate { study_path } => cmd_validate(&study_path),
    }
}

fn cmd_z(
    pressure: &str,
    temperature: &str,
    sg: f64,
    bracket: Bracket,
    config: BisectionConfig,
    trace: bool,
) -> CliResult<()> {
    let gas = GasSample::new(sg)?;
    let p = parse_pressure(pressure)?;
    let t = parse_temperature(temperature)?;
    println!("Gas: sg = {sg}  Ppc = {:.3} psia  Tpc = {:.3} K", gas.ppc(), gas.tpc());
    cmd_z_reduced(operating_point(p, t, &gas), bracket, config, trace)
}

fn cmd_z_reduced(
    point: OperatingPoint,
    bracket: Bracket,
    config: BisectionConfig,
    trace: bool,
) -> CliResult<()> {
    print_point(point);
    let mut print_step = |step: &BisectionStep| {
        println!(
            "  {:>3}  [{:.7}, {:.7}]  z = {:.7}  f = {:+.3e}",
            step.iteration, step.lower, step.upper, step.midpoint, step.residual
        );
    };
    let observer: Option<&mut dyn FnMut(&BisectionStep)> = if trace {
        Some(&mut print_step)
    } else {
        None
    };
    let outcome = solve_z_with_observer(point, bracket, &config, observer)?;
    print_outcome("Z", &outcome);
    Ok(())
}

fn cmd_derivative(
    wrt: Sensitivity,
    point: OperatingPoint,
    derivative_bracket: Bracket,
    z_bracket: Bracket,
    config: BisectionConfig,
) -> CliResult<()> {
    print_point(point);
    let solution = solve_derivative(wrt, point, derivative_bracket, z_bracket, &config)?;
    print_outcome("Z", &solution.z);
    print_outcome(&wrt.to_string(), &solution.derivative);
    Ok(())
}

fn cmd_sweep(study_path: &Path, format: Format, output: Option<&Path>) -> CliResult<()> {
    let study = load_study(study_path)?;
    let request = study.to_family_request()?;
    let family = compute_family(&request)?;

    let content = match format {
        Format::Csv => family.to_csv(),
        Format::Json => family.to_json()?,
    };

    match output {
        Some(path) => {
            std::fs::write(path, content).map_err(|source| CliError::OutputWrite {
                path: path.to_path_buf(),
                source,
            })?;
            eprintln!(
                "✓ {}: {} curves, {} points ({} converged, {} failed) -> {}",
                study.name,
                family.curves.len(),
                family.num_points(),
                family.num_converged(),
                family.num_failed(),
                path.display()
            );
        }
        None => print!("{content}"),
    }
    Ok(())
}

fn cmd_validate(study_path: &Path) -> CliResult<()> {
    println!("Validating study: {}", study_path.display());
    let study = load_study(study_path)?;
    zf_study::validate_study(&study).map_err(zf_study::StudyError::from)?;
    println!("✓ Study is valid");
    Ok(())
}

fn load_study(path: &Path) -> CliResult<zf_study::Study> {
    let study = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => zf_study::load_json(path)?,
        _ => zf_study::load_yaml(path)?,
    };
    tracing::debug!(
        path = %path.display(),
        name = %study.name,
        quantity = %study.quantity,
        "loaded study"
    );
    Ok(study)
}

fn print_point(point: OperatingPoint) {
    println!("Ppr = {:.6}  Tpr = {:.6}", point.ppr, point.tpr);
    if !point.within_dak_range() {
        println!("  note: outside the DAK fitting range (0.2 <= Ppr <= 30, 1 <= Tpr <= 3)");
    }
}

fn print_outcome(label: &str, outcome: &BisectionOutcome) {
    let mark = if outcome.converged { "✓" } else { "✗" };
    println!(
        "{mark} {label} = {:.7}  iterations = {}  status = {}",
        outcome.value, outcome.iterations, outcome.status
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn derivative_accepts_negative_bracket() {
        let cli = Cli::try_parse_from([
            "zfactor",
            "derivative",
            "--wrt",
            "tpr",
            "--ppr",
            "2",
            "--tpr",
            "1.5",
            "--low",
            "-5",
            "--high",
            "0",
        ])
        .unwrap();
        match cli.command {
            Commands::Derivative { low, high, z_bracket, .. } => {
                assert_eq!((low, high), (-5.0, 0.0));
                assert_eq!(z_bracket.bracket(), Bracket::Z_DEFAULT);
            }
            _ => panic!("expected derivative command"),
        }
    }

    #[test]
    fn sweep_defaults_to_csv() {
        let cli = Cli::try_parse_from(["zfactor", "sweep", "study.yaml"]).unwrap();
        match cli.command {
            Commands::Sweep { format, output, .. } => {
                assert_eq!(format, Format::Csv);
                assert!(output.is_none());
            }
            _ => panic!("expected sweep command"),
        }
    }
}
