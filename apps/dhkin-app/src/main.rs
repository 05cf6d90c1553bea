//! Forward-kinematics CLI.
//!
//! Consumes the engine's output tuple and renders it: per-joint transforms,
//! cumulative base-to-joint transforms, and the end-effector pose. The math
//! lives in `dhkin-fk`; this binary only parses arguments and prints.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use nalgebra::Matrix4;
use tracing::{error, info, Level};

use dhkin_core::{DhkinError, RobotConfig};
use dhkin_fk::{presets, Convention, DhTable, FkEngine, FkSolution};

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

/// DH forward kinematics for serial revolute manipulators.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate forward kinematics for a joint configuration.
    Fk {
        /// Robot description TOML (mutually exclusive with --preset).
        #[arg(short, long, conflicts_with = "preset")]
        config: Option<PathBuf>,

        /// Built-in table: currently `panda7`.
        #[arg(short, long)]
        preset: Option<String>,

        /// DH convention when using a preset.
        #[arg(long, default_value = "modified")]
        convention: String,

        /// Joint angles, one per joint (radians unless --degrees).
        #[arg(short, long, num_args = 1.., allow_hyphen_values = true)]
        q: Vec<f64>,

        /// Evaluate at the all-zero configuration.
        #[arg(long, conflicts_with = "q")]
        zeros: bool,

        /// Interpret the joint angles as degrees.
        #[arg(long)]
        degrees: bool,

        /// Also print each base-to-joint cumulative transform.
        #[arg(long)]
        cumulative: bool,
    },

    /// Print version and supported conventions.
    Info,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), DhkinError> {
    match cli.command {
        Commands::Fk {
            config,
            preset,
            convention,
            q,
            zeros,
            degrees,
            cumulative,
        } => {
            let engine = build_engine(config, preset.as_deref(), &convention)?;
            let q = joint_angles(&q, zeros, degrees, engine.dof());
            info!(
                dof = engine.dof(),
                convention = %engine.convention(),
                "evaluating forward kinematics"
            );
            let solution = engine.solve(&q)?;
            print_solution(&solution, cumulative);
            Ok(())
        }
        Commands::Info => {
            println!("dhkin {}", env!("CARGO_PKG_VERSION"));
            println!("conventions: standard, modified (Craig)");
            println!("presets: panda7");
            Ok(())
        }
    }
}

fn build_engine(
    config: Option<PathBuf>,
    preset: Option<&str>,
    convention: &str,
) -> Result<FkEngine<f64>, DhkinError> {
    match (config, preset) {
        (Some(path), _) => {
            let config = RobotConfig::from_file(path)?;
            Ok(FkEngine::from_config(&config)?)
        }
        (None, preset) => {
            let table: DhTable<f64> = match preset.unwrap_or("panda7") {
                "panda7" => presets::panda7(),
                other => {
                    return Err(dhkin_core::ConfigError::UnknownPreset(other.to_string()).into())
                }
            };
            let convention: Convention = convention.parse().map_err(DhkinError::Config)?;
            Ok(FkEngine::new(table, convention)?)
        }
    }
}

fn joint_angles(q: &[f64], zeros: bool, degrees: bool, dof: usize) -> Vec<f64> {
    if zeros || q.is_empty() {
        return vec![0.0; dof];
    }
    if degrees {
        q.iter().map(|angle| angle.to_radians()).collect()
    } else {
        q.to_vec()
    }
}

fn print_solution(solution: &FkSolution<f64>, cumulative: bool) {
    for (i, matrix) in solution.per_joint.iter().enumerate() {
        println!("A_{} (frame {} -> frame {}):", i + 1, i + 1, i);
        print_matrix(matrix);
    }
    if cumulative {
        for (i, matrix) in solution.cumulative.iter().enumerate() {
            println!("T_0_{} (base -> frame {}):", i + 1, i + 1);
            print_matrix(matrix);
        }
    }
    println!("End-effector (base -> frame {}):", solution.per_joint.len());
    print_matrix(&solution.end_effector);
    let t = solution.end_effector_translation();
    println!("translation: [{:+.6}, {:+.6}, {:+.6}]", t.x, t.y, t.z);
}

fn print_matrix(matrix: &Matrix4<f64>) {
    for row in 0..4 {
        print!(" ");
        for col in 0..4 {
            print!(" {:+.6}", matrix[(row, col)]);
        }
        println!();
    }
    println!();
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
