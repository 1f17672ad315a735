//! # Tension-Ancla CLI Application
//!
//! Terminal front end for the anchor tension calculator.
//!
//! - `calc` works like a submitted form: depth and diameter in, one report out
//!   (text table, or JSON with `--json`)
//! - `panel` opens an interactive Ratatui panel that recomputes on every edit
//! - `constants` prints or writes the default constants as a starting config
//!
//! Logging goes through `env_logger`; set `RUST_LOG=debug` to see each
//! calculation.

mod panel;

use std::io;
use std::path::PathBuf;
use std::process;

use anchor_core::calculations::anchor::calculate;
use anchor_core::constants::PhysicalConstants;
use anchor_core::errors::{CalcError, CalcResult};
use anchor_core::file_io::{load_constants_or_default, save_constants};
use anchor_core::form::{FormInput, FormView};
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "anchor_cli",
    about = "Computes the tension needed to set a tubing anchor and the string stretch"
)]
struct Options {
    #[structopt(subcommand)]
    command: Command,
}

#[derive(StructOpt, Debug)]
enum Command {
    /// Calculate once and print the report
    Calc {
        /// Anchor depth in meters
        #[structopt(long, default_value = "1000", allow_hyphen_values = true)]
        depth_m: String,

        /// Tubing outer diameter in inches (2.875 or 3.5; other sizes are approximated)
        #[structopt(long, default_value = "2.875", allow_hyphen_values = true)]
        diameter_in: String,

        /// Print the raw result as JSON
        #[structopt(long)]
        json: bool,

        /// JSON file overriding the physical constants
        #[structopt(long, parse(from_os_str))]
        constants: Option<PathBuf>,
    },

    /// Open the interactive panel
    Panel {
        /// JSON file overriding the physical constants
        #[structopt(long, parse(from_os_str))]
        constants: Option<PathBuf>,
    },

    /// Print the default constants as JSON, or write them to a file
    Constants {
        #[structopt(long, parse(from_os_str))]
        output: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();
    let options = Options::from_args();

    let outcome = match options.command {
        Command::Calc {
            depth_m,
            diameter_in,
            json,
            constants,
        } => run_calc(&FormInput::new(depth_m, diameter_in), json, constants),
        Command::Panel { constants } => run_panel(constants),
        Command::Constants { output } => run_constants(output),
    };

    if let Err(e) = outcome {
        report_error(&e);
        process::exit(1);
    }
}

fn run_calc(form: &FormInput, json: bool, constants_path: Option<PathBuf>) -> CalcResult<()> {
    let constants = load_constants_or_default(constants_path.as_deref())?;
    let input = form.parse()?;
    let result = calculate(&input, &constants)?;

    if json {
        let text = serde_json::to_string_pretty(&result).map_err(|e| CalcError::SerializationError {
            reason: e.to_string(),
        })?;
        println!("{}", text);
        return Ok(());
    }

    let view = FormView::render(&input, &constants, Some(&result));
    print_view(&view);
    Ok(())
}

fn run_panel(constants_path: Option<PathBuf>) -> CalcResult<()> {
    let constants = load_constants_or_default(constants_path.as_deref())?;
    panel::run(constants).map_err(terminal_failure)
}

fn terminal_failure(e: io::Error) -> CalcError {
    CalcError::terminal_error("run panel", e.to_string())
}

fn run_constants(output: Option<PathBuf>) -> CalcResult<()> {
    let constants = PhysicalConstants::default();
    match output {
        Some(path) => {
            save_constants(&constants, &path)?;
            println!("Wrote default constants to {}", path.display());
        }
        None => {
            let text = serde_json::to_string_pretty(&constants).map_err(|e| {
                CalcError::SerializationError {
                    reason: e.to_string(),
                }
            })?;
            println!("{}", text);
        }
    }
    Ok(())
}

fn print_view(view: &FormView) {
    println!("═══════════════════════════════════════");
    println!("  ANCHOR TENSION");
    println!("═══════════════════════════════════════");
    for (label, value) in view.rows() {
        println!("  {:<22} {:>12}", label, value);
    }
    if let Some(ref results) = view.results {
        if let Some(ref advisory) = results.advisory {
            println!();
            println!("  [WARN] {}", advisory);
        }
        println!("═══════════════════════════════════════");
        println!("  {}", results.summary);
        println!("═══════════════════════════════════════");
    }
}

fn report_error(e: &CalcError) {
    if e.is_invalid_depth() {
        eprintln!("Error: invalid anchor depth ({})", e);
    } else {
        eprintln!("Error: {}", e);
    }
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc_args(args: &[&str]) -> (String, String) {
        let argv: Vec<&str> = ["anchor_cli", "calc"].iter().chain(args).copied().collect();
        match Options::from_iter_safe(argv).unwrap().command {
            Command::Calc {
                depth_m,
                diameter_in,
                ..
            } => (depth_m, diameter_in),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_calc_defaults() {
        assert_eq!(calc_args(&[]), ("1000".to_string(), "2.875".to_string()));
    }

    #[test]
    fn test_negative_depth_reaches_engine() {
        let (depth_m, diameter_in) = calc_args(&["--depth-m", "-5"]);
        assert_eq!(depth_m, "-5");

        let err = run_calc(&FormInput::new(depth_m, diameter_in), false, None).unwrap_err();
        assert!(err.is_invalid_depth());
    }

    #[test]
    fn test_terminal_failure_code() {
        let err = terminal_failure(io::Error::new(io::ErrorKind::Other, "not a tty"));
        assert_eq!(err.error_code(), "TERMINAL_ERROR");
        assert!(!matches!(err, CalcError::FileError { .. }));
    }
}
