/* embcordic | main.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Prints CORDIC accuracy tables against the floating-point functions */

/******************************************************************************/

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use embcordic::report::{Function, Report, SweepConfig};

/******************************************************************************/

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Selection {
    Cos,
    Sin,
    Both
}

impl Selection {
    fn functions(self) -> &'static [Function] {
        match self {
            Selection::Cos => &[Function::Cos],
            Selection::Sin => &[Function::Sin],
            Selection::Both => &[Function::Cos, Function::Sin]
        }
    }
}

/// Compares fixed-point CORDIC sine and cosine with the floating-point functions
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of CORDIC iterations
    #[arg(short = 'n', long, default_value_t = embcordic::DEFAULT_ITERATIONS)]
    iterations: u32,

    /// First angle of the sweep, in degrees
    #[arg(long, default_value_t = -90, allow_negative_numbers = true)]
    start: i32,

    /// Last angle of the sweep, in degrees
    #[arg(long, default_value_t = 90, allow_negative_numbers = true)]
    stop: i32,

    /// Angle increment, in degrees
    #[arg(long, default_value_t = 10)]
    step: i32,

    /// Functions to compare
    #[arg(short, long, value_enum, default_value_t = Selection::Both)]
    function: Selection,

    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8
}

impl Args {
    fn sweep_config(&self) -> SweepConfig {
        SweepConfig {
            start: self.start,
            stop: self.stop,
            step: self.step,
            iterations: self.iterations
        }
    }
}

/******************************************************************************/

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let config = args.sweep_config();
    log::info!(
        "CORDIC Q{} sweep from {}° to {}° by {}°, {} iterations",
        embcordic::FRACTIONAL_BITS,
        config.start,
        config.stop,
        config.step,
        config.iterations
    );

    for (i, &function) in args.function.functions().iter().enumerate() {
        let report = Report::sweep(function, &config)
            .with_context(|| format!("cannot build the {:?} comparison table", function))?;
        if i > 0 {
            println!("\n");
        }
        println!("{}", report);
        if let Some(worst) = report.worst() {
            log::info!(
                "{:?}: worst error {:.3e} at {}° ({} bits)",
                function,
                worst.error,
                worst.angle,
                worst.bits
            );
        }
    }

    Ok(())
}
