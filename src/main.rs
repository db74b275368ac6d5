use anyhow::Result;
use cellgate_core::metrics::init_logging;
use cellgate_lib::commands;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, global = true, default_value = "cellgate.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Grow, trace and simplify the circuit for one DNA string
    Analyze {
        #[arg(short, long)]
        dna: String,

        /// Disable ANSI colours
        #[arg(long)]
        no_color: bool,

        /// Also write a JSON summary
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Save the connection mask as a NetPBM bitmap
    Mask {
        #[arg(short, long)]
        dna: String,

        #[arg(short, long, default_value = "mask.pbm")]
        output: PathBuf,
    },
    /// Print random DNA strings as a MATLAB cell array
    Random {
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,

        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Print solution DNA from the .rpt files in a directory
    Extract {
        #[arg(short, long)]
        dir: PathBuf,
    },
    /// Count rule usage over the solutions in a directory
    Usage {
        #[arg(short, long)]
        dir: PathBuf,

        /// Write the usage record as CSV
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();
    let mut stdout = std::io::stdout().lock();

    match args.command {
        Command::Analyze { dna, no_color, json } => {
            let config = commands::load_config(&args.config)?;
            commands::run_analyze(&mut stdout, &dna, &config, !no_color, json.as_deref())
        }
        Command::Mask { dna, output } => {
            let config = commands::load_config(&args.config)?;
            commands::run_mask(&mut stdout, &dna, &config, &output)
        }
        Command::Random { count, seed } => commands::run_random(&mut stdout, count, seed),
        Command::Extract { dir } => commands::run_extract(&mut stdout, &dir),
        Command::Usage { dir, output } => {
            let config = commands::load_config(&args.config)?;
            commands::run_usage(&mut stdout, &dir, &config, output.as_deref())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze() {
        let args = Args::parse_from(["cellgate", "analyze", "--dna", "0123", "--no-color"]);
        assert_eq!(args.config, PathBuf::from("cellgate.toml"));
        assert!(matches!(
            args.command,
            Command::Analyze { ref dna, no_color: true, json: None } if dna == "0123"
        ));
    }

    #[test]
    fn test_parse_random_defaults() {
        let args = Args::parse_from(["cellgate", "random", "--seed", "5"]);
        assert!(matches!(
            args.command,
            Command::Random {
                count: 10,
                seed: Some(5)
            }
        ));
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let args = Args::parse_from(["cellgate", "usage", "-d", "runs", "--config", "x.toml"]);
        assert_eq!(args.config, PathBuf::from("x.toml"));
    }
}
