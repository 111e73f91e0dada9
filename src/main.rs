use clap::{Parser, Subcommand};
use fundcopy::cli;
use fundcopy::error::CopyResult;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fundcopy")]
#[command(about = "Copy fund exposure tables from raw workbooks into report templates")]
#[command(long_about = "Fundcopy - automated exposure table copying

Each fund profile in the YAML config describes where to find the exposure
table in that fund's raw file and where to paste it in the template.
Values only: formatting, formulas and merged cells are not preserved.

COMMANDS:
  copy        - Extract a fund's table and write a populated template
  list-funds  - List available fund profiles from the config

EXAMPLES:
  fundcopy copy --raw raw.xlsx --template template.xlsx \\
      --fund berry_street --output output.xlsx
  fundcopy copy --raw raw.xlsx --template template.xlsx \\
      --fund berry_street --output output.xlsx --dry-run
  fundcopy list-funds --config config/fund_profiles.yaml")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Copy a fund's exposure table into the template.

Reads the raw file, locates the table per the fund profile (explicit range
or dynamic scan from a start cell), trims blank rows and columns, optionally
clears a block in the template, pastes the values, and writes the result to
a new output file. The template itself is never modified.

Use --dry-run to preview the extracted table without writing anything.")]
    /// Copy a fund's exposure table into the template
    Copy {
        /// Path to the raw fund Excel file
        #[arg(long)]
        raw: PathBuf,

        /// Path to the template Excel file
        #[arg(long)]
        template: PathBuf,

        /// Fund profile name to use
        #[arg(long)]
        fund: String,

        /// YAML config path
        #[arg(long, default_value = "config/fund_profiles.yaml")]
        config: PathBuf,

        /// Where to write the populated template
        #[arg(long)]
        output: PathBuf,

        /// Preview the extracted table without writing the output file
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Show verbose steps
        #[arg(short, long)]
        verbose: bool,
    },

    /// List available fund profiles from the config
    ListFunds {
        /// YAML config path
        #[arg(long, default_value = "config/fund_profiles.yaml")]
        config: PathBuf,
    },
}

fn main() -> CopyResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Copy {
            raw,
            template,
            fund,
            config,
            output,
            dry_run,
            verbose,
        } => cli::copy(raw, template, fund, config, output, dry_run, verbose),

        Commands::ListFunds { config } => cli::list_funds(config),
    }
}
