use clap::{Parser, Subcommand};
use sheetpack::cli;
use sheetpack::error::SheetpackResult;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sheetpack")]
#[command(about = "Convert Excel workbooks into per-sheet JSON data assets.")]
#[command(long_about = "Sheetpack - spreadsheet-to-JSON conversion for game data pipelines

Each sheet in each workbook becomes one JSON file named after the sheet
(spaces removed). Files, sheets and columns whose name begins with '~'
are skipped, as are the '~$' lock files spreadsheet editors leave next
to open workbooks.

COMMANDS:
  convert - Convert all workbooks in a directory
  check   - Show which workbooks have stale outputs (writes nothing)
  sheets  - List the sheets in one workbook
  watch   - Re-run an incremental convert whenever a workbook changes

EXAMPLES:
  sheetpack convert data/sheets assets/data    # full conversion pass
  sheetpack convert --modified-only            # skip up-to-date files
  sheetpack check                              # dry run against config dirs
  sheetpack watch data/sheets assets/data      # convert on save

BUILD HOOKS:
  The process exits nonzero when conversion fails, so a packaging step
  can be gated on it: sheetpack convert && <build step>

SETTINGS:
  Optional sheetpack.yaml in the working directory (input_path,
  output_path, only_modified_files). Command-line values override it.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Convert every workbook in the input directory to JSON.

Candidate files end in .xls or .xlsx (case-sensitive). Every sheet in
each workbook becomes <SheetNameWithoutSpaces>.json in the output
directory, overwriting whatever is there. Sheets and columns whose name
begins with '~' are dropped, as are columns that are empty in every row
and rows where every cell is empty.

INCREMENTAL MODE:
  --modified-only skips a workbook when every one of its sheets already
  has an output file newer than the workbook itself. A file with at
  least one stale or missing output is converted in full.

FAILURE POLICY:
  Conversion stops at the first file that fails; outputs already written
  stay in place and the process exits nonzero.")]
    /// Convert all workbooks in the input directory to per-sheet JSON
    Convert {
        /// Directory scanned for .xls/.xlsx files (default: config file, then '.')
        input: Option<PathBuf>,

        /// Directory receiving the JSON files (default: config file, then '.')
        output: Option<PathBuf>,

        /// Only process files modified since their outputs were last written
        #[arg(short, long)]
        modified_only: bool,

        /// Show run statistics
        #[arg(short, long)]
        verbose: bool,
    },

    #[command(long_about = "Report which workbooks have stale outputs, without writing.

Lists every candidate workbook in the input directory and whether its
outputs in the output directory are up to date. Useful before a build
to see what a convert run would touch.")]
    /// Show which workbooks have stale outputs (writes nothing)
    Check {
        /// Directory scanned for .xls/.xlsx files (default: config file, then '.')
        input: Option<PathBuf>,

        /// Directory holding the JSON outputs (default: config file, then '.')
        output: Option<PathBuf>,
    },

    /// List the sheets in one workbook
    Sheets {
        /// Path to a .xls or .xlsx file
        file: PathBuf,
    },

    #[command(long_about = "Watch the input directory and convert on change.

Runs an incremental conversion pass whenever a workbook file in the
input directory is added or saved. Events are debounced so a single
save triggers a single run; lock files and non-workbook files are
ignored.

Press Ctrl+C to stop watching.")]
    /// Re-run an incremental convert whenever a workbook changes
    Watch {
        /// Directory to watch for .xls/.xlsx changes (default: config file, then '.')
        input: Option<PathBuf>,

        /// Directory receiving the JSON files (default: config file, then '.')
        output: Option<PathBuf>,

        /// Show run statistics after each pass
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> SheetpackResult<()> {
    // RUST_LOG overrides the default filter, e.g. RUST_LOG=sheetpack=debug
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("sheetpack=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            modified_only,
            verbose,
        } => cli::convert(input, output, modified_only, verbose),

        Commands::Check { input, output } => cli::check(input, output),

        Commands::Sheets { file } => cli::sheets(file),

        Commands::Watch {
            input,
            output,
            verbose,
        } => cli::watch(input, output, verbose),
    }
}
