use clap::{Parser, Subcommand};
use daybook::cli;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "daybook")]
#[command(about = "Read and write per-day rows of a shared Excel workbook via Microsoft Graph")]
#[command(long_about = "Daybook - daily data entry for a shared Excel workbook

Each employee on the roster owns one table in the workbook; every table keys
its rows by the date in the first column, stored as a 1900-system serial.
Daybook finds the row for a date and reads or rewrites it in place.

COMMANDS:
  employees - List the roster
  whoami    - Show the signed-in Graph user and their roster match
  export    - Fetch the row for a date as a YAML entry
  submit    - Write a YAML entry into its date's row
  fetch     - Download a drive file's text content by name
  serial    - Convert between dates and 1900-system serials

AUTHENTICATION:
  Network commands need a Microsoft Graph bearer token with Sites.ReadWrite.All
  and Files.ReadWrite.All, via --token or the DAYBOOK_GRAPH_TOKEN environment
  variable. Acquiring the token (device code, broker, az cli) is out of scope.

EXAMPLES:
  daybook employees --roster roster.yaml
  daybook export --roster roster.yaml --date 4/July/2025 -o friday.yaml
  daybook submit --roster roster.yaml friday.yaml --dry-run
  daybook serial 4/July/2025")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the employees on the roster
    Employees {
        /// Path to the roster YAML file
        #[arg(short, long)]
        roster: PathBuf,
    },

    /// Show the signed-in Graph user and their roster match
    Whoami {
        /// Path to the roster YAML file
        #[arg(short, long)]
        roster: PathBuf,

        /// Graph bearer token (falls back to DAYBOOK_GRAPH_TOKEN)
        #[arg(long)]
        token: Option<String>,
    },

    #[command(long_about = "Export one day's row as a YAML entry.

Locates the row whose date cell matches the given date and converts it back
into an entry file, suitable for editing and resubmitting.

The date accepts month names or numbers: 4/July/2025 and 04/07/2025 are the
same day. A date with no row in the table is reported as not found; that is
distinct from a malformed date or a failed request.

EXAMPLES:
  daybook export --roster roster.yaml --date 4/July/2025
  daybook export --roster roster.yaml --date 4/7/2025 --employee \"Katerina G\" -o out.yaml")]
    /// Export one day's row as a YAML entry
    Export {
        /// Path to the roster YAML file
        #[arg(short, long)]
        roster: PathBuf,

        /// Date to export (day/month/year, month name or number)
        #[arg(short, long)]
        date: String,

        /// Employee display name (default: match the signed-in user)
        #[arg(short, long)]
        employee: Option<String>,

        /// Write the entry here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Graph bearer token (falls back to DAYBOOK_GRAPH_TOKEN)
        #[arg(long)]
        token: Option<String>,
    },

    #[command(long_about = "Submit a YAML entry into its date's row.

Reads the entry file, locates the row matching its date, and rewrites that
row wholesale: the date cell as a 1900-system serial with dd/mm/yyyy display
format, the twenty metric cells as entered.

The employee is taken from --employee, then from the entry file's 'employee'
field, then by matching the signed-in user against the roster.

Use --dry-run to locate the row without writing.

EXAMPLES:
  daybook submit --roster roster.yaml friday.yaml
  daybook submit --roster roster.yaml friday.yaml --employee \"Katerina G\" --dry-run")]
    /// Submit a YAML entry into its date's row
    Submit {
        /// Path to the roster YAML file
        #[arg(short, long)]
        roster: PathBuf,

        /// Path to the entry YAML file
        file: PathBuf,

        /// Employee display name (default: entry file, then signed-in user)
        #[arg(short, long)]
        employee: Option<String>,

        /// Locate the row but write nothing
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Graph bearer token (falls back to DAYBOOK_GRAPH_TOKEN)
        #[arg(long)]
        token: Option<String>,
    },

    /// Download a drive file's text content by name
    Fetch {
        /// Path to the roster YAML file
        #[arg(short, long)]
        roster: PathBuf,

        /// File name in the drive root (e.g. notes.txt)
        name: String,

        /// Write the content here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Graph bearer token (falls back to DAYBOOK_GRAPH_TOKEN)
        #[arg(long)]
        token: Option<String>,
    },

    /// Convert between dates and 1900-system serial numbers
    Serial {
        /// Date to convert (day/month/year)
        date: Option<String>,

        /// Convert a serial number back to its date instead
        #[arg(long, conflicts_with = "date")]
        from: Option<i64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "daybook=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Employees { roster } => cli::employees(roster),

        Commands::Whoami { roster, token } => cli::whoami(roster, token).await,

        Commands::Export {
            roster,
            date,
            employee,
            output,
            token,
        } => cli::export(roster, employee, date, output, token).await,

        Commands::Submit {
            roster,
            file,
            employee,
            dry_run,
            token,
        } => cli::submit(roster, file, employee, dry_run, token).await,

        Commands::Fetch {
            roster,
            name,
            output,
            token,
        } => cli::fetch(roster, name, output, token).await,

        Commands::Serial { date, from } => cli::serial(date, from),
    }?;
    Ok(())
}
