use clap::{ArgAction, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use aiux::audit::{run_audit, AuditError, AuditRequest, AuditResult};
use aiux::logging::{init_logging, LoggingConfig};
use aiux::report::{render_reports, ReportFormat};
use aiux::ui::Console;

#[derive(Parser, Debug)]
#[command(name = "aiux")]
#[command(version)]
#[command(about = "ai-ux-auditor CLI")]
struct Cli {
    /// Suppress all output except errors
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(long, short, action = ArgAction::Count, global = true, conflicts_with = "quiet")]
    verbose: u8,

    /// Disable colors (also respects NO_COLOR environment variable)
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run audit and produce canonical artifacts.
    Audit {
        /// DOM snapshot JSON
        #[arg(long, value_name = "PATH")]
        dom: Option<PathBuf>,

        /// Folder of screenshots
        #[arg(long, value_name = "PATH")]
        screenshots: Option<PathBuf>,

        /// CSV of survey responses
        #[arg(long, value_name = "PATH")]
        surveys: Option<PathBuf>,

        /// Folder of transcripts
        #[arg(long, value_name = "PATH")]
        transcripts: Option<PathBuf>,

        /// YAML config
        #[arg(long, value_name = "PATH")]
        config: PathBuf,

        /// Output run dir
        #[arg(long = "out", value_name = "DIR")]
        out_dir: PathBuf,
    },
    /// Render human-readable reports from canonical artifacts.
    Report {
        /// Run dir from `aiux audit`
        #[arg(long = "run", value_name = "DIR")]
        run_dir: PathBuf,

        /// Comma-separated: json,csv,md,pdf
        #[arg(long = "format", value_name = "LIST", default_value = "md")]
        formats: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(LoggingConfig::from_flags(cli.verbose, cli.quiet));

    let console = Console::new()
        .with_color(!cli.no_color)
        .with_quiet(cli.quiet);

    let result = match cli.command {
        Commands::Audit {
            dom,
            screenshots,
            surveys,
            transcripts,
            config,
            out_dir,
        } => {
            let request = AuditRequest {
                dom,
                screenshots,
                surveys,
                transcripts,
                config,
                out_dir,
            };
            audit_command(&request, &console)
        }
        Commands::Report { run_dir, formats } => report_command(&run_dir, &formats, &console),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            console.error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

/// Run the audit and report where the artifacts went
fn audit_command(request: &AuditRequest, console: &Console) -> AuditResult<()> {
    run_audit(request)?;
    console.success(&format!("Audit complete → {}", request.out_dir.display()));
    Ok(())
}

/// Render reports for an existing run directory
fn report_command(run_dir: &Path, formats: &str, console: &Console) -> AuditResult<()> {
    if !run_dir.exists() {
        return Err(AuditError::PathNotFound(run_dir.to_path_buf()));
    }

    let formats = ReportFormat::parse_list(formats);
    render_reports(run_dir, &formats)?;
    console.success(&format!(
        "Report(s) written → {}/reports",
        run_dir.display()
    ));
    Ok(())
}
