//! WebCee CLI - compile embedded UI-DSL source files to static HTML

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io;
#[cfg(feature = "cli")]
use std::path::Path;
#[cfg(feature = "cli")]
use webcee::{compile_source_with_report, upgrade_tree};

/// Markup is always persisted here unless `-o` overrides it.
#[cfg(feature = "cli")]
const DEFAULT_OUTPUT_PATH: &str = "webcee_output.html";

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "w2h")]
#[command(version)]
#[command(about = "WebCee - embedded UI-description DSL to static HTML compiler", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input file path
    input_file: Option<String>,

    /// Output file path for the generated markup
    #[arg(short, long)]
    output: Option<String>,

    /// Write the accumulated style sheet to this path
    #[arg(long)]
    style_out: Option<String>,

    /// Write the passthrough script region to this path
    #[arg(long)]
    script_out: Option<String>,

    /// Write a compile report JSON to this path
    #[arg(long)]
    report_log: Option<String>,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Compile a file (default action)
    Compile {
        /// Input file path
        input: String,

        /// Output file path for the generated markup
        #[arg(short, long)]
        output: Option<String>,

        /// Write the accumulated style sheet to this path
        #[arg(long)]
        style_out: Option<String>,

        /// Write the passthrough script region to this path
        #[arg(long)]
        script_out: Option<String>,

        /// Write a compile report JSON to this path
        #[arg(long)]
        report_log: Option<String>,
    },

    /// Upgrade legacy marker syntax in a file or directory
    Upgrade {
        /// File, or directory to walk recursively (.c/.h/.wce files only)
        target: String,
    },

    /// Show version and feature info
    Info,
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if let Some(cmd) = cli.command {
        return handle_subcommand(cmd);
    }

    let Some(input) = cli.input_file else {
        eprintln!("Usage: w2h [OPTIONS] <INPUT_FILE>");
        eprintln!("Try 'w2h --help' for more information.");
        return Ok(());
    };

    compile(
        &input,
        cli.output.as_deref(),
        cli.style_out.as_deref(),
        cli.script_out.as_deref(),
        cli.report_log.as_deref(),
    )
}

#[cfg(feature = "cli")]
fn handle_subcommand(cmd: Commands) -> io::Result<()> {
    match cmd {
        Commands::Compile {
            input,
            output,
            style_out,
            script_out,
            report_log,
        } => compile(
            &input,
            output.as_deref(),
            style_out.as_deref(),
            script_out.as_deref(),
            report_log.as_deref(),
        ),

        Commands::Upgrade { target } => {
            let path = Path::new(&target);
            if !path.exists() {
                eprintln!("Error: {} not found", target);
                return Ok(());
            }

            let outcomes = upgrade_tree(path)?;
            let mut upgraded = 0;
            let mut unchanged = 0;
            for outcome in &outcomes {
                if outcome.changed {
                    eprintln!("✓ {}", outcome.path.display());
                    upgraded += 1;
                } else {
                    unchanged += 1;
                }
            }
            eprintln!(
                "\nUpgrade complete: {} upgraded, {} unchanged",
                upgraded, unchanged
            );
            Ok(())
        }

        Commands::Info => {
            println!("WebCee - embedded UI-description DSL to static HTML compiler");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Features:");
            println!("  ✓ UI region compilation (wce_* calls → HTML)");
            println!("  ✓ Style / HTML / script region passthrough");
            println!("  ✓ Legacy marker syntax upgrade (files and directories)");
            println!("  ✓ Compile report JSON artifact");
            println!();
            println!("Regions:");
            println!("  - WCE_STYLE_BEGIN  .. WCE_STYLE_END");
            println!("  - WCE_HTML_BEGIN   .. WCE_HTML_END");
            println!("  - WCE_SCRIPT_BEGIN .. WCE_SCRIPT_END");
            println!("  - WCE_UI_BEGIN     .. WCE_UI_END");
            println!();
            Ok(())
        }
    }
}

#[cfg(feature = "cli")]
fn compile(
    input: &str,
    output: Option<&str>,
    style_out: Option<&str>,
    script_out: Option<&str>,
    report_log: Option<&str>,
) -> io::Result<()> {
    // A missing input file is a silent no-op: nothing is produced and the
    // exit code stays 0. Callers relying on the output must not assume the
    // path was validated.
    if !Path::new(input).exists() {
        return Ok(());
    }

    let content = fs::read_to_string(input)?;

    let (result, report) = match compile_source_with_report(&content) {
        Ok(compiled) => compiled,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    for warning in &result.warnings {
        eprintln!("Warning: {}", warning);
    }

    // The markup is both printed and persisted.
    print!("{}", result.markup);

    let output_path = output.unwrap_or(DEFAULT_OUTPUT_PATH);
    fs::write(output_path, &result.markup)?;
    eprintln!("✓ Output written to: {}", output_path);

    if let Some(path) = style_out {
        fs::write(path, &result.style)?;
        eprintln!("✓ Style written to: {}", path);
    }
    if let Some(path) = script_out {
        fs::write(path, &result.script)?;
        eprintln!("✓ Script written to: {}", path);
    }
    if let Some(path) = report_log {
        let serialized = serde_json::to_string_pretty(&report)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
        fs::write(path, serialized)?;
        eprintln!("✓ Report written to: {}", path);
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install webcee --features cli");
    eprintln!("  w2h [OPTIONS] [INPUT_FILE]");
}
