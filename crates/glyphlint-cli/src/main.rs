//! CLI entry point for glyphlint.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `glyphlint-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, Parser, Subcommand};
use glyphlint_app::{
    ExplainOutput, LintInput, parse_report_json, render_annotations, render_console,
    render_markdown, run_explain, run_lint, serialize_report, verdict_exit_code,
};
use glyphlint_settings::{PolicyFormat, REQUIRE_ENV_VAR};
use glyphlint_types::GlyphlintReport;
use std::io::Read;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Log filter directives, e.g. `GLYPHLINT_LOG=debug`.
const LOG_ENV_VAR: &str = "GLYPHLINT_LOG";

#[derive(Parser, Debug)]
#[command(
    name = "glyphlint",
    version,
    about = "Fail-closed linter for GlyphLine tokens and IceLayer ICEMAP policies",
    args_conflicts_with_subcommands = true,
    subcommand_negates_reqs = true
)]
struct Cli {
    #[command(flatten)]
    lint: LintArgs,

    #[command(subcommand)]
    cmd: Option<Commands>,
}

#[derive(Args, Debug)]
struct LintArgs {
    /// Path to the ICEMAP policy (`.yaml`/`.yml` is YAML, anything else JSON).
    #[arg(long, required = true)]
    icemap: Option<Utf8PathBuf>,

    /// Path to the text to lint (default: stdin).
    #[arg(long)]
    text: Option<Utf8PathBuf>,

    /// Fail if no ~tokens are found (enforce adoption). Also enabled by GLYPHLINT_REQUIRE.
    #[arg(long)]
    require: bool,

    /// Where to write the JSON report.
    #[arg(long)]
    report_out: Option<Utf8PathBuf>,

    /// Where to write a Markdown summary.
    #[arg(long)]
    markdown_out: Option<Utf8PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long)]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long)]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Explain a check_id or code with remediation guidance.
    Explain {
        /// The check_id (e.g., "glyph.icemap") or code (e.g., "veto_signal") to explain.
        identifier: String,
    },
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.cmd {
        Some(Commands::Md { report, output }) => cmd_md(report, output),
        Some(Commands::Annotations { report, max }) => cmd_annotations(report, max),
        Some(Commands::Explain { identifier }) => cmd_explain(&identifier),
        None => cmd_lint(cli.lint),
    }
}

/// Logs go to stderr; stdout carries the verdict.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn cmd_lint(args: LintArgs) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let icemap = args.icemap.context("--icemap is required")?;
        let policy_text = std::fs::read_to_string(&icemap)
            .with_context(|| format!("read ICEMAP policy: {}", icemap))?;
        let text = read_text(args.text.as_deref())?;

        let env_require = std::env::var(REQUIRE_ENV_VAR).ok();
        let require_adoption =
            glyphlint_settings::require_adoption(args.require, env_require.as_deref());

        let output = run_lint(LintInput {
            policy_text: &policy_text,
            policy_format: PolicyFormat::from_path(icemap.as_str()),
            text: &text,
            require_adoption,
        })?;

        print!("{}", render_console(&output.report));

        if let Some(path) = &args.report_out {
            write_report_file(path, &output.report).context("write report json")?;
        }
        if let Some(path) = &args.markdown_out {
            write_text_file(path, &render_markdown(&output.report)).context("write markdown")?;
        }

        Ok(verdict_exit_code(output.report.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("glyphlint error: {err:#}");
            std::process::exit(1);
        }
    }
}

/// The text file decoded as UTF-8 with replacement, or all of stdin.
fn read_text(path: Option<&Utf8Path>) -> anyhow::Result<String> {
    let mut bytes = Vec::new();
    match path {
        Some(path) => {
            bytes = std::fs::read(path).with_context(|| format!("read text: {}", path))?;
        }
        None => {
            std::io::stdin()
                .read_to_end(&mut bytes)
                .context("read text from stdin")?;
        }
    }
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn write_report_file(path: &Utf8Path, report: &GlyphlintReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    let data = serialize_report(report)?;
    std::fs::write(path, data).with_context(|| format!("write report: {}", path))?;
    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}

fn read_report(path: &Utf8Path) -> anyhow::Result<GlyphlintReport> {
    let report_text =
        std::fs::read_to_string(path).with_context(|| format!("read report: {}", path))?;
    parse_report_json(&report_text)
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let report = read_report(&report_path)?;
    let md = render_markdown(&report);

    if let Some(out_path) = output {
        write_text_file(&out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_annotations(report_path: Utf8PathBuf, max: usize) -> anyhow::Result<()> {
    let report = read_report(&report_path)?;

    for annotation in render_annotations(&report, max) {
        println!("{}", annotation);
    }

    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", glyphlint_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                glyphlint_app::format_not_found(&identifier, available_check_ids, available_codes)
            );
            std::process::exit(1);
        }
    }
}
