use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use fs_err as fs;
use lintfix_apply::{apply_evaluation, ApplyOptions};
use lintfix_eval::load_evaluation;
use lintfix_render::{render_apply_md, render_evaluation_md};
use lintfix_types::tool::ToolInfo;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "lintfix",
    version,
    about = "Report, validate, and apply lint-engine evaluation artifacts."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render a human-readable report from an evaluation artifact.
    Report(ReportArgs),
    /// Check an evaluation artifact against the contract invariants.
    Validate(ValidateArgs),
    /// Apply the computed patches from an evaluation artifact (default: dry-run).
    Apply(ApplyArgs),
}

#[derive(Debug, Parser)]
struct ReportArgs {
    /// Path to the evaluation artifact (JSON).
    #[arg(long)]
    evaluation: Utf8PathBuf,

    /// Write the markdown report here instead of stdout.
    #[arg(long)]
    out: Option<Utf8PathBuf>,
}

#[derive(Debug, Parser)]
struct ValidateArgs {
    /// Path to the evaluation artifact (JSON).
    #[arg(long)]
    evaluation: Utf8PathBuf,
}

#[derive(Debug, Parser)]
struct ApplyArgs {
    /// Path to the evaluation artifact (JSON).
    #[arg(long)]
    evaluation: Utf8PathBuf,

    /// Repository root patches are applied in (default: current directory).
    #[arg(long, default_value = ".")]
    repo_root: Utf8PathBuf,

    /// Persist changes. Without this flag nothing is written.
    #[arg(long, default_value_t = false)]
    write: bool,

    /// Disable sha256 drift preconditions (not recommended).
    #[arg(long, default_value_t = false)]
    no_clean_hashes: bool,

    /// Output directory for apply artifacts (default: next to the evaluation artifact).
    #[arg(long)]
    out_dir: Option<Utf8PathBuf>,
}

fn main() -> ExitCode {
    match real_main() {
        Ok(code) => code,
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(1)
        }
    }
}

fn real_main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Report(args) => cmd_report(args),
        Command::Validate(args) => cmd_validate(args),
        Command::Apply(args) => cmd_apply(args),
    }
}

fn cmd_report(args: ReportArgs) -> anyhow::Result<ExitCode> {
    let eval = load_evaluation(&args.evaluation)?;
    let md = render_evaluation_md(&eval);

    match &args.out {
        Some(out) => {
            fs::write(out, &md).with_context(|| format!("write {}", out))?;
            info!("wrote report to {}", out);
        }
        None => print!("{md}"),
    }

    if eval.is_successful() {
        Ok(ExitCode::from(0))
    } else {
        Ok(ExitCode::from(2))
    }
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<ExitCode> {
    let eval = load_evaluation(&args.evaluation)?;
    println!(
        "ok: {} ({} file evaluations, successful={})",
        args.evaluation,
        eval.file_evaluations().len(),
        eval.is_successful()
    );
    Ok(ExitCode::from(0))
}

fn cmd_apply(args: ApplyArgs) -> anyhow::Result<ExitCode> {
    let eval = load_evaluation(&args.evaluation)?;

    let out_dir = match args.out_dir {
        Some(dir) => dir,
        None => args
            .evaluation
            .parent()
            .map(Utf8Path::to_path_buf)
            .unwrap_or_else(|| Utf8PathBuf::from(".")),
    };
    fs::create_dir_all(&out_dir).with_context(|| format!("create {}", out_dir))?;

    let opts = ApplyOptions {
        dry_run: !args.write,
        require_clean_hashes: !args.no_clean_hashes,
    };

    let apply = apply_evaluation(&args.repo_root, &eval, tool_info(), &opts);

    write_json(&out_dir.join("apply.json"), &apply)?;
    fs::write(out_dir.join("apply.md"), render_apply_md(&apply))
        .with_context(|| format!("write {}", out_dir.join("apply.md")))?;
    info!("wrote apply artifacts to {}", out_dir);

    if apply.errors.is_empty() {
        Ok(ExitCode::from(0))
    } else {
        for err in &apply.errors {
            error!("{}", err);
        }
        Ok(ExitCode::from(2))
    }
}

fn write_json<T: serde::Serialize>(path: &Utf8Path, v: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(v).context("serialize json")?;
    fs::write(path, s).with_context(|| format!("write {}", path))?;
    Ok(())
}

fn tool_info() -> ToolInfo {
    ToolInfo {
        name: "lintfix".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        commit: None,
    }
}
