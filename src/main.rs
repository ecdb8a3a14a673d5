use std::io::{self, Write};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use alt_branch_diff::config::{
    BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_FETCH_TIMEOUT_SECS, parse_timeout,
};
use alt_branch_diff::diff::DiffReport;
use alt_branch_diff::fetch::compare_branches;
use alt_branch_diff::logging;
use alt_branch_diff::version::registries::RdbRegistry;
use alt_branch_diff::version::types::{Arch, Branch};

#[derive(Parser)]
#[command(name = "alt-branch-diff")]
#[command(
    version,
    about = "Compare binary packages of two ALT Linux branches for one architecture"
)]
struct Cli {
    /// Branch whose unique and newer packages are reported
    #[arg(value_enum)]
    main_branch: Branch,

    /// Branch the main branch is compared against
    #[arg(value_enum)]
    aux_branch: Branch,

    /// Package architecture
    #[arg(value_enum)]
    arch: Arch,

    /// Total time allowed for fetching both listings, in seconds
    #[arg(long, default_value = DEFAULT_FETCH_TIMEOUT_SECS, value_parser = parse_timeout)]
    timeout: Duration,

    /// Base URL of the package index API
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Indent the JSON report
    #[arg(long)]
    pretty: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    log_json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_json);

    let report = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(&cli))?;

    match write_report(&report, cli.pretty) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => result.context("Failed to write report"),
    }
}

async fn run(cli: &Cli) -> anyhow::Result<DiffReport> {
    let registry = RdbRegistry::new(&cli.base_url)?;

    let report = compare_branches(
        &registry,
        cli.main_branch,
        cli.aux_branch,
        cli.arch,
        cli.timeout,
    )
    .await?;

    Ok(report)
}

fn write_report(report: &DiffReport, pretty: bool) -> io::Result<()> {
    let mut stdout = io::stdout().lock();

    if pretty {
        serde_json::to_writer_pretty(&mut stdout, report)?;
    } else {
        serde_json::to_writer(&mut stdout, report)?;
    }
    writeln!(stdout)?;
    stdout.flush()
}
