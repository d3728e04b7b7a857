//! 程序入口：比较两个JSON文件的键集合

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use locale_tools::cli::{init_tracing, key_diff};

fn main() -> anyhow::Result<ExitCode> {
    let args = key_diff::KeyDiffArgs::parse();
    init_tracing(if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    });

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let code = key_diff::run(&args, &mut out)?;
    out.flush()?;
    Ok(ExitCode::from(code))
}
