//! 程序入口：以参考语言文件为准同步语言文件

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use locale_tools::cli::messages::{EXIT_FAILURE, EXIT_OK};
use locale_tools::cli::{init_tracing, update_locals};

fn main() -> anyhow::Result<ExitCode> {
    let args = match update_locals::UpdateLocalsArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // 参数数量错误以 1 退出，帮助与版本信息正常退出
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_OK,
                _ => EXIT_FAILURE,
            };
            e.print()?;
            return Ok(ExitCode::from(code));
        }
    };

    init_tracing(if args.quiet {
        tracing::Level::WARN
    } else {
        tracing::Level::INFO
    });

    let code = update_locals::run(&args)?;
    Ok(ExitCode::from(code))
}
