//! update-locals：以 en.json 为准补全其他语言文件

use std::path::PathBuf;

use clap::Parser;

use crate::cli::messages::{EXIT_FAILURE, EXIT_OK, STATUS_ERROR_PREFIX, SUPPORTED_CODES_PREFIX, USAGE_EXAMPLE};
use crate::config::{LanguageCode, LocaleConfig, LOCALS_DIR_ENV, SUPPORTED_LANGS};
use crate::model::data_core::AppError;
use crate::model::locale_sync::{update_locale_file, SyncOptions};

#[derive(Parser, Debug)]
#[command(name = "update-locals")]
#[command(version, about = "用 en.json 补全语言文件中缺失或为空的键", long_about = None)]
#[command(after_help = USAGE_EXAMPLE)]
pub struct UpdateLocalsArgs {
    /// 语言代码（de、es、fr、ja、ko、ru、zh）
    #[arg(required_unless_present = "all", conflicts_with = "all")]
    pub lang: Option<String>,

    /// 更新全部支持的语言
    #[arg(long)]
    pub all: bool,

    /// 只报告，不写文件
    #[arg(long)]
    pub dry_run: bool,

    /// 本地化目录（默认为工具所在目录同级的 locals）
    #[arg(long, env = LOCALS_DIR_ENV, value_name = "DIR")]
    pub locals_dir: Option<PathBuf>,

    /// 只输出警告与错误
    #[arg(short, long)]
    pub quiet: bool,
}

impl UpdateLocalsArgs {
    /// 解析目标语言；`--all` 时返回全部语言
    pub fn languages(&self) -> Result<Vec<LanguageCode>, AppError> {
        match &self.lang {
            Some(code) => Ok(vec![code.parse()?]),
            None => Ok(LanguageCode::all().collect()),
        }
    }

    pub fn resolve_config(&self) -> Result<LocaleConfig, AppError> {
        match &self.locals_dir {
            Some(dir) => Ok(LocaleConfig::new(dir)),
            None => LocaleConfig::from_exe(),
        }
    }

    fn options(&self) -> SyncOptions {
        SyncOptions {
            dry_run: self.dry_run,
        }
    }
}

/// 校验语言代码后再解析目录；非法代码不会触碰任何文件
pub fn run(args: &UpdateLocalsArgs) -> Result<u8, AppError> {
    let langs = match args.languages() {
        Ok(langs) => langs,
        Err(e) => {
            report_usage_error(&e);
            return Ok(EXIT_FAILURE);
        }
    };
    let config = args.resolve_config()?;
    run_with_config(&config, &langs, args.options());
    Ok(EXIT_OK)
}

/// 依次更新各语言文件，失败只记录不中断，也不改变退出码
pub fn run_with_config(config: &LocaleConfig, langs: &[LanguageCode], options: SyncOptions) {
    for lang in langs {
        match update_locale_file(config, lang, options) {
            Ok(_) => {}
            Err(e) if e.is_load_failure() => {
                tracing::error!(
                    "{}无法读取参考文件，{}.json 未修改: {}",
                    STATUS_ERROR_PREFIX,
                    lang,
                    e
                );
            }
            Err(e) => tracing::error!("{}{}", STATUS_ERROR_PREFIX, e),
        }
    }
}

fn report_usage_error(err: &AppError) {
    tracing::error!("{}{}。", STATUS_ERROR_PREFIX, err);
    tracing::error!("{}{}", SUPPORTED_CODES_PREFIX, SUPPORTED_LANGS.join(", "));
}
