use std::path::PathBuf;

use clap::{ArgAction, CommandFactory, Parser};
use cocomo_scan_infra::config::DEFAULT_REPORT_CONFIG;
use cocomo_scan_shared_kernel::{PresentationError, PresentationResult};

#[derive(Parser, Debug)]
#[command(
    name = "cocomo_scan",
    version = crate::VERSION,
    about = "アプリケーション単位の成果物/行数集計ツール (COCOMO 入力用)"
)]
pub struct Args {
    /// 集計対象のルート (直下のサブディレクトリが各アプリケーション)
    pub source_dir: PathBuf,

    /// 出力する CSV レポート (既存ファイルは置き換え)
    pub report_file: PathBuf,

    /// 対象アプリケーションのディレクトリを1行ずつ列挙したファイル
    pub command_file: Option<PathBuf>,

    /// レポート列定義 (存在しなければ既定値を書き出す)
    #[arg(long, value_name = "FILE", default_value = DEFAULT_REPORT_CONFIG)]
    pub report_config: PathBuf,

    /// xmlExtensions / LocTags / SourceType の上書きを置いたディレクトリ
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// アプリケーションごとの app.metrics を出力しない
    #[arg(long)]
    pub no_metrics: bool,

    /// ログを詳しく (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Default `tracing` directive when `RUST_LOG` is unset.
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Checks that clap cannot express.
    pub fn validate(&self) -> PresentationResult<()> {
        if let Some(dir) = &self.config_dir
            && !dir.is_dir()
        {
            return Err(PresentationError::ArgumentParsing {
                argument: "--config-dir".to_string(),
                reason: format!("'{}' is not a directory", dir.display()),
            });
        }
        Ok(())
    }
}

pub fn usage() -> String {
    Args::command().render_usage().to_string()
}
