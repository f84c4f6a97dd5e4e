//! excel-to-json エントリーポイント

use herbcloud_cli::{CliError, SheetConfig, init_tracing, run_sheets};

fn main() -> Result<(), CliError> {
  // 設定の読み込み（ログ初期化前のため失敗はそのまま返す）
  let config = SheetConfig::from_env()?;

  // ロギングの初期化
  init_tracing(config.log_level);
  tracing::info!(jobs = config.jobs.len(), "設定を読み込みました");

  run_sheets(&config).map(|_| ()).inspect_err(|err| {
    tracing::error!(code = err.code(), "{err}");
  })
}
