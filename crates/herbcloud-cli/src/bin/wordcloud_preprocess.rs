//! wordcloud-preprocess エントリーポイント

use herbcloud_cli::{CliError, WordCloudConfig, init_tracing, run_wordcloud};

fn main() -> Result<(), CliError> {
  // 設定の読み込み（ログ初期化前のため失敗はそのまま返す）
  let config = WordCloudConfig::from_env()?;

  // ロギングの初期化
  init_tracing(config.log_level);
  tracing::info!(input = %config.input.display(), output = %config.output.display(), "設定を読み込みました");

  run_wordcloud(&config).map(|_| ()).inspect_err(|err| {
    tracing::error!(code = err.code(), "{err}");
  })
}
