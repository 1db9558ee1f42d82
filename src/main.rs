use caesar_decoder::domain::ports::ConfigProvider;
use caesar_decoder::utils::{logger, validation::Validate};
use caesar_decoder::{CipherEngine, CliConfig, ConsolePipeline, ConsoleSink, TomlConfig};
use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 有 --config 時改用 TOML 配置,否則直接使用命令列參數
    match cli.config.clone() {
        Some(path) => {
            let config = match TomlConfig::from_file(&path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 {}", e.recovery_suggestion());
                    std::process::exit(1);
                }
            };

            // 初始化日誌 (配置檔的 logging.verbose 也能開啟詳細輸出)
            logger::init_cli_logger(cli.verbose || config.verbose());

            tracing::info!("Starting caesar-decoder CLI");
            tracing::info!("📁 Loaded configuration from: {}", path);

            run(config)
        }
        None => {
            // 初始化日誌
            logger::init_cli_logger(cli.verbose);

            tracing::info!("Starting caesar-decoder CLI");
            if cli.verbose {
                tracing::debug!("CLI config: {:?}", cli);
            }

            run(cli)
        }
    }
}

fn run<C>(config: C) -> Result<(), Box<dyn std::error::Error>>
where
    C: ConfigProvider + Validate,
{
    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 建立輸出與管道
    let sink = ConsoleSink::new();
    let pipeline = ConsolePipeline::new(sink, config);

    // 建立引擎並執行
    let engine = CipherEngine::new(pipeline);

    match engine.run() {
        Ok(_report) => {
            tracing::info!("✅ Decode completed successfully!");
        }
        Err(e) => {
            tracing::error!(
                "❌ Decode failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                caesar_decoder::utils::error::ErrorSeverity::Low => 0,
                caesar_decoder::utils::error::ErrorSeverity::Medium => 2,
                caesar_decoder::utils::error::ErrorSeverity::High => 1,
                caesar_decoder::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
