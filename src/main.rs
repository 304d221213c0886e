use clap::Parser;
use resolve_env::utils::logger;
use resolve_env::CliConfig;
use std::io::Write;

const USAGE_EXIT_CODE: i32 = 3;

fn main() -> anyhow::Result<()> {
    // Usage errors exit with 3 so that 2 stays reserved for unknown platforms.
    let config = match CliConfig::try_parse() {
        Ok(config) => config,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(USAGE_EXIT_CODE);
        }
        Err(e) => e.exit(),
    };

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    match resolve_env::app::run(&config) {
        Ok(output) => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Resolution failed: {} (Category: {:?})", e, e.category());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.exit_code());
        }
    }
}
