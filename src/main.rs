use clap::Parser;
use course_planner::core::ConfigProvider;
use course_planner::utils::error::ErrorSeverity;
use course_planner::utils::logger;
use course_planner::{CliConfig, LocalStorage, Planner};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 合併並驗證配置
    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_cli_logger(
        settings.verbose,
        settings.log_level.as_deref(),
        settings.log_format,
    );

    tracing::info!("Starting course-planner");
    tracing::debug!("Effective settings: {:?}", settings);

    let storage = LocalStorage::new(settings.base_dir().to_string());
    let mut planner = Planner::new(storage);
    if let Some(file) = settings.catalog_file() {
        planner = planner.with_preload(file);
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    if let Err(e) = planner.run(stdin.lock(), stdout.lock()) {
        tracing::error!("❌ Session ended with error: {} (Severity: {:?})", e, e.severity());
        eprintln!("❌ {}", e.user_friendly_message());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    tracing::info!("Session finished");
    Ok(())
}
