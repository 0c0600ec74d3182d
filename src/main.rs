use clap::Parser;
use dog_profile::utils::{logger, validation::Validate};
use dog_profile::{build_context, AppConfig, AppError, CliConfig, Dog};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting dog-profile CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ dog-profile failed: {} (Severity: {:?})",
            e,
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());

        let exit_code = e.exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn run(cli: &CliConfig) -> Result<(), AppError> {
    // 驗證配置
    cli.validate()?;

    let app_config = match &cli.config {
        Some(path) => {
            tracing::info!("📄 Loading config from {}", path);
            AppConfig::from_file(path)?
        }
        None => AppConfig::default(),
    };
    let active = app_config.resolve_profiles(cli.profiles.as_deref())?;
    let ctx = build_context(&app_config, active)?;

    println!("Active profiles: {}", ctx.active_profiles().effective());
    let names = ctx.component_names();
    if names.is_empty() {
        println!("No components registered");
    }
    for name in names {
        match ctx.try_get::<Dog>(name) {
            Some(dog) => println!("✅ {}: {}", name, dog),
            None => println!("✅ {}", name),
        }
    }

    Ok(())
}
