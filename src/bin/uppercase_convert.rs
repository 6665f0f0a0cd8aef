use psidb_scripts::utils::logger;
use psidb_scripts::{app, CliConfig, TransformKind};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse_for(TransformKind::Uppercase);
    logger::init_cli_logger(config.verbose);

    if let Err(e) = app::run(config).await {
        std::process::exit(app::report_failure(&e));
    }

    Ok(())
}
