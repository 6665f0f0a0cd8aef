use psidb_scripts::utils::logger;
use psidb_scripts::{app, CliConfig, TransformKind};
use std::io::Write;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse_for(TransformKind::Rot13);
    logger::init_cli_logger(config.verbose);

    let report = match app::run(config).await {
        Ok(report) => report,
        Err(e) => std::process::exit(app::report_failure(&e)),
    };

    // Printed only once the output file is fully written.
    if let Some(marker) = report.marker() {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", marker)?;
        stdout.flush()?;
    }

    Ok(())
}
