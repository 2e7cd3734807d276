use std::process::ExitCode;
use fontpatch::cli::parse_args;
use fontpatch::font::SfntLoader;
use fontpatch::models::Config;
use fontpatch::patcher::run_batch;
use fontpatch::utils::{init_logging, StandardLogger};

fn main() -> ExitCode {
    let args = parse_args();
    init_logging(args.debug);

    let config = Config::from(args);
    if config.debug_mode {
        log::debug!("Debug mode enabled");
        log::debug!("Patch options: {:?}", config.options);
    }

    match run_batch(&SfntLoader, &config, &StandardLogger) {
        Ok(report) => {
            if !report.failed_families.is_empty() {
                log::warn!(
                    "{} of {} families failed: {}",
                    report.failed_families.len(),
                    report.families,
                    report.failed_families.join(", ")
                );
            }
            log::info!(
                "{} fonts written from {} families",
                report.fonts_written,
                report.families
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::from(1)
        }
    }
}
