use std::io::{BufRead, Write};

use tracing::info;

use crate::{
    services::wigle_client::wigle_service::{WigleService, WigleServiceConfig},
    shell::Shell,
    types::app_config::AppConfig,
    utils::app_error::AppError,
};

pub fn gen_shell<R: BufRead, W: Write>(
    config: &AppConfig,
    input: R,
    output: W,
) -> Result<Shell<WigleService, R, W>, AppError> {
    let wigle_service = WigleService::new(WigleServiceConfig {
        host: config.api_host.clone(),
        timeout: config.timeout,
    })?;

    Ok(Shell::new(wigle_service, config.edition, input, output))
}

pub async fn run<R: BufRead, W: Write>(
    config: &AppConfig,
    input: R,
    output: W,
) -> Result<(), AppError> {
    info!("Using {} with {:?} edition", config.api_host, config.edition);

    gen_shell(config, input, output)?.run().await?;

    Ok(())
}
