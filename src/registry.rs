//! I/O registry query for the smart-battery service.

use std::time::Duration;

use tokio::process::Command;

use crate::prelude::*;

const IOREG_PATH: &str = "/usr/sbin/ioreg";
const QUERY_TIMEOUT: Duration = Duration::from_secs(30);

/// Dump the smart-battery service properties as an XML property list.
#[instrument(skip_all)]
pub async fn query_smart_battery() -> Result<Vec<u8>> {
    let output = tokio::time::timeout(
        QUERY_TIMEOUT,
        Command::new(IOREG_PATH).args(["-l", "-n", "AppleSmartBattery", "-r", "-a"]).output(),
    )
    .await
    .context("the registry query timed out")?
    .context("failed to run the registry query")?;
    ensure!(
        output.status.success(),
        "the registry query failed: {}",
        String::from_utf8_lossy(&output.stderr).trim(),
    );
    debug!(n_bytes = output.stdout.len(), "captured the registry dump");
    Ok(output.stdout)
}
