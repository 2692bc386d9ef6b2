//! Test fixtures and environment helpers.

use std::net::TcpListener;

use anyhow::{Context, Result};

/// Code snippet the scenarios submit for execution.
pub const SAMPLE_PYTHON: &str = "print(1)";

/// Base URL on the loopback interface with nothing listening behind it.
///
/// The port is reserved from the OS and released immediately, so a connect
/// attempt is refused rather than timing out.
///
/// # Errors
///
/// Returns an error if no loopback port can be reserved.
pub fn unreachable_base_url() -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").context("reserve loopback port")?;
    let port = listener
        .local_addr()
        .context("read reserved port")?
        .port();
    drop(listener);
    Ok(format!("http://127.0.0.1:{port}"))
}
