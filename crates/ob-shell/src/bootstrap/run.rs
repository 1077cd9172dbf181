//! Request loop.
//!
//! Reads newline-delimited JSON requests and writes one reply per request,
//! in order. The loop ends on EOF.

use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use super::runtime::AppRuntime;
use crate::commands::{self, CommandError};
use crate::protocol::{ShellRequest, ShellResponse};

/// Serve requests from `reader` until EOF.
///
/// A malformed line gets a `bad_request` reply; it never stops the loop.
/// I/O failures on either side are returned.
pub async fn run_app<R, W>(runtime: &AppRuntime, reader: R, mut writer: W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    let mut served = 0usize;

    while let Some(line) = lines
        .next_line()
        .await
        .context("Failed to read request line")?
    {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<ShellRequest>(line) {
            Ok(request) => {
                debug!(command = request.name(), "Handling request");
                commands::handle(runtime, request).await
            }
            Err(err) => {
                warn!(error = %err, "Rejected malformed request");
                ShellResponse::failure(CommandError::bad_request(format!(
                    "invalid request: {err}"
                )))
            }
        };

        let mut encoded =
            serde_json::to_string(&response).context("Failed to encode reply")?;
        encoded.push('\n');
        writer
            .write_all(encoded.as_bytes())
            .await
            .context("Failed to write reply")?;
        writer.flush().await.context("Failed to flush reply")?;
        served += 1;
    }

    info!(served, "Input closed, shutting down");
    Ok(())
}

/// [`run_app`] over the process stdin and stdout.
pub async fn run_stdio(runtime: &AppRuntime) -> anyhow::Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    run_app(runtime, stdin, stdout).await
}
