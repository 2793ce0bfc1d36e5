use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::tui::snapshot::{render_snapshot, save_buffer, write_buffer};
use crate::tui::Renderer;
use crate::types::MatchDisplayState;

/// Draw one frame of `state` into a `cols` x `rows` buffer and write it as text
pub fn run(
    config: &Config,
    state: MatchDisplayState,
    cols: u16,
    rows: u16,
    output: Option<&Path>,
) -> Result<()> {
    let renderer = Renderer::from_config(config).context("Invalid design size")?;
    let buffer = render_snapshot(&renderer, state, config.cell, cols, rows);

    match output {
        Some(path) => {
            save_buffer(&buffer, path)
                .with_context(|| format!("Failed to write frame to '{}'", path.display()))?;
            tracing::info!("RENDER: wrote {}x{} frame to {}", cols, rows, path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_buffer(&buffer, &mut out).context("Failed to write frame to stdout")?;
            out.flush()?;
        }
    }

    Ok(())
}
