use std::path::PathBuf;

use anyhow::Context;
use dragdrop::session::run_scripted_session;
use dragdrop::{init_logging, EditorConfig, BUILD_DATE, VERSION};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;
    tracing::info!("DragDrop {} (built {})", VERSION, BUILD_DATE);

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => EditorConfig::load_from_file(&path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => match EditorConfig::default_path() {
            Some(path) => EditorConfig::load_or_default(&path)?,
            None => EditorConfig::default(),
        },
    };

    let scene = run_scripted_session(&config).await?;
    for sprite in &scene.shapes {
        tracing::info!("{} at {}", sprite.shape_type, sprite.origin);
    }
    for segment in &scene.lines {
        tracing::info!("line {} -> {}", segment.start, segment.end);
    }

    Ok(())
}
