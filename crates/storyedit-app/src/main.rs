//! StoryEdit demo host
//!
//! Plays the part of the mobile host screen: picks a video, drives a reel
//! editing session with a fixed script of user input and prints the
//! published payload as JSON.
//!
//! Usage: `storyedit [config.json] [video-uri] [duration-seconds]`

use anyhow::{Context, Result};
use std::path::PathBuf;
use storyedit_core::{Color, Vec2};
use storyedit_draft::{
    Adjustments, MediaReference, MusicSelection, PayloadEnvelope, PublishPayload, ReelFilter,
    TextStyle,
};
use storyedit_session::{EditorConfig, EditorSession, Tool};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("StoryEdit starting...");

    let mut args = std::env::args().skip(1);
    let config = match args.next().map(PathBuf::from) {
        Some(path) => EditorConfig::load(&path)
            .with_context(|| format!("loading editor config from {}", path.display()))?,
        None => EditorConfig::default(),
    };
    let uri = args
        .next()
        .unwrap_or_else(|| "content://media/external/video/42".to_string());
    let duration = match args.next() {
        Some(raw) => raw
            .parse::<f64>()
            .with_context(|| format!("invalid duration {raw:?}"))?,
        None => 30.0,
    };

    let media = MediaReference::video(uri, duration, 1080, 1920);
    let session = EditorSession::reel(media, config)?;
    let payload = run_script(session)?;

    info!(
        seconds = payload.output_duration().unwrap_or_default(),
        "Reel published"
    );
    Ok(())
}

/// Replay a typical editing pass: caption, sticker, look, timing, music.
fn run_script(mut session: EditorSession) -> Result<PublishPayload> {
    session.select_tool(Tool::Text)?;
    session.begin_text_input()?;
    session.confirm_text("Hi", TextStyle::Modern, Color::WHITE)?;
    session.move_selected(Vec2::new(0.0, -400.0))?;

    session.select_tool(Tool::Stickers)?;
    session.add_sticker("🔥")?;

    session.select_tool(Tool::Filters)?;
    session.set_filter(ReelFilter::Warm)?;
    session.select_tool(Tool::Adjustments)?;
    session.set_adjustments(Adjustments::new(10, 5, -20))?;

    let end = session
        .draft()
        .media()
        .duration
        .unwrap_or_default()
        .min(25.0);
    session.select_tool(Tool::Trim)?;
    if let Err(e) = session.set_trim(5.0, end) {
        // Short clips keep their full length.
        warn!(error = %e, "Trim skipped");
    }
    session.select_tool(Tool::Speed)?;
    session.set_speed(2.0)?;

    session.select_tool(Tool::Music)?;
    session.set_music(MusicSelection::new("trk-1042", "Sunrise", "The Commons").starting_at(12.5))?;
    session.close_tool()?;

    let publisher = |payload: PublishPayload| match PayloadEnvelope::new(payload).to_json() {
        Ok(json) => println!("{}", String::from_utf8_lossy(&json)),
        Err(e) => warn!(error = %e, "Failed to encode payload"),
    };

    session
        .publish(&publisher)
        .map_err(|rejected| anyhow::anyhow!(rejected.error))
}
