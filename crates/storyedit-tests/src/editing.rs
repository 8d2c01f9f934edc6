//! Integration tests for interactive editing.
//!
//! Drives `EditorSession` the way the host screens do and checks the
//! resulting drafts.

use std::f32::consts::FRAC_PI_2;

use storyedit_core::{Color, Vec2};
use storyedit_draft::{
    Adjustments, MediaReference, MusicSelection, ReelEffect, StickerPatch, StoryFilter,
    TextOverlayPatch, TextStyle,
};
use storyedit_session::{EditorConfig, EditorSession, Interaction, SessionError, Tool};

// ── Helpers ────────────────────────────────────────────────────

fn photo() -> MediaReference {
    MediaReference::image("content://media/image/7", 1080, 1920)
}

fn story_session() -> EditorSession {
    EditorSession::story(photo(), EditorConfig::default()).unwrap()
}

fn type_text(session: &mut EditorSession, text: &str) -> storyedit_core::ElementId {
    session.select_tool(Tool::Text).unwrap();
    session.begin_text_input().unwrap();
    session
        .confirm_text(text, TextStyle::Modern, Color::WHITE)
        .unwrap()
}

// ── Story editing ──────────────────────────────────────────────

#[test]
fn story_session_full_pass() {
    let mut session = story_session();
    let caption = type_text(&mut session, "Weekend");
    session
        .update_selected_text(
            &TextOverlayPatch::new()
                .style(TextStyle::Shadow)
                .color(Color::YELLOW)
                .font_size(48.0),
        )
        .unwrap();

    session.select_tool(Tool::Stickers).unwrap();
    let sticker = session.add_sticker("🌴").unwrap();
    session.move_selected(Vec2::new(200.0, 300.0)).unwrap();

    session.select_tool(Tool::Filters).unwrap();
    session.set_filter(StoryFilter::Fade).unwrap();
    session.select_tool(Tool::Adjustments).unwrap();
    session
        .set_adjustments(Adjustments::new(150, -20, 30))
        .unwrap();
    session.select_tool(Tool::Link).unwrap();
    session
        .set_link("https://example.com/beach", Some("Book now"))
        .unwrap();

    let draft = session.draft();
    assert_eq!(draft.text_overlay(caption).unwrap().font_size, 48.0);
    assert_eq!(
        draft.sticker_element(sticker).unwrap().position,
        Vec2::new(740.0, 1260.0)
    );
    assert_eq!(draft.adjustments(), Adjustments::new(100, -20, 30));
    assert_eq!(draft.link().unwrap().title.as_deref(), Some("Book now"));
    assert!(session.preview().is_ok());
}

#[test]
fn story_rejects_reel_features() {
    let mut session = story_session();
    assert_eq!(
        session.select_tool(Tool::Speed),
        Err(SessionError::ToolUnavailable(Tool::Speed))
    );
    assert!(matches!(
        session.set_effect(ReelEffect::Vhs),
        Err(SessionError::Validation(_))
    ));
    assert!(!session.can_undo());
}

// ── Canvas selection ───────────────────────────────────────────

#[test]
fn tapping_picks_topmost_layer() {
    let mut session = story_session();
    session.select_tool(Tool::Stickers).unwrap();
    let below = session.add_sticker("⭐").unwrap();
    let above = session.add_sticker("🌙").unwrap();
    session.clear_selection();

    let center = Vec2::new(540.0, 960.0);
    assert_eq!(session.tap_canvas(center), Some(above));

    session.select_element(below).unwrap();
    session.bring_selected_to_front().unwrap();
    assert_eq!(session.tap_canvas(center), Some(below));
}

#[test]
fn rotated_sticker_hit_area_follows_rotation() {
    let config = EditorConfig {
        hit_slop: 0.0,
        ..EditorConfig::default()
    };
    let mut session = EditorSession::story(photo(), config).unwrap();
    let id = type_text(&mut session, "A long caption line");
    session
        .update_selected_text(&TextOverlayPatch::new().rotation(FRAC_PI_2))
        .unwrap();
    session.clear_selection();

    // Far along the original horizontal extent: now empty canvas.
    assert_eq!(session.tap_canvas(Vec2::new(540.0 + 200.0, 960.0)), None);
    // Same distance along the vertical: now on the text.
    assert_eq!(session.tap_canvas(Vec2::new(540.0, 960.0 + 200.0)), Some(id));
}

#[test]
fn hidden_elements_cannot_be_tapped() {
    let mut session = story_session();
    session.select_tool(Tool::Stickers).unwrap();
    session.add_sticker("👀").unwrap();
    session
        .update_selected_sticker(&StickerPatch::new().visible(false))
        .unwrap();
    session.clear_selection();
    assert_eq!(session.tap_canvas(Vec2::new(540.0, 960.0)), None);
    assert_eq!(session.interaction(), Interaction::Idle);
}

// ── History ────────────────────────────────────────────────────

#[test]
fn undo_walks_back_through_edits() {
    let mut session = EditorSession::reel(
        MediaReference::video("content://media/video/3", 20.0, 1080, 1920),
        EditorConfig::default(),
    )
    .unwrap();
    let original = session.draft().clone();

    session.set_trim(1.0, 10.0).unwrap();
    session.set_speed(0.5).unwrap();
    session
        .set_music(MusicSelection::new("trk-9", "Night Drive", "Vela"))
        .unwrap();

    assert!(session.undo().unwrap());
    assert!(session.draft().music().is_none());
    assert!(session.undo().unwrap());
    assert!(session.undo().unwrap());
    assert_eq!(session.draft(), &original);
    assert!(!session.undo().unwrap());

    assert!(session.redo().unwrap());
    assert_eq!(session.draft().trim().unwrap().end(), 10.0);
}

#[test]
fn history_depth_comes_from_config() {
    let config = EditorConfig::from_json(br#"{ "history_depth": 2 }"#).unwrap();
    let mut session = EditorSession::story(photo(), config).unwrap();
    for brightness in [10, 20, 30, 40] {
        session
            .set_adjustments(Adjustments::new(brightness, 0, 0))
            .unwrap();
    }
    assert!(session.undo().unwrap());
    assert!(session.undo().unwrap());
    assert!(!session.undo().unwrap());
    assert_eq!(session.draft().adjustments().brightness, 20);
}

#[test]
fn ids_not_reused_after_undo() {
    let mut session = story_session();
    let first = type_text(&mut session, "one");
    session.undo().unwrap();
    let second = type_text(&mut session, "two");
    let ids: Vec<_> = session.draft().element_ids().collect();
    assert_eq!(ids, vec![second]);
    assert!(second > first);

    // Back to the empty draft again; the next overlay still gets a fresh id.
    session.undo().unwrap();
    let third = type_text(&mut session, "three");
    assert!(third > second);
}
