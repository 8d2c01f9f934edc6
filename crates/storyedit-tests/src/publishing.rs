//! Integration tests for the publish path.
//!
//! Exercises the session, the draft model and the payload envelope together.

use std::cell::RefCell;

use storyedit_core::{Color, ElementId, PlaybackSpeed, TrimRange, ValidationError};
use storyedit_draft::{
    finalize, Draft, Filter, MediaReference, PayloadEnvelope, PublishPayload, ReelFilter,
    TextOverlayPatch, TextStyle,
};
use storyedit_session::{EditorConfig, EditorSession, SessionError, Tool};

// ── Helpers ────────────────────────────────────────────────────

fn video(secs: f64) -> MediaReference {
    MediaReference::video("content://media/video/1", secs, 1080, 1920)
}

fn reel_session(secs: f64) -> EditorSession {
    EditorSession::reel(video(secs), EditorConfig::default()).unwrap()
}

// ── End-to-end scenario ────────────────────────────────────────

#[test]
fn reel_scenario_publishes_expected_payload() {
    let mut session = reel_session(30.0);

    session.select_tool(Tool::Text).unwrap();
    session.begin_text_input().unwrap();
    session
        .confirm_text("Hi", TextStyle::Modern, Color::from_hex("#FFFFFF").unwrap())
        .unwrap();
    session.set_trim(5.0, 25.0).unwrap();
    session.set_speed(2.0).unwrap();

    let published = RefCell::new(None);
    let publisher = |p: PublishPayload| *published.borrow_mut() = Some(p);
    let payload = session.publish(&publisher).unwrap();

    assert_eq!(payload.text_overlays.len(), 1);
    assert_eq!(payload.text_overlays[0].text, "Hi");
    assert_eq!(payload.text_overlays[0].style, TextStyle::Modern);
    assert_eq!(payload.text_overlays[0].color, Color::WHITE);
    let trim = payload.trim.unwrap();
    assert_eq!((trim.start(), trim.end()), (5.0, 25.0));
    assert_eq!(payload.speed, Some(PlaybackSpeed::Double));
    assert_eq!(payload.output_duration(), Some(10.0));
    assert_eq!(published.borrow().as_ref(), Some(&payload));
}

#[test]
fn finalize_round_trip_preserves_fields() {
    let draft = Draft::reel(video(30.0))
        .unwrap()
        .add_text_overlay("Hello", TextStyle::Bold, Color::WHITE)
        .unwrap()
        .set_filter(ReelFilter::Warm)
        .unwrap()
        .set_trim(2.0, 20.0)
        .unwrap();

    let payload = finalize(&draft).unwrap();

    assert_eq!(payload.media, *draft.media());
    assert_eq!(payload.text_overlays, draft.text_overlays());
    assert_eq!(payload.sticker_elements, draft.sticker_elements());
    assert_eq!(payload.adjustments, draft.adjustments());
    assert_eq!(payload.filter, Filter::Reel(ReelFilter::Warm));
    assert_eq!(payload.trim, Some(TrimRange::new(2.0, 20.0, 30.0).unwrap()));
    assert_eq!(payload.speed, draft.speed());
    assert_eq!(payload.link, None);
    assert_eq!(payload.music, None);

    // Finalizing does not mutate the draft.
    assert_eq!(finalize(&draft).unwrap(), payload);
}

// ── Rejections ─────────────────────────────────────────────────

#[test]
fn blanked_text_blocks_publish_until_fixed() {
    let mut session = reel_session(30.0);
    session.select_tool(Tool::Text).unwrap();
    session.begin_text_input().unwrap();
    let id = session
        .confirm_text("Oops", TextStyle::Classic, Color::BLACK)
        .unwrap();
    session
        .update_selected_text(&TextOverlayPatch::new().text("   "))
        .unwrap();

    assert_eq!(
        session.preview(),
        Err(SessionError::Validation(
            ValidationError::BlankVisibleOverlay(id)
        ))
    );

    let rejected = session.publish(&|_: PublishPayload| {}).unwrap_err();
    let mut session = *rejected.session;
    session.delete_selected().unwrap();
    assert!(session.publish(&|_: PublishPayload| {}).is_ok());
}

#[test]
fn publish_while_entering_text_is_rejected() {
    let mut session = reel_session(30.0);
    session.select_tool(Tool::Text).unwrap();
    session.begin_text_input().unwrap();

    let rejected = session.publish(&|_: PublishPayload| {}).unwrap_err();
    assert!(matches!(
        rejected.error,
        SessionError::InvalidTransition { .. }
    ));
}

#[test]
fn trim_rejection_leaves_trim_unchanged() {
    let mut session = reel_session(30.0);
    let before = session.draft().trim();
    let err = session.set_trim(10.0, 5.0).unwrap_err();
    assert!(matches!(
        err,
        SessionError::Validation(ValidationError::InvalidTrim { .. })
    ));
    assert_eq!(session.draft().trim(), before);
}

// ── Wire format ────────────────────────────────────────────────

#[test]
fn envelope_json_is_readable_by_upload_side() {
    let mut session = reel_session(12.0);
    session.select_tool(Tool::Stickers).unwrap();
    session.add_sticker("✨").unwrap();
    session.set_link("https://example.com/drop", Some("Drop")).unwrap();

    let payload = session.preview().unwrap();
    let json = PayloadEnvelope::new(payload.clone()).to_json().unwrap();

    let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
    assert_eq!(value["version"], 1);
    assert_eq!(value["payload"]["sticker_elements"][0]["emoji"], "✨");
    assert_eq!(value["payload"]["sticker_elements"][0]["id"], 1);
    assert_eq!(value["payload"]["link"]["title"], "Drop");
    assert_eq!(value["payload"]["trim"]["end"], 12.0);

    let loaded = PayloadEnvelope::from_json(&json).unwrap();
    assert_eq!(loaded.payload, payload);
    assert_eq!(
        loaded.payload.sticker_elements[0].id,
        ElementId::FIRST
    );
}
