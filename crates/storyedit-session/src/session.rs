//! The editor session controller.
//!
//! A session owns exactly one authoritative [`Draft`] plus one interaction
//! tag describing what the user is doing. Every data change is delegated to
//! the draft's pure operations; the session only decides *whether* an input
//! is meaningful in the current state and records the result in history.

use std::fmt;

use storyedit_core::{Color, ElementId, PlaybackSpeed, ValidationError, Vec2};
use storyedit_draft::{
    finalize, Adjustments, Draft, ElementRef, Filter, History, MediaReference, MusicSelection,
    PublishPayload, ReelEffect, StickerPatch, TextOverlayPatch, TextStyle,
};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::EditorConfig;
use crate::error::{SessionError, SessionResult};
use crate::publisher::Publisher;
use crate::tool::{Tool, ToolSet};

/// What the user is currently doing in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// No tool open, nothing selected.
    Idle,
    /// A tool tab is open.
    ToolActive(Tool),
    /// An element on the canvas is selected for editing.
    ElementSelected(ElementId),
    /// The text entry modal is open; nothing else reacts until it closes.
    TextInputPending,
}

impl fmt::Display for Interaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interaction::Idle => f.write_str("idle"),
            Interaction::ToolActive(tool) => write!(f, "the {tool} tool is open"),
            Interaction::ElementSelected(id) => write!(f, "element {id} is selected"),
            Interaction::TextInputPending => f.write_str("entering text"),
        }
    }
}

/// Returned when publishing fails validation; hands the session back intact.
#[derive(Debug, Error)]
#[error("Publish rejected: {error}")]
pub struct PublishRejected {
    pub session: Box<EditorSession>,
    #[source]
    pub error: SessionError,
}

/// Drives one story or reel editing session from media pick to publish.
#[derive(Debug)]
pub struct EditorSession {
    draft: Draft,
    interaction: Interaction,
    history: History,
    config: EditorConfig,
    tools: ToolSet,
}

impl EditorSession {
    /// Start a session on an existing draft. The tool set follows the draft format.
    pub fn new(draft: Draft, config: EditorConfig) -> Self {
        let tools = if draft.is_reel() {
            ToolSet::reel()
        } else {
            ToolSet::story()
        };
        info!(
            draft = %draft.id(),
            reel = draft.is_reel(),
            uri = %draft.media().uri,
            "Editor session started"
        );
        Self {
            history: History::new(config.history_depth),
            draft,
            interaction: Interaction::Idle,
            config,
            tools,
        }
    }

    /// Start a story session from picked media.
    pub fn story(media: MediaReference, config: EditorConfig) -> SessionResult<Self> {
        Ok(Self::new(Draft::story(media)?, config))
    }

    /// Start a reel session from a picked video.
    pub fn reel(media: MediaReference, config: EditorConfig) -> SessionResult<Self> {
        Ok(Self::new(Draft::reel(media)?, config))
    }

    // ── State ───────────────────────────────────────────────────

    /// The current draft. Renderers read this snapshot directly.
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    pub fn tools(&self) -> ToolSet {
        self.tools
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn selected(&self) -> Option<ElementId> {
        match self.interaction {
            Interaction::ElementSelected(id) => Some(id),
            _ => None,
        }
    }

    pub fn active_tool(&self) -> Option<Tool> {
        match self.interaction {
            Interaction::ToolActive(tool) => Some(tool),
            _ => None,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // ── Tools ───────────────────────────────────────────────────

    /// Open a tool tab. Closes any selection.
    pub fn select_tool(&mut self, tool: Tool) -> SessionResult<()> {
        self.ensure_not_modal("select a tool")?;
        if !self.tools.contains(tool) {
            warn!(%tool, "Tool not available in this editor");
            return Err(SessionError::ToolUnavailable(tool));
        }
        self.transition(Interaction::ToolActive(tool));
        Ok(())
    }

    /// Close the open tool tab.
    pub fn close_tool(&mut self) -> SessionResult<()> {
        match self.interaction {
            Interaction::ToolActive(_) => {
                self.transition(Interaction::Idle);
                Ok(())
            }
            from => Err(SessionError::InvalidTransition {
                from,
                action: "close a tool",
            }),
        }
    }

    // ── Text entry ──────────────────────────────────────────────

    /// Open the text entry modal. Only possible from the Text tool.
    pub fn begin_text_input(&mut self) -> SessionResult<()> {
        match self.interaction {
            Interaction::ToolActive(Tool::Text) => {
                self.transition(Interaction::TextInputPending);
                Ok(())
            }
            from => Err(SessionError::InvalidTransition {
                from,
                action: "add text",
            }),
        }
    }

    /// Turn the entered text into an overlay and select it.
    ///
    /// Blank text is rejected and the modal stays open.
    pub fn confirm_text(
        &mut self,
        text: &str,
        style: TextStyle,
        color: Color,
    ) -> SessionResult<ElementId> {
        if self.interaction != Interaction::TextInputPending {
            return Err(SessionError::InvalidTransition {
                from: self.interaction,
                action: "confirm text",
            });
        }
        let id = self.draft.next_element_id();
        let next = self.draft.add_text_overlay(text, style, color);
        self.commit("add_text_overlay", next)?;
        self.transition(Interaction::ElementSelected(id));
        Ok(id)
    }

    /// Close the text entry modal without adding anything.
    pub fn cancel_text_input(&mut self) -> SessionResult<()> {
        if self.interaction != Interaction::TextInputPending {
            return Err(SessionError::InvalidTransition {
                from: self.interaction,
                action: "cancel text entry",
            });
        }
        self.transition(Interaction::ToolActive(Tool::Text));
        Ok(())
    }

    // ── Canvas selection ────────────────────────────────────────

    /// Handle a tap on the canvas.
    ///
    /// Selects the topmost visible element under the point, or returns to
    /// idle when the tap misses everything. Ignored while entering text.
    pub fn tap_canvas(&mut self, point: Vec2) -> Option<ElementId> {
        if self.interaction == Interaction::TextInputPending {
            debug!("Canvas tap ignored while entering text");
            return None;
        }
        let hit = self.draft.element_at(point, self.config.hit_slop);
        match hit {
            Some(id) => self.transition(Interaction::ElementSelected(id)),
            None => self.transition(Interaction::Idle),
        }
        hit
    }

    /// Select an element directly (e.g. from a layer list).
    pub fn select_element(&mut self, id: ElementId) -> SessionResult<()> {
        self.ensure_not_modal("select an element")?;
        if !self.draft.contains_element(id) {
            return Err(SessionError::UnknownElement(id));
        }
        self.transition(Interaction::ElementSelected(id));
        Ok(())
    }

    /// Drop the selection.
    pub fn clear_selection(&mut self) {
        if self.selected().is_some() {
            self.transition(Interaction::Idle);
        }
    }

    /// Delete the selected element and return to idle.
    pub fn delete_selected(&mut self) -> SessionResult<ElementId> {
        let id = self.selected().ok_or(SessionError::NothingSelected)?;
        let next = self.draft.remove_element(id);
        self.commit("remove_element", Ok(next))?;
        self.transition(Interaction::Idle);
        Ok(id)
    }

    // ── Element edits ───────────────────────────────────────────

    /// Add a sticker from the Stickers tool.
    pub fn add_sticker(&mut self, emoji: &str) -> SessionResult<ElementId> {
        if self.interaction != Interaction::ToolActive(Tool::Stickers) {
            return Err(SessionError::InvalidTransition {
                from: self.interaction,
                action: "add a sticker",
            });
        }
        let id = self.draft.next_element_id();
        let next = self.draft.add_sticker_element(emoji);
        self.commit("add_sticker_element", next)?;
        if self.config.select_new_stickers {
            self.transition(Interaction::ElementSelected(id));
        }
        Ok(id)
    }

    /// Restyle or retype the selected text overlay.
    pub fn update_selected_text(&mut self, patch: &TextOverlayPatch) -> SessionResult<()> {
        let id = self.selected().ok_or(SessionError::NothingSelected)?;
        match self.draft.element(id) {
            Some(ElementRef::Text(_)) => {}
            Some(ElementRef::Sticker(_)) => {
                return Err(SessionError::WrongElementKind(id, "text overlay"))
            }
            None => return Err(SessionError::UnknownElement(id)),
        }
        let next = self.draft.update_text_overlay(id, patch);
        self.commit("update_text_overlay", Ok(next))
    }

    /// Resize, rotate, fade or swap the selected sticker.
    pub fn update_selected_sticker(&mut self, patch: &StickerPatch) -> SessionResult<()> {
        let id = self.selected().ok_or(SessionError::NothingSelected)?;
        match self.draft.element(id) {
            Some(ElementRef::Sticker(_)) => {}
            Some(ElementRef::Text(_)) => return Err(SessionError::WrongElementKind(id, "sticker")),
            None => return Err(SessionError::UnknownElement(id)),
        }
        let next = self.draft.update_sticker_element(id, patch);
        self.commit("update_sticker_element", Ok(next))
    }

    /// Drag the selected element by `delta` canvas pixels.
    pub fn move_selected(&mut self, delta: Vec2) -> SessionResult<()> {
        let id = self.selected().ok_or(SessionError::NothingSelected)?;
        let next = self.draft.translate_element(id, delta);
        self.commit("translate_element", Ok(next))
    }

    /// Raise the selected element above the others of its kind.
    pub fn bring_selected_to_front(&mut self) -> SessionResult<()> {
        let id = self.selected().ok_or(SessionError::NothingSelected)?;
        let next = self.draft.bring_to_front(id);
        self.commit("bring_to_front", Ok(next))
    }

    // ── Look ────────────────────────────────────────────────────

    pub fn set_adjustments(&mut self, adjustments: Adjustments) -> SessionResult<()> {
        self.ensure_not_modal("adjust the image")?;
        let next = self.draft.set_adjustments(adjustments);
        self.commit("set_adjustments", Ok(next))
    }

    pub fn set_filter(&mut self, filter: impl Into<Filter>) -> SessionResult<()> {
        self.ensure_not_modal("change the filter")?;
        let next = self.draft.set_filter(filter);
        self.commit("set_filter", next)
    }

    // ── Reel timing ─────────────────────────────────────────────

    /// Set the trim range. A rejected range leaves the draft as it was; the
    /// host should keep its sliders from crossing.
    pub fn set_trim(&mut self, start: f64, end: f64) -> SessionResult<()> {
        self.ensure_not_modal("trim the reel")?;
        let next = self.draft.set_trim(start, end);
        self.commit("set_trim", next)
    }

    pub fn set_speed(&mut self, speed: f64) -> SessionResult<()> {
        self.ensure_not_modal("change the speed")?;
        let next = self.draft.set_speed(speed);
        self.commit("set_speed", next)
    }

    pub fn set_playback_speed(&mut self, speed: PlaybackSpeed) -> SessionResult<()> {
        self.ensure_not_modal("change the speed")?;
        let next = self.draft.with_speed(speed);
        self.commit("set_speed", next)
    }

    pub fn set_effect(&mut self, effect: ReelEffect) -> SessionResult<()> {
        self.ensure_not_modal("add an effect")?;
        let next = self.draft.set_effect(effect);
        self.commit("set_effect", next)
    }

    // ── Attachments ─────────────────────────────────────────────

    pub fn set_link(&mut self, url: &str, title: Option<&str>) -> SessionResult<()> {
        self.ensure_not_modal("add a link")?;
        let next = self.draft.set_link(url, title);
        self.commit("set_link", next)
    }

    pub fn clear_link(&mut self) -> SessionResult<()> {
        self.ensure_not_modal("remove the link")?;
        let next = self.draft.clear_link();
        self.commit("clear_link", Ok(next))
    }

    pub fn set_music(&mut self, music: MusicSelection) -> SessionResult<()> {
        self.ensure_not_modal("add music")?;
        let next = self.draft.set_music(music);
        self.commit("set_music", next)
    }

    pub fn clear_music(&mut self) -> SessionResult<()> {
        self.ensure_not_modal("remove the music")?;
        let next = self.draft.clear_music();
        self.commit("clear_music", Ok(next))
    }

    // ── History ─────────────────────────────────────────────────

    /// Restore the draft before the last edit. Returns false when there is
    /// nothing to undo.
    pub fn undo(&mut self) -> SessionResult<bool> {
        self.ensure_not_modal("undo")?;
        let current = self.draft.clone();
        let floor = current.next_element_id();
        match self.history.undo(current) {
            Ok(previous) => {
                self.draft = previous.retire_element_ids_below(floor);
                debug!(undo = self.history.undo_count(), "Undo");
                self.drop_stale_selection();
                Ok(true)
            }
            Err(_) => Ok(false),
        }
    }

    /// Re-apply the last undone edit. Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> SessionResult<bool> {
        self.ensure_not_modal("redo")?;
        let current = self.draft.clone();
        let floor = current.next_element_id();
        match self.history.redo(current) {
            Ok(next) => {
                self.draft = next.retire_element_ids_below(floor);
                debug!(redo = self.history.redo_count(), "Redo");
                self.drop_stale_selection();
                Ok(true)
            }
            Err(_) => Ok(false),
        }
    }

    // ── Ending the session ──────────────────────────────────────

    /// Validate the draft and return the payload it would publish, without
    /// ending the session.
    pub fn preview(&self) -> SessionResult<PublishPayload> {
        Ok(finalize(&self.draft)?)
    }

    /// Finalize the draft and hand it to `publisher`, ending the session.
    ///
    /// On a validation failure the session comes back unchanged inside the
    /// error so the user can fix the draft and try again.
    pub fn publish<P>(self, publisher: &P) -> Result<PublishPayload, PublishRejected>
    where
        P: Publisher + ?Sized,
    {
        if self.interaction == Interaction::TextInputPending {
            let error = SessionError::InvalidTransition {
                from: self.interaction,
                action: "publish",
            };
            return Err(PublishRejected {
                session: Box::new(self),
                error,
            });
        }
        match finalize(&self.draft) {
            Ok(payload) => {
                info!(
                    draft = %payload.draft_id,
                    texts = payload.text_overlays.len(),
                    stickers = payload.sticker_elements.len(),
                    "Publishing draft"
                );
                publisher.submit(payload.clone());
                Ok(payload)
            }
            Err(error) => {
                warn!(draft = %self.draft.id(), %error, "Publish rejected");
                Err(PublishRejected {
                    session: Box::new(self),
                    error: error.into(),
                })
            }
        }
    }

    /// Abandon the session. The draft is dropped with no side effects.
    pub fn discard(self) {
        info!(draft = %self.draft.id(), "Draft discarded");
    }

    // ── Internals ───────────────────────────────────────────────

    fn transition(&mut self, to: Interaction) {
        if self.interaction != to {
            debug!(from = %self.interaction, to = %to, "Interaction changed");
            self.interaction = to;
        }
    }

    fn ensure_not_modal(&self, action: &'static str) -> SessionResult<()> {
        if self.interaction == Interaction::TextInputPending {
            Err(SessionError::InvalidTransition {
                from: self.interaction,
                action,
            })
        } else {
            Ok(())
        }
    }

    /// Install the outcome of a draft operation. Rejections keep the current
    /// draft; edits that change nothing are not recorded.
    fn commit(
        &mut self,
        op: &'static str,
        next: Result<Draft, ValidationError>,
    ) -> SessionResult<()> {
        match next {
            Ok(next) => {
                if next != self.draft {
                    let previous = std::mem::replace(&mut self.draft, next);
                    self.history.record(previous);
                    debug!(op, "Draft updated");
                }
                Ok(())
            }
            Err(error) => {
                warn!(op, %error, "Edit rejected");
                Err(error.into())
            }
        }
    }

    fn drop_stale_selection(&mut self) {
        if let Interaction::ElementSelected(id) = self.interaction {
            if !self.draft.contains_element(id) {
                self.transition(Interaction::Idle);
            }
        }
    }
}
