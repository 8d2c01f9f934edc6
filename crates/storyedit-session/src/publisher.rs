//! The external publish collaborator.

use storyedit_draft::PublishPayload;

/// Receives finalized payloads.
///
/// Handing off is fire-and-forget from the editor's point of view: the
/// session ends as soon as `submit` returns, and upload, retry and error
/// display belong to the implementor.
pub trait Publisher {
    fn submit(&self, payload: PublishPayload);
}

impl<F> Publisher for F
where
    F: Fn(PublishPayload),
{
    fn submit(&self, payload: PublishPayload) {
        self(payload)
    }
}
