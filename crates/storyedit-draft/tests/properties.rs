//! Property tests for draft invariants.

use std::collections::HashSet;

use proptest::prelude::*;
use storyedit_core::{Color, ElementId, PlaybackSpeed};
use storyedit_draft::{Adjustments, Draft, MediaReference, TextStyle};

const DURATION: f64 = 30.0;

fn reel() -> Draft {
    Draft::reel(MediaReference::video("file:///clip.mp4", DURATION, 1080, 1920)).unwrap()
}

#[derive(Debug, Clone)]
enum Op {
    AddText(String),
    AddSticker(String),
    Remove(u64),
    Front(u64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[a-zA-Z ]{0,8}".prop_map(Op::AddText),
        prop::sample::select(vec!["🔥", "✨", "", "😂"]).prop_map(|s| Op::AddSticker(s.into())),
        (1u64..20).prop_map(Op::Remove),
        (1u64..20).prop_map(Op::Front),
    ]
}

fn apply(draft: &Draft, op: &Op) -> Draft {
    match op {
        Op::AddText(text) => draft
            .add_text_overlay(text, TextStyle::Modern, Color::WHITE)
            .unwrap_or_else(|_| draft.clone()),
        Op::AddSticker(emoji) => draft
            .add_sticker_element(emoji)
            .unwrap_or_else(|_| draft.clone()),
        Op::Remove(id) => draft.remove_element(ElementId::new(*id)),
        Op::Front(id) => draft.bring_to_front(ElementId::new(*id)),
    }
}

proptest! {
    #[test]
    fn element_ids_stay_unique(ops in prop::collection::vec(op(), 0..40)) {
        let mut draft = reel();
        let mut ever_issued = HashSet::new();
        for op in &ops {
            let before = draft.next_element_id();
            draft = apply(&draft, op);
            if draft.next_element_id() != before {
                // A fresh id is never one handed out earlier.
                prop_assert!(ever_issued.insert(before));
            }
            let ids: Vec<_> = draft.element_ids().collect();
            let distinct: HashSet<_> = ids.iter().copied().collect();
            prop_assert_eq!(ids.len(), distinct.len());
        }
    }

    #[test]
    fn removal_is_idempotent(ops in prop::collection::vec(op(), 0..20), id in 0u64..20) {
        let mut draft = reel();
        for op in &ops {
            draft = apply(&draft, op);
        }
        let id = ElementId::new(id);
        let once = draft.remove_text_overlay(id);
        prop_assert_eq!(once.remove_text_overlay(id), once.clone());
        let once = draft.remove_sticker_element(id);
        prop_assert_eq!(once.remove_sticker_element(id), once);
    }

    #[test]
    fn adjustments_always_in_range(b in any::<i32>(), c in any::<i32>(), s in any::<i32>()) {
        let adj = reel().set_adjustments(Adjustments::new(b, c, s)).adjustments();
        for v in [adj.brightness, adj.contrast, adj.saturation] {
            prop_assert!((-100..=100).contains(&v));
        }
    }

    #[test]
    fn trim_accepted_iff_valid(start in -5.0f64..40.0, end in -5.0f64..40.0) {
        let draft = reel();
        match draft.set_trim(start, end) {
            Ok(next) => {
                prop_assert!(0.0 <= start && start < end && end <= DURATION);
                let trim = next.trim().unwrap();
                prop_assert_eq!((trim.start(), trim.end()), (start, end));
            }
            Err(_) => {
                prop_assert!(!(0.0 <= start && start < end && end <= DURATION));
            }
        }
        // The source draft is never touched.
        prop_assert_eq!(draft.trim().unwrap().end(), DURATION);
    }

    #[test]
    fn speed_accepted_iff_member(speed in 0.0f64..3.0) {
        let allowed = PlaybackSpeed::ALL.iter().any(|s| s.factor() == speed);
        prop_assert_eq!(reel().set_speed(speed).is_ok(), allowed);
    }
}

#[test]
fn every_listed_speed_is_accepted() {
    for speed in [0.5, 0.75, 1.0, 1.25, 1.5, 2.0] {
        let draft = reel().set_speed(speed).unwrap();
        assert_eq!(draft.speed().map(f64::from), Some(speed));
    }
}
