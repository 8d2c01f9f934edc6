//! Integration test crate for StoryEdit.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It depends on the storyedit crates to verify they work together.

#[cfg(test)]
mod editing;

#[cfg(test)]
mod publishing;
