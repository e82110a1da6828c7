//! # atelier-diff
//!
//! Structural snapshot diffing and intent classification.
//!
//! Both operations are pure: no I/O, deterministic given identical inputs.
//! `diff` matches elements across snapshots by stable identity and emits a
//! structured change set; `classify_intent` derives a coarse intent
//! (action type, focus area, confidence) from that change set.

pub mod differ;
pub mod intent;

pub use differ::diff;
pub use intent::classify_intent;
