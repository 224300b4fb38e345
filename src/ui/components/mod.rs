// src/ui/components/mod.rs
//! UI components library

pub mod emo_face;
pub mod label;

pub use emo_face::{EmoFace, EmoFaceConfig, EmoFaceState, Mood};
pub use label::{Label, TextSize};
