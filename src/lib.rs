//! Hardware-independent emotional face widget
//!
//! This crate contains a custom-drawn face widget that renders a happy or sad
//! mood out of geometric primitives, toggles a secondary palette when tapped,
//! and keeps its mood across suspend/resume. A small host page wires two
//! faces to a feedback label.
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles on both
//! embedded targets and desktop hosts (for the simulator and tests).

#![no_std]

extern crate alloc;

pub mod pages;
pub mod ui;
