//! Hardware-independent star rating widget
//!
//! This crate contains a touch-driven rating control that renders a row of
//! star icons, resolves touch positions to whole or half-star ratings, and
//! notifies a listener once the user lifts their finger.
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles on both
//! embedded targets and desktop hosts (for the simulator and tests).

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod rating;
pub mod ui;
