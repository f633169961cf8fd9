//! # air_canvas
//!
//! Freehand drawing with a hand in front of a camera. Hand landmarks are the
//! only input device: pointing draws, a held fist opens the color picker, a
//! held thumb-out switches drawing on and off.
//!
//! ## Gestures
//!
//! | Gesture | Held for | Effect |
//! |---|---|---|
//! | Index up, middle curled | every frame | draw (or pick a color while the picker is open) |
//! | Fist | 0.5 s | open / close the color picker |
//! | Thumb far out | 0.5 s | enable / disable drawing (ignored while picking) |
//!
//! ## Layout
//!
//! The per-frame core is [`session::Session`]: [`gesture`] classifies the
//! landmarks, [`mode`] runs the two hold toggles from [`toggle`], then either
//! [`palette`] or [`stroke`] acts on the [`canvas`]. Everything else is
//! plumbing around it: landmark [`source`]s, the mouse-driven [`simulate`] hand, the
//! minifb window in [`draw`], the HUD in [`render`].
//!
//! ## Feature flags
//!
//! * (default): canvas on a black backdrop.
//! * `camera`: live webcam backdrop via nokhwa.

pub mod canvas;
pub mod config;
pub mod draw;
pub mod error;
pub mod gamma;
pub mod gesture;
pub mod mode;
pub mod palette;
pub mod render;
pub mod session;
pub mod simulate;
pub mod source;
pub mod stroke;
pub mod toggle;
pub mod types;

#[cfg(feature = "camera")]
pub mod camera;
