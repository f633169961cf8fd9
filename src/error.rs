//! One error type for every I/O boundary of the app.
//! Every variant states *where* things went wrong; the per-frame core never fails.

use std::fmt::{self, Display};

#[derive(Debug)]
pub enum Error {
    WindowInit(String),   // Creating the window failed
    WindowUpdate(String), // Updating the window buffer failed
    CameraInit(String),   // Opening/starting the camera failed
    CameraFrame(String),  // Grabbing/decoding a frame failed
    Save(String),         // Writing the canvas image failed
    Replay(String),       // Reading or parsing a landmark replay failed
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::WindowInit(s) => write!(f, "Window init error: {s}"),
            Error::WindowUpdate(s) => write!(f, "Window update error: {s}"),
            Error::CameraInit(s) => write!(f, "Camera init error: {s}"),
            Error::CameraFrame(s) => write!(f, "Camera frame error: {s}"),
            Error::Save(s) => write!(f, "Save error: {s}"),
            Error::Replay(s) => write!(f, "Replay error: {s}"),
        }
    }
}

impl std::error::Error for Error {}
