//! SlideVerify demo application
//!
//! A native window hosting the slider through egui, printing every verified
//! value it receives.

mod app;

pub use app::{App, AppConfig, AppError};
