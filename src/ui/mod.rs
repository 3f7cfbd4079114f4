//! UI layer: desktop app, colour tables, interactive elements, status indicators.

pub mod app;
pub mod colors;
pub mod element;
pub mod status;
