//! Presentation layer: askama view models for the widget fragment.

pub mod views;
