//! UI layer for the triangle widget: app shell, diagram, result card, theme, and background.

pub mod app;
pub mod particles;
pub mod result_card;
pub mod theme;
pub mod triangle;

pub use app::TriangleApp;
