use eframe::egui::{self, Color32, RichText, Stroke};
use triangle_core::Example;

use crate::controller::reducer::DisplayState;
use crate::ui::theme;

/// Title, description and examples for the current view, or the limit
/// warning while one is showing.
pub fn show_result_card(ui: &mut egui::Ui, display: &DisplayState) {
    let view = &display.view;
    let warning = display.warning;
    let (fill, text_color) = match warning {
        Some(_) => (theme::WARNING_BACKGROUND, Color32::WHITE),
        None => (theme::CARD_BACKGROUND, theme::CARD_TEXT),
    };

    egui::Frame::new()
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(12))
        .inner_margin(egui::Margin::same(18))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            let (title, description) = match warning {
                Some(notice) => (notice.title, notice.description),
                None => (view.title.as_ref(), view.description),
            };
            ui.label(RichText::new(title).size(22.0).strong().color(text_color));
            ui.add_space(4.0);
            ui.label(RichText::new(description).size(15.0).color(text_color));

            for example in display.examples() {
                ui.add_space(8.0);
                show_example(ui, example);
            }
        });
}

fn show_example(ui: &mut egui::Ui, example: &Example) {
    let accent = theme::accent_color(example.accent);
    egui::Frame::new()
        .fill(theme::lighten_color(accent, 0.88))
        .stroke(Stroke::new(1.0, accent))
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new(example.title)
                    .size(15.0)
                    .strong()
                    .color(accent),
            );
            ui.label(RichText::new(example.description).color(theme::CARD_TEXT));
        });
}
