use ambient::ParticleField;
use eframe::egui::{self, Color32};

const FIELD_OPACITY: f32 = 0.3;

/// Advances the field by one frame and paints it behind the widgets in `rect`.
pub fn step_and_paint(painter: &egui::Painter, rect: egui::Rect, field: &mut ParticleField) {
    let size = (rect.width(), rect.height());
    if field.bounds() != size {
        field.resize(size.0, size.1);
    }
    field.step();

    for particle in field.particles() {
        let alpha = (particle.opacity * FIELD_OPACITY * 255.0).round() as u8;
        painter.circle_filled(
            rect.min + egui::vec2(particle.x, particle.y),
            particle.size,
            Color32::from_white_alpha(alpha),
        );
    }
}
