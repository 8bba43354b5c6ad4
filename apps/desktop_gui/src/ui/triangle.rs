//! Triangle diagram: one clickable vertex per attribute and a center badge.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke};
use triangle_core::{Attribute, ViewState};

use crate::ui::theme;

pub const VERTEX_RADIUS: f32 = 34.0;
const CENTER_RADIUS: f32 = 42.0;

/// Good on top, Fast bottom left, Cheap bottom right.
pub fn vertex_positions(rect: Rect) -> [(Attribute, Pos2); 3] {
    let inset = VERTEX_RADIUS + 8.0;
    let inner = rect.shrink(inset);
    [
        (Attribute::Good, inner.center_top()),
        (Attribute::Fast, inner.left_bottom()),
        (Attribute::Cheap, inner.right_bottom()),
    ]
}

pub fn hit_vertex(rect: Rect, pointer: Pos2) -> Option<Attribute> {
    vertex_positions(rect)
        .into_iter()
        .find(|(_, center)| center.distance(pointer) <= VERTEX_RADIUS)
        .map(|(attribute, _)| attribute)
}

fn centroid(points: &[(Attribute, Pos2); 3]) -> Pos2 {
    let sum = points
        .iter()
        .fold(egui::Vec2::ZERO, |acc, (_, p)| acc + p.to_vec2());
    (sum / 3.0).to_pos2()
}

/// Draws the diagram and returns the vertex clicked this frame, if any.
pub fn show_triangle(ui: &mut egui::Ui, view: &ViewState, size: egui::Vec2) -> Option<Attribute> {
    let (response, painter) = ui.allocate_painter(size, Sense::click());
    let rect = response.rect;
    let vertices = vertex_positions(rect);

    let edge = Stroke::new(3.0, Color32::from_white_alpha(170));
    for i in 0..vertices.len() {
        let from = vertices[i].1;
        let to = vertices[(i + 1) % vertices.len()].1;
        painter.line_segment([from, to], edge);
    }

    let hovered = response.hover_pos().and_then(|pos| hit_vertex(rect, pos));
    for (attribute, center) in vertices {
        let base = theme::attribute_color(attribute);
        let selected = view.selection.contains(attribute);
        let fill = if selected {
            base
        } else {
            theme::lighten_color(base, 0.55)
        };
        let radius = if selected {
            VERTEX_RADIUS
        } else {
            VERTEX_RADIUS * 0.85
        };
        painter.circle_filled(center, radius, fill);
        if selected || hovered == Some(attribute) {
            painter.circle_stroke(center, radius + 3.0, Stroke::new(3.0, Color32::WHITE));
        }
        painter.text(
            center,
            Align2::CENTER_CENTER,
            attribute.label(),
            FontId::proportional(16.0),
            Color32::WHITE,
        );
    }

    let badge = view.center_badge();
    let center = centroid(&vertices);
    let scale = match view.selection_size {
        3 => 1.2,
        2 => 1.1,
        _ => 1.0,
    };
    painter.circle_filled(center, CENTER_RADIUS * scale, theme::badge_fill(badge));
    painter.text(
        center - egui::vec2(0.0, 9.0),
        Align2::CENTER_CENTER,
        badge.icon(),
        FontId::proportional(20.0),
        theme::badge_text(badge),
    );
    painter.text(
        center + egui::vec2(0.0, 14.0),
        Align2::CENTER_CENTER,
        badge.label(),
        FontId::proportional(11.0),
        theme::badge_text(badge),
    );

    if response.clicked() {
        response
            .interact_pointer_pos()
            .and_then(|pos| hit_vertex(rect, pos))
    } else {
        None
    }
}
