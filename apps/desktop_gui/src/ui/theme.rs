//! Colors for the symbolic tokens handed out by `triangle_core`.

use eframe::egui::Color32;
use triangle_core::{AccentColor, Attribute, CenterBadge};

pub const CARD_BACKGROUND: Color32 = Color32::from_rgb(250, 250, 252);
pub const CARD_TEXT: Color32 = Color32::from_rgb(44, 62, 80);
pub const WARNING_BACKGROUND: Color32 = Color32::from_rgb(255, 138, 80);
pub const BACKGROUND: Color32 = Color32::from_rgb(58, 70, 140);

pub fn accent_color(accent: AccentColor) -> Color32 {
    match accent {
        AccentColor::Good => Color32::from_rgb(46, 204, 113),
        AccentColor::Fast => Color32::from_rgb(52, 152, 219),
        AccentColor::Cheap => Color32::from_rgb(243, 156, 18),
        AccentColor::Alert => Color32::from_rgb(231, 76, 60),
    }
}

pub fn attribute_color(attribute: Attribute) -> Color32 {
    accent_color(attribute.into())
}

pub fn badge_fill(badge: CenterBadge) -> Color32 {
    match badge {
        CenterBadge::Achievable => Color32::from_rgb(39, 174, 96),
        CenterBadge::Overloaded => Color32::from_rgb(192, 57, 43),
        CenterBadge::Impossible => Color32::from_rgba_unmultiplied(255, 255, 255, 230),
    }
}

pub fn badge_text(badge: CenterBadge) -> Color32 {
    match badge {
        CenterBadge::Impossible => CARD_TEXT,
        CenterBadge::Achievable | CenterBadge::Overloaded => Color32::WHITE,
    }
}

pub fn lighten_color(c: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |channel: u8| -> u8 {
        let channel = channel as f32;
        (channel + (255.0 - channel) * t).round().clamp(0.0, 255.0) as u8
    };
    Color32::from_rgba_unmultiplied(mix(c.r()), mix(c.g()), mix(c.b()), c.a())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lighten_moves_channels_towards_white() {
        let c = lighten_color(Color32::from_rgb(0, 100, 255), 0.5);
        assert_eq!((c.r(), c.g(), c.b()), (128, 178, 255));
        assert_eq!(lighten_color(Color32::BLACK, 2.0), Color32::WHITE);
    }

    #[test]
    fn every_attribute_has_a_distinct_color() {
        let colors: Vec<_> = Attribute::ALL.into_iter().map(attribute_color).collect();
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_ne!(colors[0], colors[2]);
    }
}
