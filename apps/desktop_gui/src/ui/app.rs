use std::time::Duration;

use ambient::ParticleField;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui::{self, RichText};
use triangle_core::{Attribute, SelectionController};

use crate::config::Settings;
use crate::controller::events::{InputSource, UiEvent};
use crate::controller::orchestration::{dispatch_ui_event, schedule_warning_revert};
use crate::controller::reducer::{reduce, DisplayState, Effect};
use crate::ui::{particles, result_card, theme, triangle};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub struct TriangleApp {
    controller: SelectionController,
    display: DisplayState,
    ui_tx: Sender<UiEvent>,
    ui_rx: Receiver<UiEvent>,
    settings: Settings,
    particles: Option<ParticleField>,
    status: String,
}

impl TriangleApp {
    pub fn new(settings: Settings, ui_tx: Sender<UiEvent>, ui_rx: Receiver<UiEvent>) -> Self {
        let controller = SelectionController::new();
        let display = DisplayState::new(&controller);
        let particles = settings.particles_enabled.then(|| {
            ParticleField::new(
                settings.particle_count,
                settings.window_width,
                settings.window_height,
                &mut rand::rng(),
            )
        });

        Self {
            controller,
            display,
            ui_tx,
            ui_rx,
            settings,
            particles,
            status: String::new(),
        }
    }

    fn process_ui_events(&mut self, ctx: &egui::Context) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match reduce(&mut self.controller, &mut self.display, event) {
                Effect::None => {}
                Effect::ScheduleWarningRevert => {
                    let ctx = ctx.clone();
                    schedule_warning_revert(
                        self.ui_tx.clone(),
                        self.settings.warning_duration(),
                        move || ctx.request_repaint(),
                    );
                }
            }
        }
    }

    fn emit(&mut self, attribute: Attribute, source: InputSource) {
        dispatch_ui_event(
            &self.ui_tx,
            UiEvent::Toggle { attribute, source },
            &mut self.status,
        );
    }

    fn show_checkboxes(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for attribute in Attribute::ALL {
                // Drawn from the controller every frame so a rejected click
                // springs back on its own.
                let mut checked = self.controller.is_selected(attribute);
                let text = RichText::new(attribute.label())
                    .size(18.0)
                    .strong()
                    .color(theme::attribute_color(attribute));
                if ui.checkbox(&mut checked, text).changed() {
                    self.emit(attribute, InputSource::Checkbox);
                }
                ui.add_space(16.0);
            }
        });
    }

    fn show_main(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(12.0);
            ui.label(
                RichText::new("The Project Triangle")
                    .size(30.0)
                    .strong()
                    .color(egui::Color32::WHITE),
            );
            ui.label(
                RichText::new("Good, fast, cheap: you can only pick two.")
                    .size(16.0)
                    .color(egui::Color32::from_white_alpha(200)),
            );
            ui.add_space(12.0);
            self.show_checkboxes(ui);
            ui.add_space(8.0);

            let width = ui.available_width().min(420.0);
            if let Some(attribute) =
                triangle::show_triangle(ui, &self.display.view, egui::vec2(width, width * 0.85))
            {
                self.emit(attribute, InputSource::Vertex);
            }
            ui.add_space(12.0);
        });

        result_card::show_result_card(ui, &self.display);

        if !self.status.is_empty() {
            ui.add_space(6.0);
            ui.label(RichText::new(&self.status).color(egui::Color32::YELLOW));
        }
    }
}

impl eframe::App for TriangleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme::BACKGROUND))
            .show(ctx, |ui| {
                if let Some(field) = self.particles.as_mut() {
                    particles::step_and_paint(ui.painter(), ui.max_rect(), field);
                }
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.set_max_width(720.0);
                    ui.add_space(8.0);
                    self.show_main(ui);
                });
            });

        // Events queued this frame are reduced on the next one.
        if !self.ui_rx.is_empty() {
            ctx.request_repaint();
        } else if self.particles.is_some() {
            ctx.request_repaint_after(FRAME_INTERVAL);
        }
    }
}
