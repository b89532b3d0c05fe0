//! Main Hilite window

use crate::config::AppConfig;
use crate::gui::search::SearchState;
use crate::highlight::Span;
use crate::logging;
use crate::session::EMPTY_MESSAGE;
use crate::{Catalog, SearchSession};
use eframe::egui;
use eframe::egui::text::{LayoutJob, TextFormat};
use eframe::egui::{Color32, FontId};
use std::time::Instant;

/// Marker-pen yellow behind matched text
const MARK_BG: Color32 = Color32::from_rgb(254, 240, 138);

/// Main application state
pub struct HiliteApp {
    /// Search input
    search: SearchState,
    /// Query, debounce and results
    session: SearchSession,
}

impl HiliteApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, catalog: Catalog, config: &AppConfig) -> Self {
        logging::separator("GUI session");
        Self {
            search: SearchState::default(),
            session: SearchSession::new(catalog, config),
        }
    }

    /// Render label, input and result count
    fn render_search_bar(&mut self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new("Search").strong());
        let response = ui.add(
            egui::TextEdit::singleline(&mut self.search.query)
                .desired_width(320.0)
                .hint_text("Type here..."),
        );

        if self.search.first_frame {
            response.request_focus();
            self.search.first_frame = false;
        }

        if response.changed() {
            self.session.set_query(self.search.query.clone(), Instant::now());
        }

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            ui.label(
                egui::RichText::new(format!("{} post", self.session.result_count())).strong(),
            );
            ui.label(" were found.");
        });
    }

    /// Render the matching records with highlighted matches
    fn render_results(&self, ui: &mut egui::Ui) {
        if self.session.result_count() == 0 {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                ui.label(EMPTY_MESSAGE);
            });
            return;
        }

        let text_color = ui.visuals().text_color();
        let strong_color = ui.visuals().strong_text_color();

        egui::ScrollArea::vertical().show(ui, |ui| {
            for row in self.session.rows() {
                ui.label(layout_spans(
                    &row.title_spans,
                    TextFormat::simple(FontId::proportional(16.0), strong_color),
                ));
                ui.label(layout_spans(
                    &row.description_spans,
                    TextFormat::simple(FontId::proportional(14.0), text_color),
                ));
                ui.add_space(12.0);
            }
        });
    }
}

/// Build a text layout where matched spans get a marker background
pub fn layout_spans(spans: &[Span<'_>], base: TextFormat) -> LayoutJob {
    let mut job = LayoutJob::default();
    for span in spans {
        let format = if span.is_match() {
            TextFormat {
                background: MARK_BG,
                color: Color32::BLACK,
                ..base.clone()
            }
        } else {
            base.clone()
        };
        job.append(span.text(), 0.0, format);
    }
    job
}

impl eframe::App for HiliteApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.session.tick(now);

        if ctx.input(|i| i.viewport().close_requested()) {
            self.session.close();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(24.0);
            self.render_search_bar(ui);
            ui.separator();
            self.render_results(ui);
        });

        // Wake up again when the pending query is due
        if let Some(remaining) = self.session.time_remaining(Instant::now()) {
            ctx.request_repaint_after(remaining);
        }
    }
}
