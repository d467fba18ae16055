// src/gui/cards.rs
//
// Draws the two central views: card sections (the catalog as the site
// shows it) and a flat table of the raw records.

use eframe::egui::{self, RichText, ScrollArea};
use egui_extras::{Column, TableBuilder};

use crate::catalog::RecordSet;
use crate::render::{Card, Section};

const CARD_WIDTH: f32 = 240.0;

pub fn draw_cards(ui: &mut egui::Ui, sections: &[Section]) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for section in sections {
                ui.heading(&section.heading);
                ui.add_space(4.0);
                ui.horizontal_wrapped(|ui| {
                    for card in &section.cards {
                        draw_card(ui, card);
                    }
                });
                ui.add_space(12.0);
            }
        });
}

fn draw_card(ui: &mut egui::Ui, card: &Card) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(CARD_WIDTH);
        ui.vertical(|ui| {
            ui.label(RichText::new(&card.title).strong())
                .on_hover_text(format!("Cover: {}", card.cover));
            ui.label(&card.description);
            ui.add_space(2.0);
            match &card.link {
                Some(link) => {
                    if ui.button("Buy").clicked() {
                        ui.ctx().open_url(egui::OpenUrl::new_tab(link));
                    }
                }
                // No purchase link: no click-through.
                None => {
                    ui.weak("Not available");
                }
            }
        });
    });
}

pub fn draw_table(ui: &mut egui::Ui, set: &RecordSet) {
    let rows = set.to_rows();
    let ncols = set.headers().len().max(1);

    TableBuilder::new(ui)
        .striped(true)
        .columns(Column::auto().resizable(true), ncols)
        .header(20.0, |mut header| {
            for h in set.headers() {
                header.col(|ui| {
                    ui.strong(h);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, rows.len(), |mut row| {
                let cells = &rows[row.index()];
                for cell in cells {
                    row.col(|ui| {
                        ui.label(cell);
                    });
                }
            });
        });
}
