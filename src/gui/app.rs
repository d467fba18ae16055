// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex, mpsc},
    thread,
    time::Duration,
};

use eframe::egui;

use crate::{
    catalog::{RecordSet, group_by_field},
    config::{
        consts::{DEFAULT_CATEGORY, FIELD_CATEGORY},
        state::{AppState, ViewKind},
    },
    error::LoadError,
    load, render,
};

use super::{cards, progress::GuiProgress};

pub fn run(mut options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let state = AppState::default();
    options.viewport = options
        .viewport
        .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32]);

    let mut app = App::new(state);
    app.reload();

    eframe::run_native(
        "GuidedQuill Bookshelf",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // current catalog + derived card sections
    pub records: Option<RecordSet>,
    pub sections: Vec<render::Section>,

    // status line (load worker writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    pub load_failed: bool,

    rx: Option<mpsc::Receiver<Result<RecordSet, LoadError>>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        // Cache first, so the window has content while the fetch runs.
        let records = load::load_cached();
        let status = if records.is_some() {
            s!("Loaded cached catalog")
        } else {
            s!("Idle")
        };

        let mut app = Self {
            state,
            records,
            sections: Vec::new(),
            status: Arc::new(Mutex::new(status)),
            running: false,
            load_failed: false,
            rx: None,
        };
        app.rebuild_sections();

        logf!(
            "Init: cached records={}",
            app.records.as_ref().map(|s| s.len()).unwrap_or(0)
        );
        app
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    fn rebuild_sections(&mut self) {
        self.sections = match &self.records {
            Some(set) => {
                let index = group_by_field(set.clone(), FIELD_CATEGORY, DEFAULT_CATEGORY);
                render::build_sections(&index)
            }
            None => Vec::new(),
        };
    }

    /// Kick off a catalog load on a worker thread. No-op while one runs.
    pub fn reload(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.load_failed = false;
        self.status("Loading books…");

        let (tx, rx) = mpsc::channel();
        self.rx = Some(rx);

        let source = self.state.options.source.clone();
        let status = Arc::clone(&self.status);
        thread::spawn(move || {
            let mut progress = GuiProgress::new(status);
            let result = load::collect_catalog(&source, Some(&mut progress));
            let _ = tx.send(result);
        });
    }

    fn poll_load(&mut self) {
        let Some(rx) = &self.rx else { return };
        match rx.try_recv() {
            Ok(Ok(set)) => {
                self.status(format!("Loaded {} book(s)", set.len()));
                self.records = Some(set);
                self.rebuild_sections();
                self.running = false;
                self.rx = None;
            }
            Ok(Err(e)) => {
                loge!("GUI: load failed ({e})");
                // Degrade to an empty view plus one uniform message,
                // never a half-populated one.
                self.status(format!("Failed to load books: {e}"));
                self.records = None;
                self.sections.clear();
                self.load_failed = true;
                self.running = false;
                self.rx = None;
            }
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => {
                self.running = false;
                self.rx = None;
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load();
        if self.running {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!self.running, egui::Button::new("Reload"))
                    .clicked()
                {
                    self.reload();
                }

                ui.separator();
                ui.selectable_value(&mut self.state.gui.view, ViewKind::Cards, "Cards");
                ui.selectable_value(&mut self.state.gui.view, ViewKind::Table, "Table");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(self.status.lock().unwrap().clone());
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.running && self.records.is_none() {
                ui.centered_and_justified(|ui| {
                    ui.label("Loading books…");
                });
            } else if self.load_failed {
                ui.centered_and_justified(|ui| {
                    ui.colored_label(
                        ui.visuals().error_fg_color,
                        self.status.lock().unwrap().clone(),
                    );
                });
            } else if self.sections.is_empty() {
                ui.centered_and_justified(|ui| {
                    ui.label("No books found.");
                });
            } else {
                match self.state.gui.view {
                    ViewKind::Cards => cards::draw_cards(ui, &self.sections),
                    ViewKind::Table => {
                        if let Some(set) = &self.records {
                            cards::draw_table(ui, set);
                        }
                    }
                }
            }
        });
    }
}
