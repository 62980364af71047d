// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex, mpsc},
};

use eframe::egui;

use crate::{
    config::{options::AppOptions, state::AppState},
    core::browser,
    data::{Dataset, Match, effective_selection, match_view},
    error::PanelError,
    preview::Preview,
    store::{self, DataSource, PreviewSource},
};

pub fn run(options: eframe::NativeOptions, app_options: AppOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Match Panel",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::new(app_options))))),
    )?;
    Ok(())
}

/// Results coming back from the worker thread.
pub enum JobResult {
    Refreshed(Result<Dataset, PanelError>),
    Analyzed(String, Result<Preview, PanelError>),
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // active dataset and where it came from
    pub dataset: Dataset,
    pub source: DataSource,

    // analysis JSON picked via "Upload analysis JSON"
    pub uploaded_preview: Option<Preview>,

    // latest live analysis, kept even when the cache write failed
    pub live_preview: Option<(String, Preview)>,

    // preview for the active id, resolved once per change
    pub preview: Option<Preview>,
    pub preview_source: PreviewSource,
    pub preview_for: Option<String>,
    pub preview_stale: bool,

    // status/progress (workers write here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    pub jobs: Option<mpsc::Receiver<JobResult>>,

    pub browser_available: bool,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let browser_available = browser::find_browser(&state.options.browser).is_some();

        let (dataset, source, status) = match store::load_dataset(&state.options.data, None) {
            Ok((ds, src)) => {
                let msg = if ds.is_empty() { s!("No local data") } else { s!("Loaded local data") };
                (ds, src, msg)
            }
            Err(e) => {
                loge!("Init: {e}");
                (Dataset::empty(), DataSource::Empty, format!("Error: {e}"))
            }
        };

        logf!(
            "Init: source={}, browser={}",
            source.label(),
            if browser_available { "yes" } else { "no" }
        );

        Self {
            state,
            dataset,
            source,
            uploaded_preview: None,
            live_preview: None,
            preview: None,
            preview_source: PreviewSource::Missing,
            preview_for: None,
            preview_stale: true,
            status: Arc::new(Mutex::new(status)),
            running: false,
            jobs: None,
            browser_available,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Current list, filtered and sorted.
    pub fn view(&self) -> Vec<&Match> {
        match_view(&self.dataset, self.state.gui.tab, &self.state.gui.search)
    }

    /// Keep `selected_match_id` pointing at a listed row (first row by default).
    pub fn sync_selection(&mut self) {
        let id = {
            let view = self.view();
            effective_selection(&view, self.state.gui.selected_match_id.as_deref()).map(|m| m.id.clone())
        };
        self.state.gui.selected_match_id = id;
    }

    pub fn active_match(&self) -> Option<&Match> {
        self.state.gui.active_preview_id.as_deref().and_then(|id| self.dataset.find(id))
    }

    /// Swap in a new dataset; selection and the pinned panel stay if their ids survive.
    pub fn replace_dataset(&mut self, ds: Dataset, source: DataSource) {
        let (u, f) = ds.counts();
        logf!("Data: {} ({u} upcoming, {f} finished)", source.label());
        self.dataset = ds;
        self.source = source;
        self.invalidate_preview();
        self.sync_selection();
    }

    /// Forget the resolved preview; it is re-read on the next frame.
    pub fn invalidate_preview(&mut self) {
        self.preview_stale = true;
    }

    fn refresh_preview_if_needed(&mut self) {
        let active = self.state.gui.active_preview_id.clone();
        if !self.preview_stale && self.preview_for == active {
            return;
        }
        let live = self.live_preview.as_ref().map(|(id, p)| (id.as_str(), p));
        let (p, src) = match store::held_preview(self.uploaded_preview.as_ref(), live, active.as_deref()) {
            Some((p, src)) => (Some(p), src),
            None => store::resolve_preview(&self.state.options.data, None, active.as_deref()),
        };
        self.preview = p;
        self.preview_source = src;
        self.preview_for = active;
        self.preview_stale = false;
    }

    fn poll_jobs(&mut self, ctx: &egui::Context) {
        let Some(rx) = &self.jobs else { return };
        match rx.try_recv() {
            Ok(result) => {
                self.jobs = None;
                self.running = false;
                self.apply_job(result);
            }
            Err(mpsc::TryRecvError::Empty) => ctx.request_repaint(),
            Err(mpsc::TryRecvError::Disconnected) => {
                loge!("Worker ended without a result");
                self.jobs = None;
                self.running = false;
                self.status("Error: background task stopped");
            }
        }
    }

    fn apply_job(&mut self, result: JobResult) {
        match result {
            JobResult::Refreshed(Ok(ds)) => {
                self.replace_dataset(ds, DataSource::LiveScrape);
                self.status("Lists updated");
            }
            JobResult::Refreshed(Err(e)) => {
                loge!("Refresh: {e}");
                self.status(format!("Could not refresh: {e}"));
            }
            JobResult::Analyzed(id, Ok(p)) => {
                logf!("Analysis: {id} ready");
                self.state.gui.active_preview_id = Some(id.clone());
                self.uploaded_preview = None;
                self.live_preview = Some((id.clone(), p.clone()));
                self.preview = Some(p);
                self.preview_source = PreviewSource::Live;
                self.preview_for = Some(id);
                self.preview_stale = false;
                self.status("Analysis ready");
            }
            JobResult::Analyzed(id, Err(e)) => {
                loge!("Analysis {id}: {e}");
                self.status(format!("Analysis failed: {e}"));
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_jobs(ctx);
        self.sync_selection();
        self.refresh_preview_if_needed();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            crate::gui::components::header::draw(ui, self);
            crate::gui::components::options::draw(ui, self);
        });

        egui::SidePanel::left("matches")
            .resizable(true)
            .default_width(360.0)
            .show(ctx, |ui| {
                crate::gui::components::match_list::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::analysis_panel::draw(ui, self);
        });
    }
}
