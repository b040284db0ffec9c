use crate::assistant::{
    ApiError, ChatSession, ChemistryBackend, CompoundFetcher, CompoundInfo, CompoundTicket,
    OpenRouterClient,
};
use crate::chemistry::ElementRecord;
use crate::config::Config;
use crate::renderer::Renderer;
use crate::table::TableLayout;
use crate::ui::desktop::{UiFrame, UiLayer};
use crate::ui::panels::{self, PanelActions, PanelContext};
use crate::ui::{SelectionChange, UiState};
use log::{debug, info, warn};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Instant;
use winit::dpi::PhysicalSize;
use winit::{event::WindowEvent, window::Window};

pub type AppError = Box<dyn std::error::Error + Send + Sync>;
pub type AppResult<T> = Result<T, AppError>;

/// Results coming back from the runtime to the UI thread.
#[derive(Debug)]
pub enum BackendEvent {
    Compounds {
        ticket: CompoundTicket,
        result: Result<Vec<CompoundInfo>, ApiError>,
    },
    ChatReply(Result<String, ApiError>),
}

pub struct App {
    renderer: Renderer,
    ui_layer: UiLayer,
    ui_state: UiState,
    layout: TableLayout,
    compounds: CompoundFetcher,
    chat: ChatSession,
    client: OpenRouterClient,
    runtime: tokio::runtime::Runtime,
    events_tx: Sender<BackendEvent>,
    events_rx: Receiver<BackendEvent>,
    started: Instant,
    redraw_at: Option<Instant>,
}

impl App {
    pub async fn initialize(window: Arc<Window>, config: &Config) -> AppResult<Self> {
        let layout = TableLayout::build(ElementRecord::all())?;
        debug!("table layout holds {} elements", layout.len());

        let renderer = Renderer::new(window.clone()).await?;
        let surface_format = renderer.surface_config().format;
        let ui_layer = UiLayer::new(&window, renderer.device(), surface_format);

        // workers wake the event loop through egui; delayed repaints are
        // scheduled from the frame output instead
        let redraw_target = window.clone();
        ui_layer.ctx().set_request_repaint_callback(move |info| {
            if info.delay.is_zero() {
                redraw_target.request_redraw();
            }
        });

        let client = OpenRouterClient::new(config.api.clone())?;
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("titan-backend")
            .enable_all()
            .build()?;
        let (events_tx, events_rx) = mpsc::channel();

        info!(
            "assistant endpoint {} using model {}",
            config.api.base_url, config.api.model
        );

        Ok(Self {
            renderer,
            ui_layer,
            ui_state: UiState::new(),
            layout,
            compounds: CompoundFetcher::new(),
            chat: ChatSession::new(),
            client,
            runtime,
            events_tx,
            events_rx,
            started: Instant::now(),
            redraw_at: None,
        })
    }

    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.renderer.resize(new_size);
    }

    pub fn size(&self) -> PhysicalSize<u32> {
        self.renderer.size()
    }

    pub fn handle_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.ui_layer.handle_event(window, event)
    }

    /// True while something on screen keeps moving.
    pub fn wants_continuous_redraw(&self) -> bool {
        self.ui_state.selected().is_some() || self.compounds.is_loading() || self.chat.is_loading()
    }

    /// Deadline egui asked for in the last frame (cursor blink, tooltips).
    pub fn next_redraw(&self) -> Option<Instant> {
        self.redraw_at
    }

    pub fn render(&mut self, window: &Window) -> Result<(), wgpu::SurfaceError> {
        self.drain_backend_events();

        let time_secs = self.started.elapsed().as_secs_f32();
        let mut actions = PanelActions::default();
        let ui_frame: UiFrame = {
            let (ui_layer, ui_state) = (&mut self.ui_layer, &mut self.ui_state);
            let view = PanelContext {
                layout: &self.layout,
                compounds: &self.compounds,
                chat: &self.chat,
                time_secs,
            };
            ui_layer.prepare(window, |ctx| {
                actions = panels::show(ctx, ui_state, &view);
            })
        };

        self.redraw_at = ui_frame.redraw_deadline(Instant::now());
        self.apply_ui_changes(actions);

        let mut pending_frame = Some(ui_frame);
        let (renderer, ui_layer) = (&mut self.renderer, &mut self.ui_layer);
        renderer.render_with_ui(|device, queue, encoder, view| {
            if let Some(frame) = pending_frame.take() {
                ui_layer.paint(device, queue, encoder, view, frame);
            }
        })
    }

    fn drain_backend_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            match event {
                BackendEvent::Compounds { ticket, result } => {
                    if self.compounds.resolve(ticket, result) {
                        debug!("compounds ready for element {}", ticket.atomic_number);
                    }
                }
                BackendEvent::ChatReply(result) => self.chat.resolve(result),
            }
        }
    }

    fn apply_ui_changes(&mut self, actions: PanelActions) {
        match self.ui_state.take_selection_change() {
            Some(SelectionChange::Selected(z)) => self.start_compound_fetch(z),
            Some(SelectionChange::Cleared) => self.compounds.reset(),
            None => {}
        }

        if let Some(text) = actions.chat_submission {
            self.start_chat(&text);
        }
    }

    fn start_compound_fetch(&mut self, z: u8) {
        let Some(element) = ElementRecord::by_atomic_number(z) else {
            warn!("selection {z} is not in the dataset");
            self.compounds.reset();
            return;
        };

        let ticket = self.compounds.begin(z);
        info!("fetching compounds for {} (request {})", element.name, ticket.request_id);

        let client = self.client.clone();
        let events_tx = self.events_tx.clone();
        let ctx = self.ui_layer.ctx().clone();
        self.runtime.spawn(async move {
            let result = client.compounds(element).await;
            if events_tx.send(BackendEvent::Compounds { ticket, result }).is_ok() {
                ctx.request_repaint();
            }
        });
    }

    fn start_chat(&mut self, text: &str) {
        let Some(request) = self.chat.begin_send(text) else {
            return;
        };
        debug!("sending chat turn with {} messages of history", request.history.len());

        let client = self.client.clone();
        let events_tx = self.events_tx.clone();
        let ctx = self.ui_layer.ctx().clone();
        self.runtime.spawn(async move {
            let result = client.chat(&request.history).await;
            if events_tx.send(BackendEvent::ChatReply(result)).is_ok() {
                ctx.request_repaint();
            }
        });
    }
}
