use crate::assistant::{ChatSession, CompoundFetcher, FetchState, Role};
use crate::atom::bohr::{self, BohrModel};
use crate::chemistry::{Category, ElementRecord};
use crate::constants::GRID_COLUMNS;
use crate::table::visual::legend_is_faded;
use crate::table::{FBlock, GridCell, RenderState, TableLayout, render_state};
use crate::ui::UiState;
use egui::{
    Align, Align2, Color32, FontId, Frame, Layout, Pos2, Rect, RichText, ScrollArea, Sense, Stroke,
    pos2, vec2,
};

const CELL_GAP: f32 = 4.0;
const STRIP_GAP: f32 = 24.0;
const CELL_ASPECT: f32 = 1.25;
const MIN_CELL_WIDTH: f32 = 36.0;

const PANEL_BG: Color32 = Color32::from_rgb(18, 18, 18);
const DIM_TEXT: Color32 = Color32::from_rgb(107, 114, 128);
const ACCENT: Color32 = Color32::from_rgb(236, 72, 153);
const NUCLEUS: Color32 = Color32::from_rgb(251, 191, 36);
const ELECTRON: Color32 = Color32::from_rgb(79, 209, 197);

/// Read-only state the panels draw from.
pub struct PanelContext<'a> {
    pub layout: &'a TableLayout,
    pub compounds: &'a CompoundFetcher,
    pub chat: &'a ChatSession,
    pub time_secs: f32,
}

/// Requests the panels hand back to the app after a frame.
#[derive(Debug, Default)]
pub struct PanelActions {
    pub chat_submission: Option<String>,
}

pub fn show(ctx: &egui::Context, ui_state: &mut UiState, view: &PanelContext<'_>) -> PanelActions {
    let mut actions = PanelActions::default();

    top_bar(ctx, ui_state);
    legend(ctx, ui_state);
    if let Some(element) = ui_state.selected_element() {
        detail_panel(ctx, ui_state, element, view);
    }
    table(ctx, ui_state, view.layout);
    chat_window(ctx, ui_state, view.chat, &mut actions);

    actions
}

fn top_bar(ctx: &egui::Context, ui_state: &mut UiState) {
    let search_rect = egui::TopBottomPanel::top("top_bar")
        .frame(Frame::side_top_panel(&ctx.style()).inner_margin(12.0))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("TITAN").strong().size(22.0).color(ACCENT));
                ui.label(RichText::new("Periodic Table").size(16.0).color(DIM_TEXT));

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui
                        .button(RichText::new("Ask AI").color(ACCENT))
                        .on_hover_text("Ask AI Assistant")
                        .clicked()
                    {
                        ui_state.open_chat();
                    }
                    ui.add(
                        egui::TextEdit::singleline(ui_state.search_term_mut())
                            .hint_text("Search element...")
                            .desired_width(280.0),
                    )
                    .rect
                })
                .inner
            })
            .inner
        })
        .inner;

    if ui_state.search_term().is_empty() {
        return;
    }

    let results = ui_state.search_results();
    let mut picked = None;
    egui::Area::new(egui::Id::new("search_results"))
        .order(egui::Order::Foreground)
        .fixed_pos(search_rect.left_bottom() + vec2(0.0, 4.0))
        .show(ctx, |ui| {
            Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_width(search_rect.width());
                ScrollArea::vertical().max_height(240.0).show(ui, |ui| {
                    if results.is_empty() {
                        ui.label(RichText::new("No elements found").color(DIM_TEXT));
                    }
                    for element in &results {
                        let label = format!(
                            "{:<3} {}  #{}",
                            element.symbol, element.name, element.atomic_number
                        );
                        if ui
                            .selectable_label(false, RichText::new(label).monospace())
                            .clicked()
                        {
                            picked = Some(element.atomic_number);
                        }
                    }
                });
            });
        });

    if let Some(z) = picked {
        ui_state.pick_search_result(z);
    }
}

fn legend(ctx: &egui::Context, ui_state: &mut UiState) {
    egui::TopBottomPanel::bottom("legend")
        .frame(Frame::side_top_panel(&ctx.style()).inner_margin(12.0))
        .show(ctx, |ui| {
            ui.label(RichText::new("Element Categories").strong());
            ui.label(RichText::new("Filter elements by clicking below").small().color(DIM_TEXT));
            ui.add_space(6.0);

            let active = ui_state.active_category();
            let mut toggled = None;
            ui.horizontal_wrapped(|ui| {
                for category in Category::LEGEND {
                    let mut color = category.display_color().to_color32();
                    if legend_is_faded(category, active) {
                        color = color.gamma_multiply(0.3);
                    }
                    let fill = if active == Some(category) {
                        color.gamma_multiply(0.35)
                    } else {
                        Color32::from_black_alpha(120)
                    };
                    let button = egui::Button::new(RichText::new(category.label()).color(color))
                        .fill(fill)
                        .stroke(Stroke::new(1.0, color));
                    if ui.add(button).clicked() {
                        toggled = Some(category);
                    }
                }
            });

            if let Some(category) = toggled {
                ui_state.toggle_category(category);
            }
        });
}

/// Pixel geometry of the 18-column grid plus the two strips below it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridGeometry {
    origin: Pos2,
    cell: egui::Vec2,
}

impl GridGeometry {
    pub fn fit(origin: Pos2, available_width: f32) -> Self {
        let columns = f32::from(GRID_COLUMNS);
        let width = ((available_width - CELL_GAP * (columns - 1.0)) / columns).max(MIN_CELL_WIDTH);
        Self {
            origin,
            cell: vec2(width, width * CELL_ASPECT),
        }
    }

    pub fn cell_rect(&self, cell: GridCell) -> Rect {
        let x = self.origin.x + f32::from(cell.column - 1) * (self.cell.x + CELL_GAP);
        let mut y = self.origin.y + f32::from(cell.row - 1) * (self.cell.y + CELL_GAP);
        if !cell.is_main_grid() {
            y += STRIP_GAP;
        }
        Rect::from_min_size(pos2(x, y), self.cell)
    }

    /// Rectangle covering every cell from `first` to `last` inclusive.
    pub fn span_rect(&self, first: GridCell, last: GridCell) -> Rect {
        self.cell_rect(first).union(self.cell_rect(last))
    }

    pub fn total_size(&self) -> egui::Vec2 {
        let last = self.span_rect(
            GridCell::new(1, 1),
            GridCell::new(FBlock::Actinides.strip_row(), GRID_COLUMNS),
        );
        last.max - self.origin
    }
}

fn table(ctx: &egui::Context, ui_state: &mut UiState, layout: &TableLayout) {
    egui::CentralPanel::default()
        .frame(Frame::central_panel(&ctx.style()).fill(Color32::from_rgb(5, 5, 5)))
        .show(ctx, |ui| {
            ScrollArea::both().show(ui, |ui| {
                let geometry = GridGeometry::fit(ui.cursor().min, ui.available_width());
                let (_, painter) = ui.allocate_painter(geometry.total_size(), Sense::hover());

                center_box(&painter, &geometry, ui_state.selected_element());

                for block in FBlock::ALL {
                    let placeholder = geometry.cell_rect(block.placeholder_cell());
                    painter.rect(
                        placeholder,
                        4.0,
                        Color32::from_white_alpha(8),
                        Stroke::new(1.0, Color32::from_gray(45)),
                    );
                    painter.text(
                        placeholder.center(),
                        Align2::CENTER_CENTER,
                        block.range_label(),
                        FontId::monospace(10.0),
                        DIM_TEXT,
                    );

                    let label_rect = geometry.span_rect(
                        GridCell::new(block.strip_row(), 1),
                        GridCell::new(block.strip_row(), 2),
                    );
                    painter.text(
                        label_rect.right_center() - vec2(8.0, 0.0),
                        Align2::RIGHT_CENTER,
                        block.label().to_uppercase(),
                        FontId::monospace(10.0),
                        DIM_TEXT,
                    );
                }

                let mut clicked = None;
                for (z, cell) in layout.cells() {
                    let Some(element) = ElementRecord::by_atomic_number(z) else {
                        continue;
                    };
                    let rect = geometry.cell_rect(cell);
                    let state = render_state(element, ui_state);
                    let sense = if state.is_interactive() {
                        Sense::click()
                    } else {
                        Sense::hover()
                    };
                    let response = ui.interact(rect, ui.id().with(("cell", z)), sense);
                    element_cell(&painter, rect, element, state, response.hovered());
                    if response.clicked() {
                        clicked = Some(z);
                    }
                }

                if let Some(z) = clicked {
                    ui_state.select_element(z);
                }
            });
        });
}

fn element_cell(
    painter: &egui::Painter,
    rect: Rect,
    element: &ElementRecord,
    state: RenderState,
    hovered: bool,
) {
    let color = element.category.display_color().to_color32();
    let (fill, stroke, text) = match state {
        RenderState::Selected => (
            color.gamma_multiply(0.45),
            Stroke::new(2.0, Color32::WHITE),
            Color32::WHITE,
        ),
        RenderState::Dimmed => (
            Color32::from_gray(14),
            Stroke::new(1.0, Color32::from_gray(30)),
            Color32::from_gray(60),
        ),
        RenderState::Normal if hovered => (
            color.gamma_multiply(0.3),
            Stroke::new(1.5, color),
            Color32::WHITE,
        ),
        RenderState::Normal => (
            color.gamma_multiply(0.12),
            Stroke::new(1.0, color.gamma_multiply(0.6)),
            color,
        ),
    };

    painter.rect(rect, 4.0, fill, stroke);
    painter.text(
        rect.left_top() + vec2(4.0, 3.0),
        Align2::LEFT_TOP,
        element.atomic_number.to_string(),
        FontId::monospace(rect.width() * 0.18),
        text.gamma_multiply(0.8),
    );
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        element.symbol,
        FontId::proportional(rect.width() * 0.4),
        text,
    );
    painter.text(
        rect.center_bottom() - vec2(0.0, 3.0),
        Align2::CENTER_BOTTOM,
        element.name,
        FontId::proportional(rect.width() * 0.15),
        text.gamma_multiply(0.7),
    );
}

// Empty space above the d-block: rows 1-3, columns 3-12.
fn center_box(painter: &egui::Painter, geometry: &GridGeometry, selected: Option<&ElementRecord>) {
    let area = geometry
        .span_rect(GridCell::new(1, 3), GridCell::new(3, 12))
        .shrink(8.0);

    let Some(element) = selected else {
        painter.rect_stroke(area, 12.0, Stroke::new(2.0, Color32::from_gray(35)));
        painter.text(
            area.center() - vec2(0.0, 12.0),
            Align2::CENTER_CENTER,
            "TITAN",
            FontId::proportional(42.0),
            Color32::from_gray(55),
        );
        painter.text(
            area.center() + vec2(0.0, 22.0),
            Align2::CENTER_CENTER,
            "SELECT AN ELEMENT TO ANALYZE",
            FontId::monospace(11.0),
            Color32::from_gray(70),
        );
        return;
    };

    let color = element.category.display_color().to_color32();
    painter.rect(area, 12.0, PANEL_BG, Stroke::new(1.0, color));

    let height = area.height();
    painter.text(
        area.left_top() + vec2(16.0, 12.0),
        Align2::LEFT_TOP,
        element.atomic_number.to_string(),
        FontId::monospace(height * 0.14),
        Color32::WHITE,
    );
    painter.text(
        area.center() - vec2(0.0, height * 0.12),
        Align2::CENTER_CENTER,
        element.symbol,
        FontId::proportional(height * 0.38),
        Color32::WHITE,
    );
    painter.text(
        area.center() + vec2(0.0, height * 0.15),
        Align2::CENTER_CENTER,
        element.name.to_uppercase(),
        FontId::proportional(height * 0.1),
        color,
    );
    painter.text(
        area.center() + vec2(0.0, height * 0.27),
        Align2::CENTER_CENTER,
        format!("{}", element.atomic_mass),
        FontId::monospace(height * 0.07),
        Color32::from_gray(160),
    );
    painter.text(
        area.center_bottom() - vec2(0.0, 12.0),
        Align2::CENTER_BOTTOM,
        format!("VALENCY: {}", element.valency),
        FontId::monospace(height * 0.055),
        color,
    );
}

fn detail_panel(
    ctx: &egui::Context,
    ui_state: &mut UiState,
    element: &'static ElementRecord,
    view: &PanelContext<'_>,
) {
    let mut close = false;
    egui::SidePanel::right("detail")
        .resizable(false)
        .exact_width(360.0)
        .frame(Frame::side_top_panel(&ctx.style()).fill(PANEL_BG).inner_margin(16.0))
        .show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(element.symbol).size(40.0).strong());
                        ui.label(RichText::new(element.name).size(20.0));
                    });
                    ui.with_layout(Layout::right_to_left(Align::TOP), |ui| {
                        close = ui.button("Close").clicked();
                    });
                });
                ui.label(
                    RichText::new(element.category.label().to_uppercase())
                        .small()
                        .color(element.category.display_color().to_color32()),
                );
                ui.add_space(8.0);

                bohr_view(ui, element, view.time_secs);
                ui.add_space(8.0);

                egui::Grid::new("element_properties")
                    .num_columns(2)
                    .spacing([24.0, 6.0])
                    .show(ui, |ui| {
                        property_row(ui, "Atomic Mass", element.atomic_mass.to_string());
                        property_row(ui, "Number", element.atomic_number.to_string());
                        property_row(ui, "Group", element.group_label());
                        property_row(ui, "Period", element.period.to_string());
                        property_row(ui, "Valency", element.valency.to_owned());
                        property_row(ui, "Phase", element.phase().label().to_owned());
                    });

                ui.separator();
                ui.label(RichText::new("ELECTRON SHELLS").strong());
                ui.label(
                    RichText::new(element.electron_configuration)
                        .monospace()
                        .color(NUCLEUS),
                );
                ui.horizontal_wrapped(|ui| {
                    for (name, count) in element.labelled_shells() {
                        ui.label(
                            RichText::new(format!("{name} {count}"))
                                .monospace()
                                .color(Color32::WHITE),
                        );
                    }
                });

                ui.separator();
                ui.label(RichText::new("COMMON COMPOUNDS").strong());
                compound_list(ui, view.compounds);
            });
        });

    if close {
        ui_state.clear_selection();
    }
}

fn property_row(ui: &mut egui::Ui, name: &str, value: String) {
    ui.label(RichText::new(name).small().color(DIM_TEXT));
    ui.label(RichText::new(value).color(Color32::WHITE));
    ui.end_row();
}

fn bohr_view(ui: &mut egui::Ui, element: &ElementRecord, time_secs: f32) {
    let side = ui.available_width().min(300.0);
    let (response, painter) = ui.allocate_painter(vec2(side, side), Sense::hover());
    let rect = response.rect;
    let model = BohrModel::for_element(element);
    let scale = (side * 0.5) / model.extent().max(1.0) * 0.95;
    let center = rect.center();

    for ring in model.rings(time_secs) {
        painter.circle_stroke(
            center,
            ring.radius * scale,
            Stroke::new(1.0, Color32::from_white_alpha(40)),
        );
        for electron in ring.electrons {
            painter.circle(
                center + vec2(electron.x, electron.y) * scale,
                (bohr::ELECTRON_RADIUS * scale).max(1.5),
                ELECTRON,
                Stroke::new(1.0, Color32::from_black_alpha(128)),
            );
        }
    }

    painter.circle_filled(center, BohrModel::nucleus_radius(time_secs) * scale, NUCLEUS);
    painter.text(
        center,
        Align2::CENTER_CENTER,
        element.symbol,
        FontId::proportional((14.0 * scale).max(9.0)),
        Color32::BLACK,
    );
}

fn compound_list(ui: &mut egui::Ui, fetcher: &CompoundFetcher) {
    if matches!(fetcher.state(), FetchState::Loading | FetchState::Idle) {
        ui.horizontal(|ui| {
            ui.add(egui::Spinner::new());
            ui.label(RichText::new("Analyzing chemical structure...").color(DIM_TEXT));
        });
        return;
    }

    let compounds = fetcher.compounds();
    if compounds.is_empty() {
        ui.label(RichText::new("No compound data available.").italics().color(DIM_TEXT));
        return;
    }

    ScrollArea::vertical()
        .id_source("compounds")
        .max_height(220.0)
        .show(ui, |ui| {
            for compound in compounds {
                Frame::none()
                    .fill(Color32::from_white_alpha(6))
                    .rounding(4.0)
                    .inner_margin(8.0)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new(&compound.formula)
                                    .monospace()
                                    .strong()
                                    .color(Color32::from_rgb(74, 222, 128)),
                            );
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                ui.label(RichText::new(&compound.ratio).small());
                            });
                        });
                        ui.label(compound.name.as_str());
                        ui.label(RichText::new(&compound.description).small().color(DIM_TEXT));
                    });
                ui.add_space(4.0);
            }
        });
}

fn chat_window(
    ctx: &egui::Context,
    ui_state: &mut UiState,
    chat: &ChatSession,
    actions: &mut PanelActions,
) {
    if !ui_state.is_chat_open() {
        return;
    }

    let mut open = true;
    egui::Window::new("Titan AI")
        .open(&mut open)
        .default_size([380.0, 480.0])
        .collapsible(false)
        .show(ctx, |ui| {
            let history_height = (ui.available_height() - 48.0).max(120.0);
            ScrollArea::vertical()
                .id_source("chat_history")
                .max_height(history_height)
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for message in chat.messages() {
                        let (align, fill) = match message.role {
                            Role::User => (Align::Max, ACCENT.gamma_multiply(0.35)),
                            Role::Assistant => (Align::Min, Color32::from_white_alpha(10)),
                        };
                        ui.with_layout(Layout::top_down(align), |ui| {
                            Frame::none()
                                .fill(fill)
                                .rounding(8.0)
                                .inner_margin(8.0)
                                .show(ui, |ui| {
                                    ui.set_max_width(280.0);
                                    ui.label(message.text.as_str());
                                });
                        });
                        ui.add_space(4.0);
                    }
                    if chat.is_loading() {
                        ui.horizontal(|ui| {
                            ui.add(egui::Spinner::new());
                            ui.label(RichText::new("Thinking...").color(DIM_TEXT));
                        });
                    }
                });

            ui.separator();
            ui.horizontal(|ui| {
                let idle = !chat.is_loading();
                let input = ui.add_enabled(
                    idle,
                    egui::TextEdit::singleline(ui_state.chat_input_mut())
                        .hint_text("Ask about an element...")
                        .desired_width(ui.available_width() - 60.0),
                );
                let submitted = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                let can_send = chat.can_send(ui_state.chat_input());
                let clicked = ui.add_enabled(can_send, egui::Button::new("Send")).clicked();

                if (submitted || clicked) && can_send {
                    actions.chat_submission = Some(ui_state.take_chat_input());
                }
            });
        });

    if !open {
        ui_state.close_chat();
    }
}
