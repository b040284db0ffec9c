use egui::ClippedPrimitive;
use egui_wgpu::{Renderer, ScreenDescriptor};
use egui_winit::{State as EguiWinitState, pixels_per_point};
use std::time::{Duration, Instant};
use wgpu::{CommandEncoder, Device, Queue, TextureFormat, TextureView};
use winit::{event::WindowEvent, window::Window};

/// egui wired to one winit window and one wgpu surface.
pub struct UiLayer {
    ctx: egui::Context,
    input: EguiWinitState,
    painter: Renderer,
    screen: ScreenDescriptor,
}

/// Tessellated output of one egui pass, ready to paint.
pub struct UiFrame {
    pub primitives: Vec<ClippedPrimitive>,
    pub textures: egui::TexturesDelta,
    /// `Duration::MAX` when egui has nothing scheduled.
    pub repaint_delay: Duration,
}

impl UiFrame {
    /// When egui wants the next frame, if at all.
    pub fn redraw_deadline(&self, now: Instant) -> Option<Instant> {
        now.checked_add(self.repaint_delay)
    }
}

impl UiLayer {
    pub fn new(window: &Window, device: &Device, surface_format: TextureFormat) -> Self {
        let ctx = egui::Context::default();
        ctx.set_visuals(egui::Visuals::dark());
        let input = EguiWinitState::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
        );

        Self {
            screen: ScreenDescriptor {
                size_in_pixels: physical_size(window),
                pixels_per_point: pixels_per_point(&ctx, window),
            },
            painter: Renderer::new(device, surface_format, None, 1),
            input,
            ctx,
        }
    }

    pub fn handle_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        let response = self.input.on_window_event(window, event);
        if response.repaint {
            window.request_redraw();
        }
        response.consumed
    }

    pub fn prepare(&mut self, window: &Window, build_ui: impl FnMut(&egui::Context)) -> UiFrame {
        self.screen.size_in_pixels = physical_size(window);

        let raw_input = self.input.take_egui_input(window);
        let output = self.ctx.run(raw_input, build_ui);
        self.input
            .handle_platform_output(window, output.platform_output);

        let repaint_delay = output
            .viewport_output
            .get(&egui::ViewportId::ROOT)
            .map_or(Duration::MAX, |viewport| viewport.repaint_delay);

        self.screen.pixels_per_point = output.pixels_per_point;
        UiFrame {
            primitives: self.ctx.tessellate(output.shapes, output.pixels_per_point),
            textures: output.textures_delta,
            repaint_delay,
        }
    }

    /// Draws `frame` over whatever `view` already holds.
    pub fn paint(
        &mut self,
        device: &Device,
        queue: &Queue,
        encoder: &mut CommandEncoder,
        view: &TextureView,
        frame: UiFrame,
    ) {
        for (id, delta) in &frame.textures.set {
            self.painter.update_texture(device, queue, *id, delta);
        }

        let extra = self
            .painter
            .update_buffers(device, queue, encoder, &frame.primitives, &self.screen);
        if !extra.is_empty() {
            queue.submit(extra);
        }

        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("egui-ui-pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        self.painter
            .render(&mut pass, &frame.primitives, &self.screen);
        drop(pass);

        for id in &frame.textures.free {
            self.painter.free_texture(id);
        }
    }

    /// Handle for worker threads that need to wake the event loop.
    pub fn ctx(&self) -> &egui::Context {
        &self.ctx
    }
}

fn physical_size(window: &Window) -> [u32; 2] {
    let size = window.inner_size();
    [size.width.max(1), size.height.max(1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(repaint_delay: Duration) -> UiFrame {
        UiFrame {
            primitives: Vec::new(),
            textures: egui::TexturesDelta::default(),
            repaint_delay,
        }
    }

    #[test]
    fn idle_frame_schedules_nothing() {
        assert_eq!(frame(Duration::MAX).redraw_deadline(Instant::now()), None);
    }

    #[test]
    fn delayed_repaint_becomes_a_deadline() {
        let now = Instant::now();
        let blink = Duration::from_millis(500);
        assert_eq!(frame(blink).redraw_deadline(now), Some(now + blink));
        assert_eq!(frame(Duration::ZERO).redraw_deadline(now), Some(now));
    }
}
