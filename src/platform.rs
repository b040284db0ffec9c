use crate::app::{App, AppResult};
use crate::config::Config;
use log::{error, info, warn};
use pollster::block_on;
use std::sync::Arc;
use std::time::Instant;
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

/// 네이티브 플랫폼 시작 함수
pub fn start() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        error!("titan exited with an error: {err}");
        std::process::exit(1);
    }
}

fn run() -> AppResult<()> {
    let config = Config::load();
    if !config.api.has_credential() {
        warn!(
            "no API key configured; set {} or api.api_key in {}",
            crate::constants::API_KEY_ENV,
            Config::get_path().display()
        );
    }

    let event_loop = EventLoop::new().map_err(|err| err.to_string())?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Titan Periodic Table")
            .with_inner_size(LogicalSize::new(config.window.width, config.window.height))
            .build(&event_loop)
            .map_err(|err| err.to_string())?,
    );

    let mut app = block_on(App::initialize(window.clone(), &config))?;
    info!("window ready at {:?}", app.size());

    event_loop.run(move |event, target| {
        target.set_control_flow(ControlFlow::Wait);
        match event {
            Event::WindowEvent { event, window_id } if window_id == window.id() => {
                // egui sees every event first; resize and close still apply
                let _consumed = app.handle_event(&window, &event);
                match event {
                    WindowEvent::CloseRequested => target.exit(),
                    WindowEvent::Resized(new_size) => {
                        app.resize(new_size);
                        window.request_redraw();
                    }
                    WindowEvent::RedrawRequested => match app.render(&window) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            app.resize(app.size())
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            error!("GPU out of memory; shutting down");
                            target.exit();
                        }
                        Err(err) => warn!("frame skipped: {err:?}"),
                    },
                    _ => {}
                }
            }
            Event::AboutToWait => {
                // 지속적인 렌더링을 위해 redraw 요청
                if app.wants_continuous_redraw() {
                    window.request_redraw();
                } else if let Some(deadline) = app.next_redraw() {
                    if deadline <= Instant::now() {
                        window.request_redraw();
                    } else {
                        target.set_control_flow(ControlFlow::WaitUntil(deadline));
                    }
                }
            }
            _ => {}
        }
    })
    .map_err(|err| err.to_string())?;

    Ok(())
}
