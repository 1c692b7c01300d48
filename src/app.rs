//! Interactive plot window
//!
//! [`PlotViewer`] is the windowed [`PlotSurface`]: it opens a winit window,
//! draws the statistics panels with Dear ImGui on a wgpu surface, and
//! returns once the user closes the window or presses Escape.

use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes},
};

use crate::config::ViewerConfig;
use crate::error::{OrreryError, Result};
use crate::gfx::RenderEngine;
use crate::ui::{statistics_panels, UiManager};
use crate::visualization::{PlotSurface, StatisticsPlots};
use log::{debug, error, info};

/// Windowed display surface for statistics plots
pub struct PlotViewer {
    config: ViewerConfig,
}

impl PlotViewer {
    pub fn new(config: ViewerConfig) -> Self {
        Self { config }
    }
}

impl Default for PlotViewer {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}

impl PlotSurface for PlotViewer {
    /// Opens the window and blocks until it is closed
    fn show(&mut self, plots: &StatisticsPlots) -> Result<()> {
        let event_loop = EventLoop::new()
            .map_err(|e| OrreryError::Viewer(format!("failed to create event loop: {e}")))?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut app_state = AppState::new(self.config.clone(), plots.clone());
        event_loop
            .run_app(&mut app_state)
            .map_err(|e| OrreryError::Viewer(format!("event loop failed: {e}")))?;

        info!("Plot window closed");
        match app_state.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

struct AppState {
    config: ViewerConfig,
    plots: StatisticsPlots,
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    ui_manager: Option<UiManager>,
    error: Option<OrreryError>,
}

impl AppState {
    fn new(config: ViewerConfig, plots: StatisticsPlots) -> Self {
        Self {
            config,
            plots,
            window: None,
            render_engine: None,
            ui_manager: None,
            error: None,
        }
    }

    /// Records a fatal error and stops the event loop
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: OrreryError) {
        error!("{}", err);
        self.error = Some(err);
        event_loop.exit();
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attributes = WindowAttributes::default()
            .with_title(self.config.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.width,
                self.config.height,
            ));
        let window = event_loop
            .create_window(attributes)
            .map_err(|e| OrreryError::Viewer(format!("failed to create window: {e}")))?;
        let window_handle = Arc::new(window);

        let (width, height) = window_handle.inner_size().into();
        let window_clone = window_handle.clone();
        let renderer = pollster::block_on(RenderEngine::new(window_clone, width, height))?;

        let ui_manager = UiManager::new(
            renderer.device(),
            renderer.queue(),
            renderer.surface_format(),
            &window_handle,
            self.config.font_size,
        );

        debug!("Created plot window {}x{}", width, height);
        window_handle.request_redraw();
        self.window = Some(window_handle);
        self.ui_manager = Some(ui_manager);
        self.render_engine = Some(renderer);
        Ok(())
    }

    fn redraw(&mut self) -> Result<()> {
        let (Some(render_engine), Some(ui_manager), Some(window)) = (
            self.render_engine.as_mut(),
            self.ui_manager.as_mut(),
            self.window.as_ref(),
        ) else {
            return Ok(());
        };

        let plots = &self.plots;
        let show_time_vs_time = self.config.show_time_vs_time;
        render_engine.render_frame(|device, queue, encoder, color_attachment| {
            ui_manager.draw(device, queue, encoder, window, color_attachment, |ui| {
                statistics_panels(ui, plots, show_time_vs_time);
            })
        })
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(err) = self.create_window(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.clone() else {
            return;
        };

        if let Some(ui_manager) = self.ui_manager.as_mut() {
            ui_manager.handle_event(&window, window_id, &event);
        }

        match event {
            WindowEvent::KeyboardInput {
                event:
                    winit::event::KeyEvent {
                        physical_key: winit::keyboard::PhysicalKey::Code(key_code),
                        ..
                    },
                ..
            } => {
                if matches!(key_code, winit::keyboard::KeyCode::Escape) {
                    event_loop.exit();
                } else {
                    window.request_redraw();
                }
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                if let Some(render_engine) = self.render_engine.as_mut() {
                    render_engine.resize(width, height);
                }
                window.request_redraw();
            }
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = self.redraw() {
                    self.fail(event_loop, err);
                }
            }
            _ => window.request_redraw(),
        }
    }
}
