// src/ui/manager.rs
//! ImGui integration for the plot viewer
//!
//! Glues one Dear ImGui context to the viewer window (winit) and the
//! render engine's surface (wgpu).

use crate::error::{OrreryError, Result};
use imgui::{Context, FontConfig, FontSource, MouseCursor};
use imgui_wgpu::{Renderer, RendererConfig};
use imgui_winit_support::{HiDpiMode, WinitPlatform};
use std::time::Instant;
use wgpu::{CommandEncoder, Device, Queue, TextureFormat, TextureView};
use winit::{
    event::{Event, WindowEvent},
    window::{Window, WindowId},
};

/// Owns the ImGui context, its winit platform and its wgpu renderer
pub struct UiManager {
    imgui: Context,
    platform: WinitPlatform,
    renderer: Renderer,
    frame_started: Instant,
    cursor: Option<MouseCursor>,
}

impl UiManager {
    /// Creates the UI layer for `window`
    ///
    /// DPI is locked to 1.0, so `font_size` is in physical pixels.
    pub fn new(
        device: &Device,
        queue: &Queue,
        surface_format: TextureFormat,
        window: &Window,
        font_size: f32,
    ) -> Self {
        let mut imgui = Context::create();
        imgui.set_ini_filename(None);

        let mut platform = WinitPlatform::new(&mut imgui);
        platform.attach_window(imgui.io_mut(), window, HiDpiMode::Locked(1.0));
        load_font(&mut imgui, font_size);

        let renderer = Renderer::new(
            &mut imgui,
            device,
            queue,
            RendererConfig {
                texture_format: surface_format,
                ..Default::default()
            },
        );

        Self {
            imgui,
            platform,
            renderer,
            frame_started: Instant::now(),
            cursor: None,
        }
    }

    /// Forwards a window event to ImGui
    ///
    /// Panels are fixed, so nothing in the viewer needs to know whether
    /// ImGui consumed the event.
    pub fn handle_event(&mut self, window: &Window, window_id: WindowId, event: &WindowEvent) {
        let event: Event<()> = Event::WindowEvent {
            window_id,
            event: event.clone(),
        };
        self.platform
            .handle_event(self.imgui.io_mut(), window, &event);
    }

    /// Builds a frame with `build` and records it into `encoder`
    ///
    /// Draws on top of whatever `target` already holds.
    pub fn draw<F>(
        &mut self,
        device: &Device,
        queue: &Queue,
        encoder: &mut CommandEncoder,
        window: &Window,
        target: &TextureView,
        build: F,
    ) -> Result<()>
    where
        F: FnOnce(&imgui::Ui),
    {
        self.build_frame(window, build)?;
        self.submit(device, queue, encoder, target)
    }

    fn build_frame<F>(&mut self, window: &Window, build: F) -> Result<()>
    where
        F: FnOnce(&imgui::Ui),
    {
        let now = Instant::now();
        self.imgui
            .io_mut()
            .update_delta_time(now - self.frame_started);
        self.frame_started = now;

        self.platform
            .prepare_frame(self.imgui.io_mut(), window)
            .map_err(|e| OrreryError::Viewer(format!("failed to prepare UI frame: {e}")))?;

        let ui = self.imgui.frame();
        build(ui);

        let cursor = ui.mouse_cursor();
        if self.cursor != cursor {
            self.cursor = cursor;
            self.platform.prepare_render(ui, window);
        }
        Ok(())
    }

    fn submit(
        &mut self,
        device: &Device,
        queue: &Queue,
        encoder: &mut CommandEncoder,
        target: &TextureView,
    ) -> Result<()> {
        let draw_data = self.imgui.render();
        // Minimised window
        if draw_data.display_size[0] <= 0.0 || draw_data.display_size[1] <= 0.0 {
            return Ok(());
        }

        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("statistics_ui_pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
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

        self.renderer
            .render(draw_data, queue, device, &mut pass)
            .map_err(|e| OrreryError::Viewer(format!("failed to render UI: {e:?}")))
    }
}

fn load_font(imgui: &mut Context, size_pixels: f32) {
    imgui.fonts().add_font(&[FontSource::DefaultFontData {
        config: Some(FontConfig {
            size_pixels,
            oversample_h: 1,
            pixel_snap_h: true,
            ..Default::default()
        }),
    }]);
}
