// ABOUTME: Main application entry point.
// ABOUTME: Opens a window and drives a quadrant split from real mouse input.

mod pointer;

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowAttributes, WindowId};

use pointer::PointerTracker;
use quad_core::{Config, OverdragPolicy, Point2D, Size2D};
use quad_layout::{GestureEffect, Panes, PointerEvent, QuadSplit};

struct App {
    window: Option<Arc<Window>>,
    split: QuadSplit<&'static str>,
    pointer: PointerTracker,
    config: Config,
    title: String,
}

impl App {
    fn new() -> Self {
        let config = Config::load_or_default();
        tracing::info!(
            "Loaded config: split ratio ({:.2}, {:.2}), overdrag {:?}",
            config.layout.initial_split_ratio.x,
            config.layout.initial_split_ratio.y,
            config.overdrag
        );

        let panes = Panes::new("north-west", "north-east", "south-west", "south-east");
        Self {
            window: None,
            split: QuadSplit::from_config(panes, Default::default(), &config),
            pointer: PointerTracker::new(Instant::now()),
            config,
            title: String::new(),
        }
    }

    fn scale_factor(&self) -> f64 {
        self.window.as_ref().map_or(1.0, |w| w.scale_factor())
    }

    fn dispatch(&mut self, event: Option<PointerEvent>) {
        let Some(event) = event else {
            return;
        };
        match self.split.handle_event(&event) {
            GestureEffect::DragCompleted(translation) => {
                let ratio = self.split.effective_split_ratio();
                tracing::info!(
                    "Drag committed ({:.1}, {:.1}), effective split ({:.3}, {:.3})",
                    translation.dx,
                    translation.dy,
                    ratio.x,
                    ratio.y
                );
            }
            GestureEffect::DragCancelled(_) => tracing::info!("Drag cancelled"),
            GestureEffect::PressAbandoned => tracing::debug!("Press abandoned"),
            _ => {}
        }
        self.refresh();
    }

    /// Recompute the layout and show it in the window title
    fn refresh(&mut self) {
        let layout = self.split.layout();
        let mut parts: Vec<String> = layout
            .iter()
            .map(|(_, name, rect)| format!("{} {:.0}x{:.0}", name, rect.width, rect.height))
            .collect();
        if layout.is_dragging() {
            parts.push("dragging".to_string());
        }
        let title = format!("quad-split | {}", parts.join(" | "));

        if title != self.title {
            tracing::debug!("{}", title);
            if let Some(window) = &self.window {
                window.set_title(&title);
            }
            self.title = title;
        }
    }

    fn save_config(&mut self) {
        self.config.layout.initial_split_ratio = self.split.effective_split_ratio();
        self.config.overdrag = self.split.overdrag();
        match self.config.save_to_default() {
            Ok(path) => tracing::info!("Config saved to {}", path.display()),
            Err(e) => tracing::error!("Failed to save config: {}", e),
        }
    }

    fn handle_key(&mut self, key: &Key) {
        match key {
            Key::Character(c) if c == "r" => {
                self.split.reset();
                tracing::info!("Split reset");
            }
            Key::Character(c) if c == "o" => {
                let policy = match self.split.overdrag() {
                    OverdragPolicy::Unclamped => OverdragPolicy::Clamped,
                    OverdragPolicy::Clamped => OverdragPolicy::Unclamped,
                };
                self.split.set_overdrag(policy);
                tracing::info!("Overdrag policy: {:?}", policy);
            }
            Key::Character(c) if c == "s" => self.save_config(),
            _ => return,
        }
        self.refresh();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = WindowAttributes::default()
            .with_title("quad-split")
            .with_inner_size(LogicalSize::new(
                self.config.window_width,
                self.config.window_height,
            ));

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .expect("Failed to create window"),
        );

        let scale_factor = window.scale_factor();
        let size = window.inner_size().to_logical::<f32>(scale_factor);
        tracing::info!(
            "Window created: {}x{} logical pixels, scale factor: {}",
            size.width,
            size.height,
            scale_factor
        );

        self.split
            .set_container_size(Size2D::new(size.width, size.height));
        self.window = Some(window);
        self.refresh();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Close requested, exiting");
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                let size = new_size.to_logical::<f32>(self.scale_factor());
                self.split
                    .set_container_size(Size2D::new(size.width, size.height));
                self.refresh();
            }
            WindowEvent::CursorMoved { position, .. } => {
                let position = position.to_logical::<f32>(self.scale_factor());
                let event = self
                    .pointer
                    .cursor_moved(Point2D::new(position.x, position.y), Instant::now());
                self.dispatch(event);
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                let now = Instant::now();
                let event = match state {
                    ElementState::Pressed => {
                        let handle = self.split.layout().handle.frame();
                        self.pointer.button_pressed(handle, now)
                    }
                    ElementState::Released => self.pointer.button_released(now),
                };
                self.dispatch(event);
            }
            WindowEvent::Focused(false) => {
                let event = self.pointer.focus_lost(Instant::now());
                self.dispatch(event);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                if event.logical_key == Key::Named(NamedKey::Escape) {
                    let cancel = self.pointer.cancel(Instant::now());
                    self.dispatch(cancel);
                } else if !self.pointer.is_pressed() {
                    self.handle_key(&event.logical_key);
                }
            }
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    tracing::info!("Starting quad-split");

    let event_loop = EventLoop::new()?;
    let mut app = App::new();

    event_loop.run_app(&mut app)?;

    Ok(())
}
