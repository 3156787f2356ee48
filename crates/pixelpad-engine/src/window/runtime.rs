use anyhow::{Context, Result};
use ouroboros::self_referencing;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl, FrameCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::platform::winit::translate_window_event;
use crate::input::{InputFrame, InputState};

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "pixelpad".to_owned(),
            initial_size: LogicalSize::new(1000.0, 640.0),
        }
    }
}

/// Window requests an app makes during a frame; applied once the frame returns.
#[derive(Default)]
pub struct RuntimeCtx {
    title: Option<String>,
}

impl RuntimeCtx {
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }
}

/// Opens one window and drives an [`App`] until it exits or the window closes.
pub struct Runtime;

impl Runtime {
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: App + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create event loop")?;
        let mut driver = Driver {
            config,
            gpu_init,
            app,
            window: None,
            exiting: false,
        };
        event_loop
            .run_app(&mut driver)
            .context("event loop terminated with an error")
    }
}

/// Window plus the GPU surface borrowing it.
#[self_referencing]
struct CanvasWindow {
    input: InputState,
    frame_input: InputFrame,
    window: Window,
    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct Driver<A: App> {
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,
    window: Option<CanvasWindow>,
    exiting: bool,
}

impl<A: App> Driver<A> {
    fn open_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);
        let window = event_loop.create_window(attrs).context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();
        let entry = CanvasWindowTryBuilder {
            input: InputState::default(),
            frame_input: InputFrame::default(),
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("GPU initialization failed")?;

        entry.with_window(|w| w.request_redraw());
        self.window = Some(entry);
        Ok(())
    }

    fn shut_down(&mut self, event_loop: &ActiveEventLoop) {
        self.exiting = true;
        self.window = None;
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(entry) = self.window.as_mut() else {
            return;
        };

        let mut runtime = RuntimeCtx::default();
        let app = &mut self.app;
        let control = entry.with_mut(|f| {
            let control = app.on_frame(&mut FrameCtx {
                window: f.window,
                gpu: f.gpu,
                input: f.input,
                input_frame: f.frame_input,
                runtime: &mut runtime,
            });
            f.frame_input.clear();
            control
        });

        if let Some(title) = runtime.title {
            entry.with_window(|w| w.set_title(&title));
        }
        if control == AppControl::Exit {
            self.shut_down(event_loop);
        }
    }
}

impl<A: App> ApplicationHandler for Driver<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.exiting {
            return;
        }
        if let Err(err) = self.open_window(event_loop) {
            log::error!("{err:#}");
            self.shut_down(event_loop);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(entry) = self.window.as_mut() else {
            return;
        };

        entry.with_mut(|f| {
            if let Some(ev) = translate_window_event(f.window, f.input, &event) {
                f.input.record(f.frame_input, ev);
            }
        });

        match event {
            WindowEvent::CloseRequested => self.shut_down(event_loop),
            WindowEvent::Resized(size) => entry.with_gpu_mut(|gpu| gpu.resize(size)),
            WindowEvent::ScaleFactorChanged { .. } => {
                let size = entry.with_window(|w| w.inner_size());
                entry.with_gpu_mut(|gpu| gpu.resize(size));
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exiting {
            return;
        }
        // Redraw continuously; input is handed to the app once per frame.
        event_loop.set_control_flow(ControlFlow::Wait);
        if let Some(entry) = &self.window {
            entry.with_window(|w| w.request_redraw());
        }
    }
}
