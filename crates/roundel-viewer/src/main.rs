//! roundel viewer
//!
//! Small interactive scene for the circle rasterizer: a main circle (ring or
//! disc), a pulsing ring, and a pointer dot that reacts to hovering the main
//! circle. Escape closes the window.

use anyhow::Result;
use clap::Parser;

use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowId;

use roundel_engine::coords::Vec2;
use roundel_engine::core::{App, AppControl, FrameCtx};
use roundel_engine::device::GpuInit;
use roundel_engine::logging::{init_logging, LoggingConfig};
use roundel_engine::paint::Color;
use roundel_engine::render::shapes::CircleRenderer;
use roundel_engine::scene::{CircleCmd, DrawList, ZIndex};
use roundel_engine::window::{Runtime, RuntimeConfig};

/// Interactive viewer for the circle rasterizer.
#[derive(Parser, Debug)]
#[command(name = "roundel", version, about)]
struct Args {
    /// Interior color for outlined circles (#rrggbb or #rrggbbaa).
    #[arg(long, default_value = "#123456")]
    bg: Color,

    /// Stroke and fill color (#rrggbb or #rrggbbaa).
    #[arg(long, default_value = "#e0e0e0")]
    fg: Color,

    /// Surface clear color (#rrggbb or #rrggbbaa).
    #[arg(long, default_value = "#000000")]
    clear: Color,

    /// Radius of the main circle, in logical pixels.
    #[arg(long, default_value_t = 120.0)]
    radius: f32,

    /// Draw the main circle as a solid disc instead of a ring.
    #[arg(long)]
    fill: bool,

    /// Window title.
    #[arg(long, default_value = "roundel viewer")]
    title: String,

    /// Log filter (env_logger syntax), e.g. "roundel_engine=debug".
    #[arg(long)]
    log: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    anyhow::ensure!(
        args.radius > 0.0 && args.radius.is_finite(),
        "--radius must be a positive number (got {})",
        args.radius
    );

    init_logging(LoggingConfig {
        env_filter: args.log.clone(),
        ..LoggingConfig::default()
    });

    log::info!("roundel viewer v{} starting", env!("CARGO_PKG_VERSION"));

    let config = RuntimeConfig {
        title: args.title.clone(),
        ..RuntimeConfig::default()
    };

    Runtime::run(config, GpuInit::default(), ViewerApp::new(args))
}

struct ViewerApp {
    args: Args,
    list: DrawList,
    renderer: CircleRenderer,

    /// Last pointer position in physical pixels, if inside the window.
    pointer: Option<(f32, f32)>,

    /// Pulse phase in seconds, advanced by frame dt.
    pulse: f32,
}

impl ViewerApp {
    fn new(args: Args) -> Self {
        Self {
            args,
            list: DrawList::new(),
            renderer: CircleRenderer::new(),
            pointer: None,
            pulse: 0.0,
        }
    }

    fn build_scene(&mut self, w: f32, h: f32, pointer: Option<Vec2>) {
        self.list.clear();

        let center = Vec2::new(w / 3.0, h / 2.0);
        let main = if self.args.fill {
            CircleCmd::disc(center, self.args.radius, self.args.fg)
        } else {
            CircleCmd::ring(center, self.args.radius, self.args.bg, self.args.fg)
        };
        let hovered = pointer.is_some_and(|p| main.contains(p));
        self.list.push_circle(ZIndex(0), main);

        // Whole-pixel radius: the outline's anti-aliased band only exists at
        // integer radii.
        let pulse_radius = (self.args.radius * 0.4 + 8.0 * (2.0 * self.pulse).sin()).round();
        self.list.push_ring(
            ZIndex(0),
            Vec2::new(2.0 * w / 3.0, h / 2.0),
            pulse_radius,
            self.args.clear,
            self.args.fg,
        );

        // Pointer dot on top, swapping to the interior color while hovering
        // the main circle. Output replaces the destination, so the dot's
        // transparent box corners cut into whatever sits underneath.
        if let Some(p) = pointer {
            let dot = if hovered { self.args.bg } else { self.args.fg };
            self.list.push_disc(ZIndex(1), p, 6.0, dot);
        }
    }
}

impl App for ViewerApp {
    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.pointer = Some((position.x as f32, position.y as f32));
            }
            WindowEvent::CursorLeft { .. } => {
                self.pointer = None;
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                {
                    return AppControl::Exit;
                }
            }
            _ => {}
        }
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let (w, h) = ctx.window.logical_size();
        let scale = ctx.window.scale_factor();

        self.pulse += ctx.time.dt;

        // Pointer events arrive in physical pixels; the scene is logical.
        let pointer = self.pointer.map(|(px, py)| Vec2::new(px / scale, py / scale));
        self.build_scene(w, h, pointer);

        if ctx.time.frame_index % 300 == 0 {
            log::debug!(
                "frame {}: {} draws, dt {:.4}s",
                ctx.time.frame_index,
                self.list.items().len(),
                ctx.time.dt
            );
        }

        let clear = self.args.clear;
        ctx.render(clear, |rctx, target| {
            self.renderer.render(rctx, target, &mut self.list);
        })
    }
}
