use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::coords::Viewport;
use crate::render::{RenderCtx, RenderTarget, Transforms};
use crate::scene::{DrawCmd, DrawList};

/// Renderer for `DrawCmd::Circle`.
///
/// Rasterization contract (`shaders/circle.wgsl`):
/// - filled circles cover every pixel whose rounded center distance is within
///   the radius
/// - outlined circles draw a one-pixel anti-aliased ring on the rim around a
///   `bg` interior
/// - every covered fragment writes a color; output replaces the destination
///   (no blending)
///
/// Each circle is drawn as a full-viewport clip-space quad scoped to the
/// circle's bounding box via the draw call's pixel viewport, with its own
/// parameters uniform bound at group 0.
#[derive(Default)]
pub struct CircleRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    params_layout: Option<wgpu::BindGroupLayout>,
    transforms_layout: Option<wgpu::BindGroupLayout>,

    transforms_ubo: Option<wgpu::Buffer>,
    transforms_group: Option<wgpu::BindGroup>,

    quad_vbo: Option<wgpu::Buffer>,

    /// One uniform slot per circle drawn in a frame, reused across frames.
    params_slots: Vec<ParamsSlot>,
}

struct ParamsSlot {
    ubo: wgpu::Buffer,
    group: wgpu::BindGroup,
}

impl CircleRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
    ) {
        self.ensure_pipeline(ctx);
        self.ensure_static_buffers(ctx);
        self.ensure_transforms(ctx);

        let fb = framebuffer_size(ctx.viewport, ctx.scale_factor);

        let mut draws: Vec<(CircleParams, PixelBox)> = Vec::new();
        for item in draw_list.iter_in_paint_order() {
            let DrawCmd::Circle(cmd) = &item.cmd;

            // NaN or infinite commands would poison the viewport math.
            if !(cmd.radius > 0.0) || !cmd.bounds().is_finite() {
                continue;
            }

            let params = CircleParams::from_cmd(cmd, ctx.scale_factor);
            let Some(pixel_box) = params.pixel_box(fb) else { continue };

            draws.push((params, pixel_box));
        }

        if draws.is_empty() {
            return;
        }

        self.ensure_params_capacity(ctx, draws.len());

        if let Some(ubo) = self.transforms_ubo.as_ref() {
            ctx.queue
                .write_buffer(ubo, 0, bytemuck::bytes_of(&ctx.transforms));
        }
        // Each circle gets its own uniform buffer: queued writes all land
        // before the pass executes, so sharing one buffer would leave every
        // draw reading the last circle's parameters.
        for (slot, (params, _)) in self.params_slots.iter().zip(&draws) {
            ctx.queue.write_buffer(&slot.ubo, 0, bytemuck::bytes_of(params));
        }

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(transforms_group) = self.transforms_group.as_ref() else { return };
        let Some(quad_vbo) = self.quad_vbo.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("roundel circle pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(1, transforms_group, &[]);
        rpass.set_vertex_buffer(0, quad_vbo.slice(..));

        for (slot, (_, b)) in self.params_slots.iter().zip(&draws) {
            rpass.set_viewport(b.x, b.y, b.w, b.h, 0.0, 1.0);
            rpass.set_bind_group(0, &slot.group, &[]);
            rpass.draw(0..QUAD_VERTICES.len() as u32, 0..1);
        }
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("roundel circle shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/circle.wgsl").into()),
        });

        let params_layout =
            ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("roundel circle params bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: Some(ubo_size::<CircleParams>()),
                    },
                    count: None,
                }],
            });

        let transforms_layout =
            ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("roundel circle transforms bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: Some(ubo_size::<Transforms>()),
                    },
                    count: None,
                }],
            });

        // Layout order is positional: params at group 0, transforms at group 1.
        let pipeline_layout =
            ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("roundel circle pipeline layout"),
                bind_group_layouts: &[&params_layout, &transforms_layout],
                immediate_size: 0,
            });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("roundel circle pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[QuadVertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.params_layout = Some(params_layout);
        self.transforms_layout = Some(transforms_layout);

        // Bindings hang off the layouts; recreate them lazily.
        self.transforms_ubo = None;
        self.transforms_group = None;
        self.params_slots.clear();
    }

    fn ensure_static_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.quad_vbo.is_some() {
            return;
        }

        self.quad_vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("roundel circle quad vbo"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        }));
    }

    fn ensure_transforms(&mut self, ctx: &RenderCtx<'_>) {
        if self.transforms_ubo.is_some() && self.transforms_group.is_some() {
            return;
        }
        let Some(layout) = self.transforms_layout.as_ref() else { return };

        let ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("roundel circle transforms ubo"),
            size: std::mem::size_of::<Transforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("roundel circle transforms group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ubo.as_entire_binding(),
            }],
        });

        self.transforms_ubo = Some(ubo);
        self.transforms_group = Some(group);
    }

    fn ensure_params_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.params_slots.len() {
            return;
        }
        let Some(layout) = self.params_layout.as_ref() else { return };

        let new_cap = required.next_power_of_two().max(16);
        for _ in self.params_slots.len()..new_cap {
            let ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("roundel circle params ubo"),
                size: std::mem::size_of::<CircleParams>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            let group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("roundel circle params group"),
                layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: ubo.as_entire_binding(),
                }],
            });
            self.params_slots.push(ParamsSlot { ubo, group });
        }
    }
}

fn ubo_size<T>() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(std::mem::size_of::<T>() as u64)
        .expect("uniform structs have non-zero size by construction")
}

/// Framebuffer size in physical pixels, floored so viewport rects never
/// overshoot the surface.
fn framebuffer_size(viewport: Viewport, scale: f32) -> (f32, f32) {
    (
        (viewport.width * scale).floor().max(1.0),
        (viewport.height * scale).floor().max(1.0),
    )
}

/// Physical-pixel viewport rectangle for one draw call.
#[derive(Debug, Copy, Clone, PartialEq)]
struct PixelBox {
    x: f32,
    y: f32,
    w: f32,
    h: f32,
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Fragment-stage uniform describing one circle.
///
/// Uniform layout (48 bytes):
///
///  offset  0  bg      vec4<f32>
///  offset 16  fg      vec4<f32>
///  offset 32  fill    u32
///  offset 36  radius  f32
///  offset 40  center  vec2<f32>
///
/// `center` and `radius` are in framebuffer pixels. `radius` must be
/// non-negative; the renderer drops non-positive commands before upload.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct CircleParams {
    pub bg: [f32; 4],
    pub fg: [f32; 4],
    pub fill: u32,
    pub radius: f32,
    pub center: [f32; 2],
}

impl CircleParams {
    /// Converts a logical-pixel command to framebuffer-pixel parameters.
    pub fn from_cmd(cmd: &crate::scene::CircleCmd, scale: f32) -> Self {
        Self {
            bg: cmd.bg.to_array(),
            fg: cmd.fg.to_array(),
            fill: u32::from(cmd.fill),
            radius: cmd.radius * scale,
            center: [cmd.center.x * scale, cmd.center.y * scale],
        }
    }

    /// CPU mirror of the fragment stage in `shaders/circle.wgsl`.
    ///
    /// `frag` is the fragment's framebuffer position. Matches the shader
    /// branch for branch; fill coverage uses round-half-to-even because WGSL
    /// `round()` does.
    pub fn shade(&self, frag: [f32; 2]) -> [f32; 4] {
        let x = frag[0] - self.center[0];
        let y = self.center[1] - frag[1];
        let s = (x * x + y * y).sqrt();

        if self.fill != 0 {
            if s.round_ties_even() <= self.radius {
                return self.fg;
            }
            return [0.0; 4];
        }

        if s.ceil() == self.radius {
            return scale_rgba(self.fg, 1.0 - (self.radius - s));
        }
        if s.floor() == self.radius {
            return scale_rgba(self.fg, 1.0 - (s - self.radius));
        }
        if s < self.radius {
            return self.bg;
        }
        [0.0; 4]
    }

    /// Viewport rect for the draw call: the circle's bounding square snapped
    /// outward to whole pixels and clamped to the framebuffer. `None` when
    /// the circle lies fully off screen.
    fn pixel_box(&self, fb: (f32, f32)) -> Option<PixelBox> {
        let (fw, fh) = fb;
        let [cx, cy] = self.center;
        let r = self.radius;

        let x0 = (cx - r).floor().max(0.0);
        let y0 = (cy - r).floor().max(0.0);
        let x1 = (cx + r).ceil().min(fw);
        let y1 = (cy + r).ceil().min(fh);

        let w = x1 - x0;
        let h = y1 - y0;
        if w <= 0.0 || h <= 0.0 {
            return None;
        }
        Some(PixelBox { x: x0, y: y0, w, h })
    }
}

#[inline]
fn scale_rgba(c: [f32; 4], k: f32) -> [f32; 4] {
    [c[0] * k, c[1] * k, c[2] * k, c[3] * k]
}

/// Vertex layout (16 bytes):
///
///  offset  0  coord  [f32; 4]  loc 0
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct QuadVertex {
    coord: [f32; 4],
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x4];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Full-viewport quad in clip space (two CCW triangles).
const QUAD_VERTICES: [QuadVertex; 6] = [
    QuadVertex { coord: [-1.0, 1.0, 0.0, 1.0] },
    QuadVertex { coord: [-1.0, -1.0, 0.0, 1.0] },
    QuadVertex { coord: [1.0, 1.0, 0.0, 1.0] },
    QuadVertex { coord: [1.0, 1.0, 0.0, 1.0] },
    QuadVertex { coord: [-1.0, -1.0, 0.0, 1.0] },
    QuadVertex { coord: [1.0, -1.0, 0.0, 1.0] },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::scene::CircleCmd;

    const FG: [f32; 4] = [0.2, 0.4, 0.6, 1.0];
    const BG: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    const CLEAR: [f32; 4] = [0.0; 4];

    fn filled(center: [f32; 2], radius: f32) -> CircleParams {
        CircleParams { bg: CLEAR, fg: FG, fill: 1, radius, center }
    }

    fn outlined(center: [f32; 2], radius: f32) -> CircleParams {
        CircleParams { bg: BG, fg: FG, fill: 0, radius, center }
    }

    // ── uniform layout ────────────────────────────────────────────────────

    #[test]
    fn params_uniform_is_48_bytes() {
        assert_eq!(std::mem::size_of::<CircleParams>(), 48);
    }

    #[test]
    fn params_field_offsets_match_wgsl_layout() {
        assert_eq!(std::mem::offset_of!(CircleParams, bg), 0);
        assert_eq!(std::mem::offset_of!(CircleParams, fg), 16);
        assert_eq!(std::mem::offset_of!(CircleParams, fill), 32);
        assert_eq!(std::mem::offset_of!(CircleParams, radius), 36);
        assert_eq!(std::mem::offset_of!(CircleParams, center), 40);
    }

    #[test]
    fn quad_vertex_is_16_bytes() {
        assert_eq!(std::mem::size_of::<QuadVertex>(), 16);
    }

    // ── filled coverage ───────────────────────────────────────────────────

    #[test]
    fn filled_covers_center_and_rim() {
        let p = filled([50.0, 50.0], 10.0);
        assert_eq!(p.shade([50.0, 50.0]), FG);
        assert_eq!(p.shade([60.0, 50.0]), FG);
    }

    #[test]
    fn filled_transparent_past_rim() {
        let p = filled([50.0, 50.0], 10.0);
        assert_eq!(p.shade([61.0, 50.0]), CLEAR);
    }

    #[test]
    fn filled_rounds_distance_to_nearest_pixel() {
        let p = filled([0.0, 0.0], 10.0);
        // d = 10.4 rounds down to 10 and is covered; d = 10.6 rounds to 11.
        assert_eq!(p.shade([10.4, 0.0]), FG);
        assert_eq!(p.shade([10.6, 0.0]), CLEAR);
    }

    #[test]
    fn filled_rounds_half_to_even() {
        // WGSL round() rounds ties to even: 10.5 -> 10 stays covered at
        // radius 10, while 11.5 -> 12 falls outside radius 11.
        assert_eq!(filled([0.0, 0.0], 10.0).shade([10.5, 0.0]), FG);
        assert_eq!(filled([0.0, 0.0], 11.0).shade([11.5, 0.0]), CLEAR);
    }

    // ── symmetry ──────────────────────────────────────────────────────────

    #[test]
    fn coverage_is_symmetric_across_axes() {
        let p = filled([50.0, 50.0], 10.0);
        for d in [3.0, 9.6, 10.0, 10.6] {
            let east = p.shade([50.0 + d, 50.0]);
            let west = p.shade([50.0 - d, 50.0]);
            let south = p.shade([50.0, 50.0 + d]);
            let north = p.shade([50.0, 50.0 - d]);
            assert_eq!(east, west);
            assert_eq!(east, south);
            assert_eq!(east, north);
        }
    }

    // ── outlined ──────────────────────────────────────────────────────────

    #[test]
    fn outline_interior_is_bg() {
        let p = outlined([0.0, 0.0], 5.0);
        assert_eq!(p.shade([0.0, 0.0]), BG);
        assert_eq!(p.shade([3.0, 0.0]), BG);
    }

    #[test]
    fn outline_far_exterior_is_transparent() {
        let p = outlined([0.0, 0.0], 5.0);
        assert_eq!(p.shade([100.0, 100.0]), CLEAR);
        assert_eq!(p.shade([0.0, 6.5]), CLEAR);
    }

    #[test]
    fn outline_rim_is_full_fg_at_exact_radius() {
        let p = outlined([0.0, 0.0], 5.0);
        assert_eq!(p.shade([5.0, 0.0]), FG);
        assert_eq!(p.shade([3.0, 4.0]), FG); // 3-4-5 triangle, exact in f32
    }

    #[test]
    fn outline_inner_band_fades_toward_interior() {
        let p = outlined([0.0, 0.0], 5.0);
        // d = 4.25: ceil == 5, coverage 1 - (5 - 4.25) = 0.25.
        assert_eq!(p.shade([4.25, 0.0]), scale_rgba(FG, 0.25));
    }

    #[test]
    fn outline_outer_band_fades_outward() {
        let p = outlined([0.0, 0.0], 5.0);
        // d = 5.5: floor == 5, coverage 1 - (5.5 - 5) = 0.5. The fragment
        // sits above the center, exercising the vertical distance flip.
        assert_eq!(p.shade([0.0, -5.5]), scale_rgba(FG, 0.5));
    }

    #[test]
    fn outline_edge_band_wins_over_interior_fill() {
        // d = 4.5 is inside the circle but within the inner edge band; the
        // band takes precedence over the bg interior.
        let p = outlined([0.0, 0.0], 5.0);
        assert_eq!(p.shade([4.5, 0.0]), scale_rgba(FG, 0.5));
    }

    #[test]
    fn outline_fractional_radius_has_no_edge_band() {
        // ceil/floor of a distance never equal a fractional radius, so the
        // ring vanishes: the interior stays bg and the rim itself falls
        // through to transparency.
        let p = outlined([0.0, 0.0], 5.5);
        assert_eq!(p.shade([5.0, 0.0]), BG);
        assert_eq!(p.shade([5.5, 0.0]), CLEAR);
        assert_eq!(p.shade([6.0, 0.0]), CLEAR);
    }

    #[test]
    fn outline_scenario_black_ring_on_white() {
        let p = CircleParams {
            bg: [1.0, 1.0, 1.0, 1.0],
            fg: [0.0, 0.0, 0.0, 1.0],
            fill: 0,
            radius: 5.0,
            center: [0.0, 0.0],
        };
        assert_eq!(p.shade([0.0, 0.0]), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(p.shade([100.0, 100.0]), [0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn outline_output_is_bg_band_or_transparent() {
        let p = outlined([8.0, 8.0], 6.0);
        for yi in 0..=16 {
            for xi in 0..=16 {
                let frag = [xi as f32, yi as f32];
                let c = p.shade(frag);

                let k = c[3] / FG[3];
                let is_band = c == scale_rgba(FG, k) && k > 0.0 && k <= 1.0;
                assert!(
                    c == BG || c == CLEAR || is_band,
                    "unclassified output {c:?} at {frag:?}"
                );
            }
        }
    }

    // ── placement ─────────────────────────────────────────────────────────

    #[test]
    fn pixel_box_covers_bounding_square() {
        let p = filled([100.0, 60.0], 10.0);
        let b = p.pixel_box((800.0, 600.0)).unwrap();
        assert_eq!((b.x, b.y, b.w, b.h), (90.0, 50.0, 20.0, 20.0));
    }

    #[test]
    fn pixel_box_clamps_to_framebuffer() {
        let p = filled([5.0, 5.0], 10.0);
        let b = p.pixel_box((800.0, 600.0)).unwrap();
        assert_eq!((b.x, b.y), (0.0, 0.0));
        assert_eq!((b.w, b.h), (15.0, 15.0));
    }

    #[test]
    fn pixel_box_snaps_fractional_bounds_outward() {
        let p = filled([50.5, 50.5], 10.25);
        let b = p.pixel_box((800.0, 600.0)).unwrap();
        assert_eq!((b.x, b.y), (40.0, 40.0));
        assert_eq!((b.w, b.h), (21.0, 21.0));
    }

    #[test]
    fn pixel_box_none_when_fully_off_screen() {
        assert!(filled([-20.0, 10.0], 5.0).pixel_box((800.0, 600.0)).is_none());
        assert!(filled([900.0, 10.0], 5.0).pixel_box((800.0, 600.0)).is_none());
        assert!(filled([10.0, 700.0], 5.0).pixel_box((800.0, 600.0)).is_none());
    }

    #[test]
    fn framebuffer_size_applies_scale_factor() {
        assert_eq!(framebuffer_size(Viewport::new(400.0, 300.0), 2.0), (800.0, 600.0));
        assert_eq!(framebuffer_size(Viewport::new(399.9, 300.0), 2.0), (799.0, 600.0));
    }

    // ── command conversion ────────────────────────────────────────────────

    #[test]
    fn from_cmd_scales_to_physical_pixels() {
        let cmd = CircleCmd::disc(Vec2::new(100.0, 50.0), 10.0, Color::new(0.2, 0.4, 0.6, 1.0));
        let p = CircleParams::from_cmd(&cmd, 2.0);
        assert_eq!(p.center, [200.0, 100.0]);
        assert_eq!(p.radius, 20.0);
        assert_eq!(p.fill, 1);
        assert_eq!(p.fg, [0.2, 0.4, 0.6, 1.0]);
    }

    #[test]
    fn from_cmd_ring_keeps_bg() {
        let cmd = CircleCmd::ring(Vec2::new(10.0, 10.0), 5.0, Color::white(), Color::black());
        let p = CircleParams::from_cmd(&cmd, 1.0);
        assert_eq!(p.fill, 0);
        assert_eq!(p.bg, [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(p.fg, [0.0, 0.0, 0.0, 1.0]);
    }
}
