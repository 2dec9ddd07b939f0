//! Rectangle renderer.
//!
//! Turns the frame's draw list into a single colored-quad draw call. The
//! toolkit re-issues every rectangle every frame, so the vertex buffer is
//! streamed and no state is carried between frames beyond the GPU objects.

use miniquad::{
    Bindings, Buffer, BufferLayout, BufferType, Context, PassAction, Pipeline, PipelineParams,
    Shader, VertexAttribute, VertexFormat,
};

use quickdraw_ui::{Color, DrawCommand, DrawList};

/// Upper bound on rectangles per frame; the draw list is truncated beyond it.
const MAX_RECTS: usize = 1024;
const MAX_VERTICES: usize = MAX_RECTS * 4;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, bytemuck::Pod, bytemuck::Zeroable)]
struct Vertex {
    position: [f32; 2],
    color: [f32; 4],
}

/// GPU state for filling axis-aligned rectangles.
pub struct RectRenderer {
    pipeline: Pipeline,
    bindings: Bindings,
    vertices: Vec<Vertex>,
}

impl RectRenderer {
    /// Builds the pipeline and buffers.
    pub fn new(ctx: &mut Context) -> Self {
        let shader = Shader::new(ctx, shader::VERTEX, shader::FRAGMENT, shader::meta())
            .expect("built-in shader failed to compile");

        let pipeline = Pipeline::with_params(
            ctx,
            &[BufferLayout::default()],
            &[
                VertexAttribute::new("position", VertexFormat::Float2),
                VertexAttribute::new("color0", VertexFormat::Float4),
            ],
            shader,
            PipelineParams::default(),
        );

        let vertex_buffer = Buffer::stream(
            ctx,
            BufferType::VertexBuffer,
            MAX_VERTICES * std::mem::size_of::<Vertex>(),
        );

        // Quads share one static index pattern; only vertices are streamed.
        let indices: Vec<u16> = (0..MAX_RECTS as u16)
            .flat_map(|quad| {
                let base = quad * 4;
                [base, base + 1, base + 2, base, base + 2, base + 3]
            })
            .collect();
        let index_buffer = Buffer::immutable(ctx, BufferType::IndexBuffer, &indices);

        let bindings = Bindings {
            vertex_buffers: vec![vertex_buffer],
            index_buffer,
            images: vec![],
        };

        Self {
            pipeline,
            bindings,
            vertices: Vec::with_capacity(MAX_VERTICES),
        }
    }

    /// Clears to `background`, draws the frame's rectangles, and presents.
    pub fn draw(&mut self, ctx: &mut Context, list: &DrawList, background: Color) {
        if list.len() > MAX_RECTS {
            tracing::warn!(
                rects = list.len(),
                max = MAX_RECTS,
                "draw list truncated"
            );
        }

        self.vertices.clear();
        for command in list.commands().iter().take(MAX_RECTS) {
            let DrawCommand::FillRect { bounds, color } = *command;
            let color = color.to_linear();
            let (left, top) = (bounds.x as f32, bounds.y as f32);
            let (right, bottom) = (bounds.right() as f32, bounds.bottom() as f32);
            self.vertices.extend_from_slice(&[
                Vertex { position: [left, top], color },
                Vertex { position: [right, top], color },
                Vertex { position: [right, bottom], color },
                Vertex { position: [left, bottom], color },
            ]);
        }
        self.bindings.vertex_buffers[0].update(ctx, &self.vertices);

        let (width, height) = ctx.screen_size();
        let projection = glam::Mat4::orthographic_rh_gl(0., width, height, 0., -1., 1.);

        let [r, g, b, a] = background.to_linear();
        ctx.begin_default_pass(PassAction::clear_color(r, g, b, a));

        if !self.vertices.is_empty() {
            ctx.apply_pipeline(&self.pipeline);
            ctx.apply_bindings(&self.bindings);
            ctx.apply_uniforms(&shader::Uniforms { projection });
            let index_count = (self.vertices.len() / 4) * 6;
            ctx.draw(0, index_count as i32, 1);
        }

        ctx.end_render_pass();
        ctx.commit_frame();
    }
}

mod shader {
    use miniquad::{ShaderMeta, UniformBlockLayout, UniformDesc, UniformType};

    pub const VERTEX: &str = r#"#version 100
    attribute vec2 position;
    attribute vec4 color0;

    varying lowp vec4 color;

    uniform mat4 Projection;

    void main() {
        gl_Position = Projection * vec4(position, 0, 1);
        color = color0;
    }"#;

    pub const FRAGMENT: &str = r#"#version 100
    varying lowp vec4 color;

    void main() {
        gl_FragColor = color;
    }"#;

    pub fn meta() -> ShaderMeta {
        ShaderMeta {
            images: vec![],
            uniforms: UniformBlockLayout {
                uniforms: vec![UniformDesc::new("Projection", UniformType::Mat4)],
            },
        }
    }

    #[repr(C)]
    #[derive(Debug)]
    pub struct Uniforms {
        pub projection: glam::Mat4,
    }
}
