//! Scene Shaders
//!
//! Contains WGSL source for the four pipelines:
//! 1. Foliage - the particle field, blended and swayed in the vertex stage
//! 2. Ornaments - instanced unit meshes with simple directional shading
//! 3. Frames - billboard quads with a gold border around a photo
//! 4. Floor - the dark reflective-looking ground plane
//!
//! Every source shares the same `Scene` uniform struct; it must stay in
//! field-for-field agreement with `SceneUniforms`.
//!
//! ## Overdraw
//!
//! Thirty thousand soft sprites stack deep near the trunk. The field
//! therefore draws last with **additive blending** (ONE + ONE, premultiplied
//! in the fragment) and depth writes off: additive is commutative, so no
//! sorting is needed, and the depth test against the opaque passes still
//! clips sprites behind the floor and ornaments.

/// Depth buffer format shared by every pipeline.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Additive blend state for the foliage pass.
pub const ADDITIVE_BLEND: wgpu::BlendState = wgpu::BlendState {
    color: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
    alpha: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
};

/// Depth state for the opaque passes: test and write.
#[must_use]
pub fn opaque_depth_state() -> wgpu::DepthStencilState {
    wgpu::DepthStencilState {
        format: DEPTH_FORMAT,
        depth_write_enabled: true,
        depth_compare: wgpu::CompareFunction::Less,
        stencil: wgpu::StencilState::default(),
        bias: wgpu::DepthBiasState::default(),
    }
}

/// Depth state for the foliage pass: test against opaque geometry, never
/// write. Sprites must not occlude each other or the blending order would
/// show.
#[must_use]
pub fn foliage_depth_state() -> wgpu::DepthStencilState {
    wgpu::DepthStencilState {
        format: DEPTH_FORMAT,
        depth_write_enabled: false,
        depth_compare: wgpu::CompareFunction::Less,
        stencil: wgpu::StencilState::default(),
        bias: wgpu::DepthBiasState::default(),
    }
}

/// Foliage field shader.
///
/// The vertex buffer is instance-stepped (one entry per point); the six
/// quad corners come from the vertex index. Blending between the two stored
/// positions, the sway, and the color cycle all run here, so the CPU never
/// touches a foliage point after upload.
pub const FOLIAGE_SHADER: &str = r#"
// Foliage field: camera-facing soft sprites, blended in the vertex stage.

struct Scene {
    view: mat4x4<f32>,
    proj: mat4x4<f32>,
    progress_time: vec4<f32>,
    foliage_low: vec4<f32>,
    foliage_high: vec4<f32>,
    foliage_glow: vec4<f32>,
}

@group(0) @binding(0) var<uniform> scene: Scene;

struct PointInput {
    @location(0) chaos_position: vec3<f32>,
    @location(1) target_position: vec3<f32>,
    @location(2) size: f32,
}

struct VertexOutput {
    @builtin(position) position: vec4<f32>,
    @location(0) corner: vec2<f32>,
    @location(1) color: vec3<f32>,
}

// Quad corners (2 triangles), selected by vertex index.
const CORNERS: array<vec2<f32>, 6> = array<vec2<f32>, 6>(
    vec2<f32>(-0.5, -0.5),
    vec2<f32>(0.5, -0.5),
    vec2<f32>(0.5, 0.5),
    vec2<f32>(-0.5, -0.5),
    vec2<f32>(0.5, 0.5),
    vec2<f32>(-0.5, 0.5),
);

// Sprite side per unit of point size. Expanding in view space makes screen
// size fall off as 1/-z, the same law as a 500px point-size factor at the
// reference fov and window height.
const POINT_WORLD_SCALE: f32 = 0.5;

@vertex
fn vs_main(
    point: PointInput,
    @builtin(vertex_index) vertex_index: u32,
) -> VertexOutput {
    var out: VertexOutput;

    let progress = scene.progress_time.x;
    let time = scene.progress_time.y;

    // Blend between the cloud and the tree.
    var position = mix(point.chaos_position, point.target_position, progress);

    // Horizontal sway: strong while dispersed, settling to a breeze.
    let amp = (1.0 - progress) * 0.2 + 0.08;
    position.x += sin(time * 1.5 + position.y * 0.8) * amp;
    position.z += cos(time * 1.6 + position.y * 0.8) * amp;

    // Shimmer cycle over height, drifting gold as the tree completes.
    let cycle = sin(position.y * 3.0 + time * 2.0) * 0.5 + 0.5;
    let base = mix(scene.foliage_low.rgb, scene.foliage_high.rgb, cycle);
    let gold = pow(progress, 2.5) * 0.4;
    out.color = mix(base, scene.foliage_glow.rgb, gold);

    // Camera-facing expansion in view space.
    let corner = CORNERS[vertex_index % 6u];
    var view_pos = scene.view * vec4<f32>(position, 1.0);
    view_pos = vec4<f32>(view_pos.xy + corner * point.size * POINT_WORLD_SCALE, view_pos.zw);

    out.position = scene.proj * view_pos;
    out.corner = corner;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    // Soft circular sprite. Premultiplied for ONE + ONE blending.
    let dist = length(in.corner);
    if dist > 0.5 {
        discard;
    }
    let alpha = 1.0 - smoothstep(0.0, 0.5, dist);
    return vec4<f32>(in.color * alpha, alpha);
}
"#;

/// Ornament shader: instanced unit meshes, one directional light plus an
/// ambient floor, emissive boost for the lamps.
pub const ORNAMENT_SHADER: &str = r#"
// Instanced ornaments: position + uniform scale per instance.

struct Scene {
    view: mat4x4<f32>,
    proj: mat4x4<f32>,
    progress_time: vec4<f32>,
    foliage_low: vec4<f32>,
    foliage_high: vec4<f32>,
    foliage_glow: vec4<f32>,
}

@group(0) @binding(0) var<uniform> scene: Scene;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) position_scale: vec4<f32>,
    @location(3) color_emission: vec4<f32>,
}

struct VertexOutput {
    @builtin(position) position: vec4<f32>,
    @location(0) normal: vec3<f32>,
    @location(1) color: vec3<f32>,
    @location(2) emission: f32,
}

const LIGHT_DIR: vec3<f32> = vec3<f32>(0.5, 0.8, 0.5);

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    // Uniform scale keeps normals valid without an inverse transpose.
    let world = in.position_scale.xyz + in.position * in.position_scale.w;
    out.position = scene.proj * scene.view * vec4<f32>(world, 1.0);
    out.normal = in.normal;
    out.color = in.color_emission.rgb;
    out.emission = in.color_emission.w;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let n = normalize(in.normal);
    let diffuse = max(dot(n, normalize(LIGHT_DIR)), 0.0);
    let lit = in.color * (0.35 + diffuse * 0.75);
    return vec4<f32>(lit + in.color * in.emission, 1.0);
}
"#;

/// Photo frame shader: a billboard quad whose outer margin is the gold
/// border and whose inner rectangle samples the slot's texture.
pub const FRAME_SHADER: &str = r#"
// Photo frames: camera-facing quads, border + photo in one pass.

struct Scene {
    view: mat4x4<f32>,
    proj: mat4x4<f32>,
    progress_time: vec4<f32>,
    foliage_low: vec4<f32>,
    foliage_high: vec4<f32>,
    foliage_glow: vec4<f32>,
}

@group(0) @binding(0) var<uniform> scene: Scene;
@group(1) @binding(0) var photo_texture: texture_2d<f32>;
@group(1) @binding(1) var photo_sampler: sampler;

struct FrameInput {
    @location(2) position_scale: vec4<f32>,
    @location(3) color_emission: vec4<f32>,
}

struct VertexOutput {
    @builtin(position) position: vec4<f32>,
    @location(0) uv: vec2<f32>,
    @location(1) border_color: vec3<f32>,
    @location(2) emission: f32,
}

const CORNERS: array<vec2<f32>, 6> = array<vec2<f32>, 6>(
    vec2<f32>(-0.5, -0.5),
    vec2<f32>(0.5, -0.5),
    vec2<f32>(0.5, 0.5),
    vec2<f32>(-0.5, -0.5),
    vec2<f32>(0.5, 0.5),
    vec2<f32>(-0.5, 0.5),
);

const FRAME_WIDTH: f32 = 1.3;
const FRAME_HEIGHT: f32 = 1.7;
const PHOTO_WIDTH: f32 = 1.15;
const PHOTO_HEIGHT: f32 = 1.55;

@vertex
fn vs_main(
    frame: FrameInput,
    @builtin(vertex_index) vertex_index: u32,
) -> VertexOutput {
    var out: VertexOutput;

    let corner = CORNERS[vertex_index % 6u];
    let extent = vec2<f32>(FRAME_WIDTH, FRAME_HEIGHT) * frame.position_scale.w;

    var view_pos = scene.view * vec4<f32>(frame.position_scale.xyz, 1.0);
    view_pos = vec4<f32>(view_pos.xy + corner * extent, view_pos.zw);

    out.position = scene.proj * view_pos;
    out.uv = corner + vec2<f32>(0.5, 0.5);
    out.border_color = frame.color_emission.rgb;
    out.emission = frame.color_emission.w;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    // Inner rectangle in quad uv space.
    let margin = vec2<f32>(
        (1.0 - PHOTO_WIDTH / FRAME_WIDTH) * 0.5,
        (1.0 - PHOTO_HEIGHT / FRAME_HEIGHT) * 0.5,
    );
    let inner = (in.uv - margin) / (vec2<f32>(1.0, 1.0) - margin * 2.0);

    // Sample unconditionally to keep control flow uniform, then select.
    let tex_uv = clamp(
        vec2<f32>(inner.x, 1.0 - inner.y),
        vec2<f32>(0.0, 0.0),
        vec2<f32>(1.0, 1.0),
    );
    let photo = textureSample(photo_texture, photo_sampler, tex_uv);

    let in_photo = step(0.0, inner.x) * step(inner.x, 1.0)
        * step(0.0, inner.y) * step(inner.y, 1.0);
    let border = in.border_color * (0.7 + in.emission);
    let color = mix(border, photo.rgb, in_photo);
    return vec4<f32>(color, 1.0);
}
"#;

/// Floor shader: a dark plane with a faint green sheen.
pub const FLOOR_SHADER: &str = r#"
// Ground plane under the tree.

struct Scene {
    view: mat4x4<f32>,
    proj: mat4x4<f32>,
    progress_time: vec4<f32>,
    foliage_low: vec4<f32>,
    foliage_high: vec4<f32>,
    foliage_glow: vec4<f32>,
}

@group(0) @binding(0) var<uniform> scene: Scene;

const FLOOR_COLOR: vec3<f32> = vec3<f32>(0.0, 0.016, 0.0);
const FLOOR_SHEEN: vec3<f32> = vec3<f32>(0.0, 0.2, 0.078);

@vertex
fn vs_main(@location(0) position: vec3<f32>) -> @builtin(position) vec4<f32> {
    return scene.proj * scene.view * vec4<f32>(position, 1.0);
}

@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return vec4<f32>(FLOOR_COLOR + FLOOR_SHEEN * 0.2, 1.0);
}
"#;
