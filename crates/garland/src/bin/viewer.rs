//! Interactive scene viewer.
//!
//! Opens a window, builds the seeded scene and runs the formation loop at
//! display rate. Requires the `viewer` feature:
//!
//! ```text
//! cargo run --bin viewer --features viewer [photo.jpg ...]
//! ```
//!
//! Controls: left-drag orbits, scroll zooms, SPACE toggles formation,
//! dropping an image file onto the window loads it into a photo frame,
//! ESC quits.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use winit::dpi::PhysicalSize;
use winit::event::{
    ElementState, Event, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent,
};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowBuilder;

use garland::OrbitCamera;
use garland_core::{SceneControls, ScenePhase, Vec3};
use garland_procedural::generate_layout;
use garland_rendering::photos::PhotoSlot;
use garland_rendering::shaders;
use garland_rendering::{
    FoliageField, Mesh, MeshVertex, OrnamentInstance, PhotoImage, PhotoLibrary,
    SceneAnimator, SceneUniforms, MAX_INSTANCES,
};

/// Night sky behind the tree.
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.004,
    g: 0.006,
    b: 0.016,
    a: 1.0,
};

/// Scroll wheels that report pixels get folded down to line units.
const PIXELS_PER_LINE: f64 = 40.0;

/// Seconds between status lines in the log.
const STATUS_INTERVAL: u64 = 2;

fn create_depth_texture(
    device: &wgpu::Device,
    surface_config: &wgpu::SurfaceConfiguration,
) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Depth Texture"),
        size: wgpu::Extent3d {
            width: surface_config.width,
            height: surface_config.height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: shaders::DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

/// Uploads a photo into a fresh texture and binds it for the frame shader.
fn photo_bind_group(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    layout: &wgpu::BindGroupLayout,
    sampler: &wgpu::Sampler,
    image: &PhotoImage,
) -> wgpu::BindGroup {
    let size = wgpu::Extent3d {
        width: image.width,
        height: image.height,
        depth_or_array_layers: 1,
    };
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Photo Texture"),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    queue.write_texture(
        wgpu::ImageCopyTexture {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &image.pixels,
        wgpu::ImageDataLayout {
            offset: 0,
            bytes_per_row: Some(4 * image.width),
            rows_per_image: Some(image.height),
        },
        size,
    );
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("Photo Bind Group"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}

fn main() {
    garland::boot::init_tracing();

    let config = match garland::boot::load_scene_config() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("configuration error: {error}");
            std::process::exit(1);
        }
    };
    let seed = garland::boot::load_scene_seed();
    let photo_paths: Vec<PathBuf> = std::env::args().skip(1).map(PathBuf::from).collect();

    println!("╔══════════════════════════════════════════╗");
    println!("║            GARLAND  ·  VIEWER            ║");
    println!("╚══════════════════════════════════════════╝");
    println!(
        "  {} foliage · {} ornaments · {} frames · seed {:#x}",
        config.population.foliage,
        config.population.ornaments,
        config.population.frames,
        seed.value()
    );
    println!("  SPACE toggle · drag orbit · scroll zoom · drop image · ESC quit");
    println!();

    let layout = generate_layout(&config, seed);
    let controls = SceneControls::new();
    let mut photos = PhotoLibrary::new(config.population.frames);
    photos.request_initial(photo_paths);
    let mut animator = SceneAnimator::new(&config, &layout, ScenePhase::Formed);
    let ranges = animator.ranges().clone();
    let field = FoliageField::new(&layout);
    let mut camera = OrbitCamera::new(Vec3::new(0.0, config.tree.height * 0.5, 0.0));

    let event_loop = EventLoop::new().expect("failed to create event loop");
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Garland")
            .with_inner_size(PhysicalSize::new(1280, 720))
            .build(&event_loop)
            .expect("failed to create window"),
    );

    let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
        backends: wgpu::Backends::all(),
        ..Default::default()
    });
    let surface = instance
        .create_surface(window.clone())
        .expect("failed to create surface");
    let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
        power_preference: wgpu::PowerPreference::HighPerformance,
        compatible_surface: Some(&surface),
        force_fallback_adapter: false,
    }))
    .expect("no suitable GPU adapter");
    tracing::info!(adapter = %adapter.get_info().name, "adapter selected");
    let (device, queue) = pollster::block_on(adapter.request_device(
        &wgpu::DeviceDescriptor {
            label: Some("Garland Device"),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
        },
        None,
    ))
    .expect("failed to create device");

    let size = window.inner_size();
    let surface_caps = surface.get_capabilities(&adapter);
    let surface_format = surface_caps
        .formats
        .iter()
        .copied()
        .find(wgpu::TextureFormat::is_srgb)
        .unwrap_or(surface_caps.formats[0]);
    let mut surface_config = wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format: surface_format,
        width: size.width.max(1),
        height: size.height.max(1),
        present_mode: wgpu::PresentMode::AutoVsync,
        alpha_mode: surface_caps.alpha_modes[0],
        view_formats: vec![],
        desired_maximum_frame_latency: 2,
    };
    surface.configure(&device, &surface_config);
    let mut depth_view = create_depth_texture(&device, &surface_config);

    // Scene-wide uniforms at group 0, one photo texture at group 1.
    let scene_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("Scene Bind Group Layout"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });
    let photo_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("Photo Bind Group Layout"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    view_dimension: wgpu::TextureViewDimension::D2,
                    multisampled: false,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    });

    use wgpu::util::DeviceExt;
    let initial_aspect = surface_config.width as f32 / surface_config.height as f32;
    let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Scene Uniform Buffer"),
        contents: bytemuck::bytes_of(&SceneUniforms::new(
            camera.view(),
            camera.projection(initial_aspect),
            animator.progress(),
            0.0,
            &config.palette,
        )),
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
    });
    let scene_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("Scene Bind Group"),
        layout: &scene_layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });

    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("Photo Sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        ..Default::default()
    });
    let placeholder = PhotoImage::placeholder();
    let mut photo_bindings: Vec<wgpu::BindGroup> = (0..photos.slot_count())
        .map(|_| photo_bind_group(&device, &queue, &photo_layout, &sampler, &placeholder))
        .collect();

    // Static geometry. The floor plane generates at y = 0 and sinks a
    // little so settled gifts rest on it rather than z-fight.
    let sphere = Mesh::unit_sphere(12, 18);
    let cube = Mesh::unit_cube();
    let mut floor = Mesh::unit_plane(20.0);
    for vertex in &mut floor.vertices {
        vertex.position[1] = -0.1;
    }
    let sphere_vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Sphere Vertex Buffer"),
        contents: sphere.vertex_bytes(),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let sphere_indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Sphere Index Buffer"),
        contents: sphere.index_bytes(),
        usage: wgpu::BufferUsages::INDEX,
    });
    let cube_vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Cube Vertex Buffer"),
        contents: cube.vertex_bytes(),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let cube_indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Cube Index Buffer"),
        contents: cube.index_bytes(),
        usage: wgpu::BufferUsages::INDEX,
    });
    let floor_vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Floor Vertex Buffer"),
        contents: floor.vertex_bytes(),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let floor_indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Floor Index Buffer"),
        contents: floor.index_bytes(),
        usage: wgpu::BufferUsages::INDEX,
    });
    let sphere_index_count = sphere.index_count();
    let cube_index_count = cube.index_count();
    let floor_index_count = floor.index_count();

    let point_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Foliage Point Buffer"),
        contents: FoliageField::point_bytes(&layout),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Ornament Instance Buffer"),
        size: (MAX_INSTANCES * OrnamentInstance::SIZE) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let scene_pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Scene Pipeline Layout"),
        bind_group_layouts: &[&scene_layout],
        push_constant_ranges: &[],
    });
    let frame_pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Frame Pipeline Layout"),
        bind_group_layouts: &[&scene_layout, &photo_layout],
        push_constant_ranges: &[],
    });

    let foliage_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("Foliage Shader"),
        source: wgpu::ShaderSource::Wgsl(shaders::FOLIAGE_SHADER.into()),
    });
    let ornament_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("Ornament Shader"),
        source: wgpu::ShaderSource::Wgsl(shaders::ORNAMENT_SHADER.into()),
    });
    let frame_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("Frame Shader"),
        source: wgpu::ShaderSource::Wgsl(shaders::FRAME_SHADER.into()),
    });
    let floor_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("Floor Shader"),
        source: wgpu::ShaderSource::Wgsl(shaders::FLOOR_SHADER.into()),
    });

    let primitive = wgpu::PrimitiveState {
        topology: wgpu::PrimitiveTopology::TriangleList,
        front_face: wgpu::FrontFace::Ccw,
        cull_mode: None,
        ..Default::default()
    };

    let ornament_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("Ornament Pipeline"),
        layout: Some(&scene_pipeline_layout),
        vertex: wgpu::VertexState {
            module: &ornament_shader,
            entry_point: "vs_main",
            buffers: &[MeshVertex::desc(), OrnamentInstance::desc()],
        },
        fragment: Some(wgpu::FragmentState {
            module: &ornament_shader,
            entry_point: "fs_main",
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_config.format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive,
        depth_stencil: Some(shaders::opaque_depth_state()),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
    });
    let frame_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("Frame Pipeline"),
        layout: Some(&frame_pipeline_layout),
        vertex: wgpu::VertexState {
            module: &frame_shader,
            entry_point: "vs_main",
            buffers: &[OrnamentInstance::desc()],
        },
        fragment: Some(wgpu::FragmentState {
            module: &frame_shader,
            entry_point: "fs_main",
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_config.format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive,
        depth_stencil: Some(shaders::opaque_depth_state()),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
    });
    let floor_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("Floor Pipeline"),
        layout: Some(&scene_pipeline_layout),
        vertex: wgpu::VertexState {
            module: &floor_shader,
            entry_point: "vs_main",
            buffers: &[MeshVertex::desc()],
        },
        fragment: Some(wgpu::FragmentState {
            module: &floor_shader,
            entry_point: "fs_main",
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_config.format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive,
        depth_stencil: Some(shaders::opaque_depth_state()),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
    });
    let foliage_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("Foliage Pipeline"),
        layout: Some(&scene_pipeline_layout),
        vertex: wgpu::VertexState {
            module: &foliage_shader,
            entry_point: "vs_main",
            buffers: &[FoliageField::vertex_layout()],
        },
        fragment: Some(wgpu::FragmentState {
            module: &foliage_shader,
            entry_point: "fs_main",
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_config.format,
                blend: Some(shaders::ADDITIVE_BLEND),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive,
        depth_stencil: Some(shaders::foliage_depth_state()),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
    });

    let mut dragging = false;
    let mut last_cursor: Option<(f64, f64)> = None;
    let mut last_frame = Instant::now();
    let mut last_status = Instant::now();
    let mut status_frames: u32 = 0;

    let _ = event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Poll);
        match event {
            Event::WindowEvent { window_id, event } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            physical_key: PhysicalKey::Code(key),
                            state: ElementState::Pressed,
                            repeat: false,
                            ..
                        },
                    ..
                } => match key {
                    KeyCode::Escape => elwt.exit(),
                    KeyCode::Space => controls.request_toggle(),
                    _ => {}
                },
                WindowEvent::MouseInput {
                    button: MouseButton::Left,
                    state,
                    ..
                } => {
                    dragging = state == ElementState::Pressed;
                }
                WindowEvent::CursorMoved { position, .. } => {
                    if let Some((last_x, last_y)) = last_cursor {
                        if dragging {
                            camera.orbit(
                                (position.x - last_x) as f32,
                                (position.y - last_y) as f32,
                            );
                        }
                    }
                    last_cursor = Some((position.x, position.y));
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    let lines = match delta {
                        MouseScrollDelta::LineDelta(_, y) => y,
                        MouseScrollDelta::PixelDelta(position) => {
                            (position.y / PIXELS_PER_LINE) as f32
                        }
                    };
                    camera.zoom(lines);
                }
                WindowEvent::DroppedFile(path) => {
                    tracing::info!(path = %path.display(), "photo dropped");
                    controls.request_photo(path);
                }
                WindowEvent::Resized(new_size) => {
                    if new_size.width > 0 && new_size.height > 0 {
                        surface_config.width = new_size.width;
                        surface_config.height = new_size.height;
                        surface.configure(&device, &surface_config);
                        depth_view = create_depth_texture(&device, &surface_config);
                    }
                }
                WindowEvent::RedrawRequested => {
                    let now = Instant::now();
                    let delta = now.duration_since(last_frame).as_secs_f32();
                    last_frame = now;

                    let update = animator.frame(&layout, &controls, &mut photos, delta);
                    let progress = update.progress;
                    let elapsed = update.elapsed;
                    let stats = update.stats;
                    queue.write_buffer(&instance_buffer, 0, update.instance_bytes);

                    for slot in photos.poll() {
                        if let Some(PhotoSlot::Ready(image)) = photos.slot(slot) {
                            photo_bindings[slot] =
                                photo_bind_group(&device, &queue, &photo_layout, &sampler, image);
                        }
                    }

                    camera.update(delta);
                    let aspect = surface_config.width as f32 / surface_config.height as f32;
                    let uniforms = SceneUniforms::new(
                        camera.view(),
                        camera.projection(aspect),
                        progress,
                        elapsed,
                        &config.palette,
                    );
                    queue.write_buffer(&uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

                    let output = match surface.get_current_texture() {
                        Ok(output) => output,
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            surface.configure(&device, &surface_config);
                            return;
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            tracing::error!("surface out of memory");
                            elwt.exit();
                            return;
                        }
                        Err(wgpu::SurfaceError::Timeout) => return,
                    };
                    let view = output
                        .texture
                        .create_view(&wgpu::TextureViewDescriptor::default());
                    let mut encoder =
                        device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
                            label: Some("Frame Encoder"),
                        });
                    {
                        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                            label: Some("Scene Pass"),
                            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                                view: &view,
                                resolve_target: None,
                                ops: wgpu::Operations {
                                    load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                                    store: wgpu::StoreOp::Store,
                                },
                            })],
                            depth_stencil_attachment: Some(
                                wgpu::RenderPassDepthStencilAttachment {
                                    view: &depth_view,
                                    depth_ops: Some(wgpu::Operations {
                                        load: wgpu::LoadOp::Clear(1.0),
                                        store: wgpu::StoreOp::Store,
                                    }),
                                    stencil_ops: None,
                                },
                            ),
                            timestamp_writes: None,
                            occlusion_query_set: None,
                        });

                        // Opaque ornaments first: spheres for baubles and
                        // lamps, cubes for gifts.
                        pass.set_pipeline(&ornament_pipeline);
                        pass.set_bind_group(0, &scene_bind_group, &[]);
                        pass.set_vertex_buffer(1, instance_buffer.slice(..));
                        pass.set_vertex_buffer(0, sphere_vertices.slice(..));
                        pass.set_index_buffer(sphere_indices.slice(..), wgpu::IndexFormat::Uint32);
                        pass.draw_indexed(0..sphere_index_count, 0, ranges.baubles.clone());
                        pass.draw_indexed(0..sphere_index_count, 0, ranges.lamps.clone());
                        pass.set_vertex_buffer(0, cube_vertices.slice(..));
                        pass.set_index_buffer(cube_indices.slice(..), wgpu::IndexFormat::Uint32);
                        pass.draw_indexed(0..cube_index_count, 0, ranges.gifts.clone());

                        // One quad per photo frame, each with its own texture.
                        pass.set_pipeline(&frame_pipeline);
                        pass.set_vertex_buffer(0, instance_buffer.slice(..));
                        for (slot, binding) in photo_bindings.iter().enumerate() {
                            pass.set_bind_group(1, binding, &[]);
                            let first = ranges.frames.start + slot as u32;
                            pass.draw(0..6, first..first + 1);
                        }

                        pass.set_pipeline(&floor_pipeline);
                        pass.set_vertex_buffer(0, floor_vertices.slice(..));
                        pass.set_index_buffer(floor_indices.slice(..), wgpu::IndexFormat::Uint32);
                        pass.draw_indexed(0..floor_index_count, 0, 0..1);

                        // Additive foliage last so it accumulates over
                        // everything without writing depth.
                        pass.set_pipeline(&foliage_pipeline);
                        pass.set_vertex_buffer(0, point_buffer.slice(..));
                        pass.draw(0..FoliageField::VERTICES_PER_POINT, 0..field.point_count());
                    }
                    queue.submit(std::iter::once(encoder.finish()));
                    output.present();

                    status_frames += 1;
                    if last_status.elapsed().as_secs() >= STATUS_INTERVAL {
                        let fps =
                            f64::from(status_frames) / last_status.elapsed().as_secs_f64();
                        tracing::info!(
                            fps = format_args!("{fps:.0}"),
                            progress = format_args!("{progress:.3}"),
                            phase = ?stats.phase,
                            instances = stats.staged_instances,
                            "frame status"
                        );
                        last_status = now;
                        status_frames = 0;
                    }
                }
                _ => {}
            },
            Event::AboutToWait => window.request_redraw(),
            _ => {}
        }
    });
}
