use cloud_core::panel::{panel_layout, ParameterPanel};
use cloud_core::scene::{Camera, FrameClock, LightConfig, OrbitConfig, SceneConfig, Viewport};
use cloud_core::{GenerationParameters, ParameterError, PrimitiveKind};
use wasm_bindgen::prelude::*;

/// GPU-compatible instance struct: 80 bytes, column-major model matrix first.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuInstance {
    pub model: [f32; 16], // 64 bytes
    pub factor: f32,      //  4 bytes
    pub _pad: [f32; 3],   // 12 bytes
}

fn to_js(err: ParameterError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct CloudWorld {
    panel: ParameterPanel,
    camera: Camera,
    lights: [LightConfig; 2],
    orbit: OrbitConfig,
    background: Option<String>,
    clock: FrameClock,
    instance_buffer: Vec<GpuInstance>,
    view_projection: [f32; 16],
}

#[wasm_bindgen]
impl CloudWorld {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Result<CloudWorld, JsValue> {
        Self::with_parameters(GenerationParameters::default(), width, height)
    }

    /// Start from a JSON parameter snapshot (camelCase field names).
    #[wasm_bindgen]
    pub fn from_parameters_json(json: &str, width: f32, height: f32) -> Result<CloudWorld, JsValue> {
        let params = GenerationParameters::from_json(json).map_err(to_js)?;
        Self::with_parameters(params, width, height)
    }

    /// Update one field of the live parameters without regenerating.
    #[wasm_bindgen]
    pub fn set_parameter(&mut self, name: &str, value: f64) -> Result<(), JsValue> {
        self.panel.edit(name, value).map_err(to_js)
    }

    /// Update one field and regenerate. Returns the new instance count.
    #[wasm_bindgen]
    pub fn commit_parameter(&mut self, name: &str, value: f64) -> Result<usize, JsValue> {
        self.regenerate_with(|panel| panel.commit(name, value))
    }

    #[wasm_bindgen]
    pub fn set_primitive_kind(&mut self, kind: u32) -> Result<usize, JsValue> {
        let kind = PrimitiveKind::from_index(kind);
        self.regenerate_with(|panel| panel.commit("primitiveKind", kind.index() as f64))
    }

    #[wasm_bindgen]
    pub fn set_parameters_json(&mut self, json: &str) -> Result<usize, JsValue> {
        let params = GenerationParameters::from_json(json).map_err(to_js)?;
        self.regenerate_with(|panel| panel.commit_all(params))
    }

    /// Manual regeneration trigger. On invalid parameters the previous cloud
    /// stays and the error is returned.
    #[wasm_bindgen]
    pub fn regenerate(&mut self) -> Result<usize, JsValue> {
        self.regenerate_with(ParameterPanel::generate_new_cloud)
    }

    #[wasm_bindgen]
    pub fn parameters_json(&self) -> Result<String, JsValue> {
        self.panel.params().to_json().map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn controls_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&panel_layout()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen]
    pub fn instance_count(&self) -> usize {
        self.panel.host().visible_instances()
    }

    #[wasm_bindgen]
    pub fn primitive_kind(&self) -> u32 {
        self.panel
            .host()
            .current()
            .map_or(0, |cloud| cloud.kind().index())
    }

    #[wasm_bindgen]
    pub fn get_instance_buffer_ptr(&self) -> *const f32 {
        self.instance_buffer.as_ptr() as *const f32
    }

    #[wasm_bindgen]
    pub fn get_instance_buffer_byte_length(&self) -> usize {
        self.instance_buffer.len() * std::mem::size_of::<GpuInstance>()
    }

    /// Interleaved position/normal vertices of the current cloud's geometry.
    #[wasm_bindgen]
    pub fn get_vertex_buffer_ptr(&self) -> *const f32 {
        match self.panel.host().current() {
            Some(cloud) => cloud.geometry().vertices.as_ptr() as *const f32,
            None => std::ptr::null(),
        }
    }

    #[wasm_bindgen]
    pub fn get_vertex_buffer_byte_length(&self) -> usize {
        self.panel
            .host()
            .current()
            .map_or(0, |cloud| std::mem::size_of_val(cloud.geometry().vertices.as_slice()))
    }

    #[wasm_bindgen]
    pub fn get_index_buffer_ptr(&self) -> *const u32 {
        match self.panel.host().current() {
            Some(cloud) => cloud.geometry().indices.as_ptr(),
            None => std::ptr::null(),
        }
    }

    #[wasm_bindgen]
    pub fn get_index_count(&self) -> usize {
        self.panel
            .host()
            .current()
            .map_or(0, |cloud| cloud.geometry().indices.len())
    }

    /// Column-major view-projection matrix for the default camera.
    #[wasm_bindgen]
    pub fn get_view_projection_ptr(&self) -> *const f32 {
        self.view_projection.as_ptr()
    }

    #[wasm_bindgen]
    pub fn resize(&mut self, width: f32, height: f32) {
        self.camera.resize(Viewport::new(width, height));
        self.write_camera_output();
    }

    /// Ambient then directional light, 7 floats each: rgb, intensity, xyz
    /// (zero position for ambient).
    #[wasm_bindgen]
    pub fn light_data(&self) -> Vec<f32> {
        self.lights
            .iter()
            .flat_map(|light| {
                let p = light.position.unwrap_or_default();
                [
                    light.color.x,
                    light.color.y,
                    light.color.z,
                    light.intensity,
                    p.x,
                    p.y,
                    p.z,
                ]
            })
            .collect()
    }

    /// Background texture URL, if any.
    #[wasm_bindgen]
    pub fn background_texture(&self) -> Option<String> {
        self.background.clone()
    }

    #[wasm_bindgen]
    pub fn damping_enabled(&self) -> bool {
        self.orbit.enable_damping
    }

    #[wasm_bindgen]
    pub fn damping_factor(&self) -> f32 {
        self.orbit.damping_factor
    }

    #[wasm_bindgen]
    pub fn aspect(&self) -> f32 {
        self.camera.aspect()
    }

    /// Per-frame callback. `dt` is in seconds.
    #[wasm_bindgen]
    pub fn tick(&mut self, dt: f64) -> f64 {
        self.clock.tick(dt);
        self.clock.elapsed()
    }

    #[wasm_bindgen]
    pub fn frame_count(&self) -> u64 {
        self.clock.frames()
    }
}

impl CloudWorld {
    fn with_parameters(
        params: GenerationParameters,
        width: f32,
        height: f32,
    ) -> Result<CloudWorld, JsValue> {
        let panel = ParameterPanel::new(params).map_err(to_js)?;
        let scene = SceneConfig::default();
        let camera = Camera::new(scene.camera, Viewport::new(width, height));

        web_sys::console::log_1(
            &format!(
                "WASM CloudWorld created: {} instances",
                panel.host().visible_instances()
            )
            .into(),
        );

        let mut world = CloudWorld {
            panel,
            camera,
            lights: [scene.ambient, scene.directional],
            orbit: scene.orbit,
            background: scene.background,
            clock: FrameClock::default(),
            instance_buffer: Vec::new(),
            view_projection: [0.0; 16],
        };
        world.write_gpu_output();
        world.write_camera_output();
        Ok(world)
    }

    fn regenerate_with<F>(&mut self, f: F) -> Result<usize, JsValue>
    where
        F: FnOnce(&mut ParameterPanel) -> Result<usize, ParameterError>,
    {
        let start = js_sys::Date::now();
        match f(&mut self.panel) {
            Ok(count) => {
                self.write_gpu_output();
                web_sys::console::log_1(
                    &format!(
                        "cloud regenerated: {} instances in {:.2} ms",
                        count,
                        js_sys::Date::now() - start
                    )
                    .into(),
                );
                Ok(count)
            }
            Err(err) => {
                web_sys::console::warn_1(&format!("keeping previous cloud: {}", err).into());
                Err(to_js(err))
            }
        }
    }

    fn write_gpu_output(&mut self) {
        self.instance_buffer.clear();
        if let Some(cloud) = self.panel.host().current() {
            let matrices = cloud.world_matrices();
            self.instance_buffer
                .extend(cloud.instances().iter().zip(matrices).map(|(inst, m)| GpuInstance {
                    model: m.to_cols_array(),
                    factor: inst.factor,
                    _pad: [0.0; 3],
                }));
        }
    }

    fn write_camera_output(&mut self) {
        self.view_projection = self.camera.view_projection().to_cols_array();
    }
}
