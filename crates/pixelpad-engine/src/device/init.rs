/// Device and surface preferences.
#[derive(Debug, Clone)]
pub struct GpuInit {
    pub prefer_srgb: bool,
    /// FIFO is available everywhere.
    pub present_mode: wgpu::PresentMode,
    /// Unsupported requests fall back to the platform default.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,
    pub required_features: wgpu::Features,
    pub required_limits: wgpu::Limits,
    /// Hint; backends may ignore it.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            // Colored triangles and one uniform; WebGL2-class limits suffice.
            required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
            desired_maximum_frame_latency: 2,
        }
    }
}
