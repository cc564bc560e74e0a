/// Minimum pixel count (h*w) of an output plane to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Side length of the square generating kernel.
pub const KERNEL_SIZE: usize = 5;

/// Kernel radius: offsets run over `-KERNEL_RADIUS..=KERNEL_RADIUS`.
pub const KERNEL_RADIUS: isize = 2;

/// Default generating-kernel parameter `a`.
pub const DEFAULT_KERNEL_A: f32 = 1.0;

/// Default number of pyramid levels (planes), baseband included.
pub const DEFAULT_LEVELS: usize = 5;

/// Default scalar quantization step for detail planes. 0.0 disables quantization.
pub const DEFAULT_QUANTIZATION: f32 = 1.0;

/// Relative tolerance for the floating-point integrality check of
/// `(dim + 3) / 2^levels`.
pub const SCALE_EPSILON: f64 = 1e-5;

/// Gain applied after zero-insertion upsampling: the kernel sums to 1 over
/// the full grid but only a quarter of the taps land on source samples.
pub const EXPAND_GAIN: f32 = 4.0;

/// Peak signal value for 8-bit sourced images, used for PSNR.
pub const PEAK_8BIT: f32 = 255.0;

/// Offset added to signed difference images so zero error maps to mid-grey.
pub const DIFFERENCE_OFFSET: f32 = 128.0;

/// Number of channels in a color frame (R, G, B).
pub const COLOR_CHANNEL_COUNT: usize = 3;
