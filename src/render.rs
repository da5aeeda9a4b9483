/// Backend trait and the rendered frame type.
pub mod backend;
/// CPU rasterizer powered by `vello_cpu`.
pub mod cpu;
