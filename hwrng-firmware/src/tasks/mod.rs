//! Embassy async tasks

pub mod sampler;

pub use sampler::{sampler_task, SamplerConfig};
