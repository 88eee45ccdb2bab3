mod code128;
mod code39;
mod encode;
mod render;
mod upca;

pub use code128::Code128Encoder;
pub use code39::Code39Encoder;
pub use encode::{encode, Encoder, EncodingError, LinearEncoder};
pub use render::TextRenderer;
pub use upca::UpcAEncoder;
