pub mod glow_loop;
pub mod share_image;

pub use glow_loop::GlowLoop;
pub use share_image::{PatternAsset, ShareCardRenderer, ShareImage};
