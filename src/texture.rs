use std::sync::Arc;

/// Decoded texture as handed over by the asset layer
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

impl Texture {
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }
}

/// Shared, read-only texture reference
pub type TextureHandle = Arc<Texture>;

/// Load state of a texture owned by the asset layer
///
/// Consumers poll [`TextureSlot::ready`] each frame; a failed load stays failed
/// until the asset layer supplies a texture with [`TextureSlot::set_ready`].
#[derive(Debug, Clone, Default)]
pub enum TextureSlot {
    #[default]
    Loading,
    Ready(TextureHandle),
    Failed(String),
}

impl TextureSlot {
    pub fn ready(&self) -> Option<&TextureHandle> {
        match self {
            TextureSlot::Ready(texture) => Some(texture),
            _ => None,
        }
    }

    pub fn set_ready(&mut self, texture: Texture) {
        *self = TextureSlot::Ready(Arc::new(texture));
    }

    /// Record a load failure, logging it once per transition
    pub fn set_failed(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        if !matches!(self, TextureSlot::Failed(previous) if *previous == reason) {
            log::warn!("texture unavailable: {reason}");
        }
        *self = TextureSlot::Failed(reason);
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, TextureSlot::Failed(_))
    }
}
