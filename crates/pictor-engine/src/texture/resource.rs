use std::rc::Rc;

use crate::coords::Vec2;
use crate::error::{GeometryError, Result};

/// Opaque renderer-side texture identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct TextureId(pub u32);

/// Shared texture handle. Batches hold one of these; the resource manager
/// that created the texture owns the GPU side.
pub type TextureRef = Rc<Texture>;

/// Texture metadata consumed by geometry generation.
///
/// Only the id and the pixel dimensions matter here. Both dimensions are
/// non-zero by construction so texture-coordinate math can divide by them.
#[derive(Debug, PartialEq)]
pub struct Texture {
    id: TextureId,
    width: u32,
    height: u32,
    label: Option<String>,
}

impl Texture {
    /// Describes a loaded texture.
    ///
    /// Fails with [`GeometryError::EmptyTexture`] if either dimension is zero.
    pub fn new(id: TextureId, width: u32, height: u32) -> Result<TextureRef> {
        Self::describe(id, width, height).map(Rc::new)
    }

    /// Like [`new`](Self::new) but tagged with a debug label.
    pub fn labeled(
        id: TextureId,
        width: u32,
        height: u32,
        label: impl Into<String>,
    ) -> Result<TextureRef> {
        let mut tex = Self::describe(id, width, height)?;
        tex.label = Some(label.into());
        Ok(Rc::new(tex))
    }

    fn describe(id: TextureId, width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            log::warn!("rejecting zero-sized texture {:?} ({width}x{height})", id);
            return Err(GeometryError::EmptyTexture { width, height });
        }
        Ok(Self { id, width, height, label: None })
    }

    #[inline]
    pub fn id(&self) -> TextureId {
        self.id
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Dimensions in pixels as a vector.
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}
