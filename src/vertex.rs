//! Exports [`VertexData`].
use crate::error::EngineError;

/// Floats per vertex: x, y, z.
pub const COMPONENTS: usize = 3;

/// A flat list of vertex positions, always whole xyz triples.
#[derive(Clone, Debug, PartialEq)]
pub struct VertexData {
    inner: Vec<f32>,
}

impl VertexData {
    /// # Errors
    /// Errors if `floats.len()` is not a multiple of [`COMPONENTS`].
    pub fn new(floats: Vec<f32>) -> Result<Self, EngineError> {
        if floats.len() % COMPONENTS != 0 {
            return Err(EngineError::InvalidVertexData { len: floats.len() });
        }
        Ok(Self { inner: floats })
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.inner
    }

    /// Number of vertices, as passed to `glDrawArrays`.
    pub fn gl_len(&self) -> i32 {
        i32::try_from(self.inner.len() / COMPONENTS).unwrap_or(i32::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
