//! Mesh source contract: an asset is consumed as an ordered list of vertex positions.

use glam::Vec3;
use std::io::Cursor;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeshError {
    #[error("fetch failed: {0}")]
    Fetch(String),
    #[error("parse failed: {0}")]
    Parse(String),
    #[error("mesh has no vertices")]
    Empty,
}

/// Read the `v` records of a Wavefront OBJ file.
pub fn parse_obj_vertices(bytes: &[u8]) -> Result<Vec<Vec3>, MeshError> {
    let data = obj::ObjData::load_buf(Cursor::new(bytes))
        .map_err(|e| MeshError::Parse(e.to_string()))?;
    if data.position.is_empty() {
        return Err(MeshError::Empty);
    }
    Ok(data.position.into_iter().map(Vec3::from_array).collect())
}
