use glow::HasContext;

use super::error::GfxError;

/// Vertex positions plus an optional index list, validated on construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    positions: Vec<[f32; 3]>,
    indices: Option<Vec<u32>>,
}

impl Geometry {
    /// Non-indexed triangles; every three positions form one triangle.
    pub fn new(positions: Vec<[f32; 3]>) -> Result<Self, GfxError> {
        if positions.is_empty() {
            return Err(GfxError::EmptyGeometry);
        }
        Ok(Self {
            positions,
            indices: None,
        })
    }

    /// Indexed triangles. Every index must address an existing position.
    pub fn indexed(positions: Vec<[f32; 3]>, indices: Vec<u32>) -> Result<Self, GfxError> {
        if positions.is_empty() || indices.is_empty() {
            return Err(GfxError::EmptyGeometry);
        }

        let vertices = positions.len();
        if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertices) {
            return Err(GfxError::IndexOutOfRange { index, vertices });
        }

        Ok(Self {
            positions,
            indices: Some(indices),
        })
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn indices(&self) -> Option<&[u32]> {
        self.indices.as_deref()
    }

    /// Number of vertices one draw call consumes.
    pub fn draw_count(&self) -> usize {
        match &self.indices {
            Some(indices) => indices.len(),
            None => self.positions.len(),
        }
    }

    fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    fn index_bytes(&self) -> Option<&[u8]> {
        self.indices.as_deref().map(bytemuck::cast_slice)
    }
}

/// Geometry uploaded to the GPU: one VAO, a position VBO and an optional EBO.
///
/// Attribute 0 is a `vec3` position. Free with [`Mesh::delete`] while the
/// context is alive.
#[derive(Debug, Copy, Clone)]
pub struct Mesh {
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    ebo: Option<glow::Buffer>,
    count: i32,
}

impl Mesh {
    pub const POSITION_LOCATION: u32 = 0;

    pub fn upload(gl: &glow::Context, geometry: &Geometry) -> Result<Self, GfxError> {
        let count = i32::try_from(geometry.draw_count()).map_err(|_| GfxError::Allocation {
            what: "mesh",
            reason: format!("{} vertices exceed a single draw call", geometry.draw_count()),
        })?;

        unsafe {
            let vao = gl.create_vertex_array().map_err(|reason| GfxError::Allocation {
                what: "vertex array",
                reason,
            })?;
            let vbo = match gl.create_buffer() {
                Ok(vbo) => vbo,
                Err(reason) => {
                    gl.delete_vertex_array(vao);
                    return Err(GfxError::Allocation { what: "vertex buffer", reason });
                }
            };

            gl.bind_vertex_array(Some(vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, geometry.vertex_bytes(), glow::STATIC_DRAW);

            let ebo = match geometry.index_bytes() {
                Some(bytes) => match gl.create_buffer() {
                    Ok(ebo) => {
                        gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ebo));
                        gl.buffer_data_u8_slice(glow::ELEMENT_ARRAY_BUFFER, bytes, glow::STATIC_DRAW);
                        Some(ebo)
                    }
                    Err(reason) => {
                        gl.bind_vertex_array(None);
                        gl.delete_buffer(vbo);
                        gl.delete_vertex_array(vao);
                        return Err(GfxError::Allocation { what: "index buffer", reason });
                    }
                },
                None => None,
            };

            let stride = std::mem::size_of::<[f32; 3]>() as i32;
            gl.vertex_attrib_pointer_f32(Self::POSITION_LOCATION, 3, glow::FLOAT, false, stride, 0);
            gl.enable_vertex_attrib_array(Self::POSITION_LOCATION);

            // The EBO binding is VAO state; only the array buffer may be unbound first.
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_vertex_array(None);

            log::debug!(
                "uploaded mesh: {} vertices, {}",
                geometry.positions().len(),
                if ebo.is_some() { "indexed" } else { "non-indexed" }
            );

            Ok(Self { vao, vbo, ebo, count })
        }
    }

    pub fn is_indexed(&self) -> bool {
        self.ebo.is_some()
    }

    /// Draws the mesh as triangles with whatever program is bound.
    pub fn draw(&self, gl: &glow::Context) {
        unsafe {
            gl.bind_vertex_array(Some(self.vao));
            if self.is_indexed() {
                gl.draw_elements(glow::TRIANGLES, self.count, glow::UNSIGNED_INT, 0);
            } else {
                gl.draw_arrays(glow::TRIANGLES, 0, self.count);
            }
        }
    }

    pub fn delete(self, gl: &glow::Context) {
        unsafe {
            gl.delete_vertex_array(self.vao);
            gl.delete_buffer(self.vbo);
            if let Some(ebo) = self.ebo {
                gl.delete_buffer(ebo);
            }
        }
    }
}
