//! World assembly.
//!
//! Bridges externally produced cell geometry (one boundary polygon per
//! cell plus parallel attribute arrays) into a queryable [`CellStore`].
//! Parsing whatever file format the geometry came from is the caller's
//! business; this module only validates and lays out the data.

use egui::{pos2, vec2, Pos2, Vec2};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::cells::{Cell, CellStore, CellVertex};
use crate::error::{Error, Result};
use crate::geometry::polygon_centroid;

/// Layout parameters for assembling a world.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Extent of the map, used to derive texture coordinates
    pub size: Vec2,
    /// Scale applied to every incoming coordinate
    pub scale: Vec2,
    /// Target leaf size of the spatial index
    pub leaf_size: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            size: vec2(2000.0, 1000.0),
            scale: vec2(1.0, 1.0),
            leaf_size: 64.0,
        }
    }
}

/// Raw per-cell geometry and attributes handed over by the ingestion side.
///
/// `corners[i]`, `heights[i]` and `biomes[i]` describe cell `i`; the three
/// arrays must agree in length. Palettes and names are opaque payload kept
/// for the rendering side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldSource {
    /// Boundary polygon per cell, corners in consistent winding order
    pub corners: Vec<Vec<Pos2>>,
    /// Height value per cell
    pub heights: Vec<f32>,
    /// Biome value per cell
    pub biomes: Vec<f32>,
    /// Color ramp for height values
    pub height_colors: Vec<[f32; 3]>,
    /// Color per biome
    pub biome_colors: Vec<[f32; 3]>,
    /// Display name per biome
    pub biome_names: Vec<String>,
}

/// A fully assembled, queryable world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    size: Vec2,
    scale: Vec2,
    store: CellStore,
    height_colors: Vec<[f32; 3]>,
    biome_colors: Vec<[f32; 3]>,
    biome_names: Vec<String>,
}

impl World {
    /// Assemble a world from raw cell geometry.
    ///
    /// Every cell becomes a contiguous vertex run: the centroid (computed
    /// from the boundary polygon) followed by the scaled corners, with a
    /// triangle fan over the run for rendering. Malformed input fails
    /// before any structure is built; a half-linked world would corrupt
    /// every later query.
    pub fn build(config: WorldConfig, source: WorldSource) -> Result<World> {
        let cell_count = source.corners.len();
        if source.heights.len() != cell_count {
            return Err(Error::AttributeLengthMismatch {
                name: "heights",
                cells: cell_count,
                values: source.heights.len(),
            });
        }
        if source.biomes.len() != cell_count {
            return Err(Error::AttributeLengthMismatch {
                name: "biomes",
                cells: cell_count,
                values: source.biomes.len(),
            });
        }

        let total_vertices: usize = source.corners.iter().map(|c| c.len() + 1).sum();
        let mut vertices = Vec::with_capacity(total_vertices);
        let mut indices = Vec::new();
        let mut cells = Vec::with_capacity(cell_count);

        for (index, corners) in source.corners.iter().enumerate() {
            if corners.len() < 3 {
                return Err(Error::DegeneratePolygon {
                    index,
                    corners: corners.len(),
                });
            }

            let start = vertices.len() as u32;
            let attrs = [source.heights[index], source.biomes[index]];

            // centroid first, then the boundary ring
            vertices.push(build_vertex(polygon_centroid(corners), &config, attrs));
            for &corner in corners {
                vertices.push(build_vertex(corner, &config, attrs));
            }

            let count = vertices.len() as u32 - start;
            fan_indices(start, count, &mut indices);
            cells.push(Cell::new(start, count));
        }

        let store = CellStore::new(vertices, indices, cells, config.leaf_size)?;
        debug!(
            "world assembled: {} cells, {} vertices, {} triangles",
            cell_count,
            store.vertices().len(),
            store.indices().len() / 3
        );

        Ok(World {
            size: config.size,
            scale: config.scale,
            store,
            height_colors: source.height_colors,
            biome_colors: source.biome_colors,
            biome_names: source.biome_names,
        })
    }

    /// The cell store backing this world.
    pub fn cells(&self) -> &CellStore {
        &self.store
    }

    /// Mutable access, only useful for repainting vertex colors.
    pub fn cells_mut(&mut self) -> &mut CellStore {
        &mut self.store
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    pub fn height_colors(&self) -> &[[f32; 3]] {
        &self.height_colors
    }

    pub fn biome_colors(&self) -> &[[f32; 3]] {
        &self.biome_colors
    }

    pub fn biome_names(&self) -> &[String] {
        &self.biome_names
    }
}

fn build_vertex(p: Pos2, config: &WorldConfig, attrs: [f32; 2]) -> CellVertex {
    let position = pos2(p.x * config.scale.x, p.y * config.scale.y);
    CellVertex {
        position,
        color: [0.0, 0.0, 0.0, 1.0],
        uv: [position.x / config.size.x, position.y / config.size.y],
        attrs,
    }
}

/// Triangle fan around the centroid, closed back to the first corner.
fn fan_indices(start: u32, count: u32, indices: &mut Vec<u32>) {
    //    [start + (j - 1)]
    //          /  \
    //         /    \
    //        /      \
    // [start]--------[start + j]
    for j in 2..count {
        indices.push(start);
        indices.push(start + j);
        indices.push(start + j - 1);
    }
    indices.push(start);
    indices.push(start + 1);
    indices.push(start + count - 1);
}
