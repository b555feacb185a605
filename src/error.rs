//! Error types for cell map construction.

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Construction-time errors.
///
/// Queries never produce an `Error`; a miss is an `Option::None` or an
/// empty collection. Only malformed input at build time fails, and it
/// fails before any partially linked structure can be observed.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Parallel per-cell attribute arrays disagree in length
    #[error("attribute array `{name}` has {values} entries for {cells} cells")]
    AttributeLengthMismatch {
        /// Name of the offending array
        name: &'static str,
        /// Number of cells described by the source
        cells: usize,
        /// Number of values actually provided
        values: usize,
    },

    /// A source polygon has too few corners to enclose any area
    #[error("polygon {index} has {corners} corners, need at least 3")]
    DegeneratePolygon {
        /// Cell position in the source
        index: usize,
        /// Corner count provided
        corners: usize,
    },

    /// A cell's vertex run is too short (centroid plus at least 3 corners)
    #[error("cell {index} spans {vertex_count} vertices, need at least 4")]
    DegenerateCell {
        /// Cell position in the store
        index: usize,
        /// Vertex run length
        vertex_count: usize,
    },

    /// A cell's vertex run reaches past the end of the vertex buffer
    #[error("cell {index} vertex run ends at {end} but the buffer holds {len} vertices")]
    VertexRunOutOfBounds {
        /// Cell position in the store
        index: usize,
        /// One past the last vertex the run claims
        end: usize,
        /// Vertex buffer length
        len: usize,
    },

    /// A triangle index points past the end of the vertex buffer
    #[error("triangle index {value} out of range for {len} vertices")]
    TriangleIndexOutOfBounds {
        /// The offending index value
        value: u32,
        /// Vertex buffer length
        len: usize,
    },
}
