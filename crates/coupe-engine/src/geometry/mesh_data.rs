use super::Vertex;

/// Contiguous run of vertices inside one vertex buffer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct VertexRange {
    pub first: u32,
    pub count: u32,
}

impl VertexRange {
    pub const fn new(first: u32, count: u32) -> Self {
        Self { first, count }
    }

    pub const fn end(&self) -> u32 {
        self.first + self.count
    }

    /// Same start, half the vertices (rounded down).
    pub const fn halved(self) -> Self {
        Self { first: self.first, count: self.count / 2 }
    }
}

/// Region sizes of a mesh, laid out as `side | top | bottom` in the buffer.
///
/// Literal meshes put everything in `side` and leave the caps empty.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct VertexCounts {
    pub side: u32,
    pub top: u32,
    pub bottom: u32,
}

impl VertexCounts {
    pub const fn single(total: u32) -> Self {
        Self { side: total, top: 0, bottom: 0 }
    }

    pub const fn total(&self) -> u32 {
        self.side + self.top + self.bottom
    }

    pub const fn all(&self) -> VertexRange {
        VertexRange::new(0, self.total())
    }

    pub const fn side(&self) -> VertexRange {
        VertexRange::new(0, self.side)
    }

    pub const fn top(&self) -> VertexRange {
        VertexRange::new(self.side, self.top)
    }

    pub const fn bottom(&self) -> VertexRange {
        VertexRange::new(self.side + self.top, self.bottom)
    }
}

/// CPU-side mesh ready for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub counts: VertexCounts,
}

impl MeshData {
    /// Mesh drawn as a single region.
    pub fn single(vertices: Vec<Vertex>) -> Self {
        let counts = VertexCounts::single(vertices.len() as u32);
        Self { vertices, counts }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_are_laid_out_back_to_back() {
        let counts = VertexCounts { side: 10, top: 6, bottom: 6 };
        assert_eq!(counts.total(), 22);
        assert_eq!(counts.side(), VertexRange::new(0, 10));
        assert_eq!(counts.top(), VertexRange::new(10, 6));
        assert_eq!(counts.bottom(), VertexRange::new(16, 6));
        assert_eq!(counts.bottom().end(), counts.total());
    }

    #[test]
    fn halved_keeps_start() {
        let r = VertexRange::new(34, 33).halved();
        assert_eq!(r, VertexRange::new(34, 16));
    }
}
