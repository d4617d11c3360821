use crate::{
    math::{Point4, Vec4},
    shapes::Surface,
};

/// Info of a surface hit
#[derive(Copy, Clone, Debug)]
pub struct Hit<'a> {
    /// World position
    pub p: Point4<f32>,
    /// Unit surface normal
    pub n: Vec4<f32>,
    /// Distance from the ray origin
    pub dist: f32,
    /// The surface that was hit
    pub surface: &'a Surface,
}

/// Hits collected for a single ray.
#[derive(Default)]
pub struct HitList<'a> {
    hits: Vec<Hit<'a>>,
}

impl<'a> HitList<'a> {
    pub fn new() -> Self {
        Self { hits: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            hits: Vec::with_capacity(capacity),
        }
    }

    pub fn add(&mut self, hit: Hit<'a>) {
        self.hits.push(hit);
    }

    pub fn clear(&mut self) {
        self.hits.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// Returns the hit closest to the ray origin. The first one added wins ties.
    ///
    /// # Panics
    /// If the list is empty. Check [`HitList::is_empty`] first.
    pub fn nearest(&self) -> &Hit<'a> {
        assert!(!self.hits.is_empty(), "No nearest hit in an empty HitList");

        let mut nearest = &self.hits[0];
        for hit in &self.hits[1..] {
            if hit.dist < nearest.dist {
                nearest = hit;
            }
        }
        nearest
    }

    /// Consuming version of [`HitList::nearest`].
    ///
    /// # Panics
    /// If the list is empty.
    pub fn into_nearest(self) -> Hit<'a> {
        *self.nearest()
    }
}
