//! Curve mapping sub-object owned by the RGB and vector curve nodes
//!
//! Each channel is an ordered list of control points. The mapping caches a
//! sampled lookup table per channel; editing points leaves the table stale
//! until [`CurveMapping::update`] is called.

use glam::Vec2;

use crate::constants::curve::{HANDLE_TYPES, MIN_POINTS, TABLE_SIZE};
use crate::error::{GraphError, GraphResult};

/// Control point on a channel curve
#[derive(Debug, Clone, PartialEq)]
pub struct CurveMapPoint {
    pub location: Vec2,
    pub handle_type: String,
}

impl CurveMapPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            location: Vec2::new(x, y),
            handle_type: "AUTO".to_string(),
        }
    }

    pub fn set_handle_type(&mut self, handle_type: &str) -> GraphResult<()> {
        if !HANDLE_TYPES.contains(&handle_type) {
            return Err(GraphError::SubObject(format!(
                "Unknown curve handle type '{}'",
                handle_type
            )));
        }
        self.handle_type = handle_type.to_string();
        Ok(())
    }
}

/// One channel of a curve mapping
#[derive(Debug, Clone, PartialEq)]
pub struct CurveMap {
    points: Vec<CurveMapPoint>,
}

impl CurveMap {
    /// Straight diagonal from `min` to `max`
    pub fn diagonal(min: f32, max: f32) -> Self {
        Self {
            points: vec![CurveMapPoint::new(min, min), CurveMapPoint::new(max, max)],
        }
    }

    pub fn points(&self) -> &[CurveMapPoint] {
        &self.points
    }

    pub fn points_mut(&mut self) -> &mut [CurveMapPoint] {
        &mut self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Insert a point, keeping points ordered along x
    pub fn new_point(&mut self, x: f32, y: f32) -> usize {
        let index = self
            .points
            .iter()
            .position(|p| p.location.x > x)
            .unwrap_or(self.points.len());
        self.points.insert(index, CurveMapPoint::new(x, y));
        index
    }

    /// Remove the point at `index`; a curve keeps at least two points
    pub fn remove_point(&mut self, index: usize) -> GraphResult<()> {
        if self.points.len() <= MIN_POINTS {
            return Err(GraphError::SubObject(
                "Unable to remove curve point, a curve needs at least two".to_string(),
            ));
        }
        if index >= self.points.len() {
            return Err(GraphError::SubObject(format!(
                "Curve point {} does not exist",
                index
            )));
        }
        self.points.remove(index);
        Ok(())
    }

    /// Piecewise-linear value at `x`, held constant past the end points
    fn sample(&self, x: f32) -> f32 {
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            return x;
        };
        if x <= first.location.x {
            return first.location.y;
        }
        if x >= last.location.x {
            return last.location.y;
        }
        for pair in self.points.windows(2) {
            let (a, b) = (pair[0].location, pair[1].location);
            if x <= b.x {
                let span = b.x - a.x;
                if span <= f32::EPSILON {
                    return b.y;
                }
                return a.y + (b.y - a.y) * (x - a.x) / span;
            }
        }
        last.location.y
    }
}

/// Per-channel curves plus clipping rectangle and baked lookup tables
#[derive(Debug, Clone, PartialEq)]
pub struct CurveMapping {
    pub clip_min_x: f32,
    pub clip_min_y: f32,
    pub clip_max_x: f32,
    pub clip_max_y: f32,
    pub use_clip: bool,
    pub curves: Vec<CurveMap>,
    table: Vec<Vec<f32>>,
}

impl CurveMapping {
    /// Mapping with `channels` diagonal curves spanning `[min, max]`
    pub fn new(channels: usize, min: f32, max: f32) -> Self {
        let mut mapping = Self {
            clip_min_x: min,
            clip_min_y: min,
            clip_max_x: max,
            clip_max_y: max,
            use_clip: true,
            curves: (0..channels).map(|_| CurveMap::diagonal(min, max)).collect(),
            table: Vec::new(),
        };
        mapping.update();
        mapping
    }

    /// C, R, G, B channels over the unit square
    pub fn rgb() -> Self {
        Self::new(4, 0.0, 1.0)
    }

    /// X, Y, Z channels over `[-1, 1]`
    pub fn vector() -> Self {
        Self::new(3, -1.0, 1.0)
    }

    /// Re-sort and clip the points, then rebake the lookup tables
    pub fn update(&mut self) {
        let (min, max) = (
            Vec2::new(self.clip_min_x, self.clip_min_y),
            Vec2::new(self.clip_max_x, self.clip_max_y),
        );
        for curve in &mut self.curves {
            if self.use_clip {
                for point in &mut curve.points {
                    point.location = point.location.clamp(min, max);
                }
            }
            curve
                .points
                .sort_by(|a, b| a.location.x.total_cmp(&b.location.x));
        }

        let span = self.clip_max_x - self.clip_min_x;
        self.table = self
            .curves
            .iter()
            .map(|curve| {
                (0..=TABLE_SIZE)
                    .map(|i| curve.sample(self.clip_min_x + span * i as f32 / TABLE_SIZE as f32))
                    .collect()
            })
            .collect();
    }

    /// Look up `x` in the baked table of `channel`
    pub fn evaluate(&self, channel: usize, x: f32) -> Option<f32> {
        let table = self.table.get(channel)?;
        let span = self.clip_max_x - self.clip_min_x;
        if span <= f32::EPSILON || table.is_empty() {
            return table.first().copied();
        }
        let fac = ((x - self.clip_min_x) / span).clamp(0.0, 1.0) * TABLE_SIZE as f32;
        let lower = fac.floor() as usize;
        let upper = (lower + 1).min(TABLE_SIZE);
        let t = fac - lower as f32;
        Some(table[lower] + (table[upper] - table[lower]) * t)
    }
}
