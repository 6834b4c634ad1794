use bevy::prelude::*;

/// A world-space ray going from the camera through the pointer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerRay {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl PointerRay {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self { origin, dir }
    }

    /// Builds the ray passing through `ndc` (normalized device coordinates, y up).
    ///
    /// The ray starts on the near plane. Bevy projections use a reversed depth
    /// range so the near plane sits at `z = 1` in NDC; the second point at
    /// `z = 0.5` stays finite even for infinite perspective projections.
    pub fn from_ndc(ndc: Vec2, camera_transform: &GlobalTransform, projection: Mat4) -> Option<Self> {
        let ndc_to_world = camera_transform.compute_matrix() * projection.inverse();
        let near = ndc_to_world.project_point3(ndc.extend(1.0));
        let far = ndc_to_world.project_point3(ndc.extend(0.5));
        let dir = (far - near).normalize_or_zero();

        if !near.is_finite() || dir == Vec3::ZERO {
            return None;
        }

        Some(Self::new(near, dir))
    }

    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }

    /// Intersects the ray with the plane `y = height`.
    ///
    /// Returns `None` if the ray runs parallel to the plane or points away from it.
    pub fn intersect_horizontal_plane(&self, height: f32) -> Option<Vec3> {
        if self.dir.y == 0.0 {
            return None;
        }

        let t = (height - self.origin.y) / self.dir.y;
        (t >= 0.0 && t.is_finite()).then(|| self.point_at(t))
    }
}

/// Converts a window cursor position (logical pixels, origin at the top-left corner)
/// to normalized device coordinates.
pub fn cursor_to_ndc(cursor: Vec2, window_size: Vec2) -> Option<Vec2> {
    if window_size.x <= 0.0 || window_size.y <= 0.0 {
        return None;
    }

    let unit = cursor / window_size;
    Some(Vec2::new(unit.x * 2.0 - 1.0, 1.0 - unit.y * 2.0))
}
