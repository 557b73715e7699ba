use serde::{Deserialize, Serialize};

/// World-space location. `y` is the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Location {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Horizontal distance, ignoring vertical separation.
    pub fn distance_2d(&self, other: &Location) -> f32 {
        let dx = self.x - other.x;
        let dz = self.z - other.z;
        (dx * dx + dz * dz).sqrt()
    }

    pub fn distance(&self, other: &Location) -> f32 {
        let dy = self.y - other.y;
        let flat = self.distance_2d(other);
        (flat * flat + dy * dy).sqrt()
    }

    /// Moves at most `max_step` towards `target`. Returns the target itself
    /// when it is already within reach.
    pub fn step_towards(&self, target: &Location, max_step: f32) -> Location {
        let remaining = self.distance(target);
        if remaining <= max_step || remaining == 0.0 {
            return *target;
        }
        let ratio = max_step / remaining;
        Location {
            x: self.x + (target.x - self.x) * ratio,
            y: self.y + (target.y - self.y) * ratio,
            z: self.z + (target.z - self.z) * ratio,
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{:.2}, {:.2}, {:.2}>", self.x, self.y, self.z)
    }
}
