/// Standard gravity in m/s².
pub const STANDARD_GRAVITY: f32 = 9.81;

/// Physical properties of an entity.
///
/// Units: `gravity` is an acceleration in m/s² (positive pulls towards +Y),
/// `mass` is in kilograms. No simulation consumes these yet.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Physics {
    gravity: f32,
    mass: f32,
}

impl Physics {
    pub const fn new(mass: f32) -> Self {
        Self { gravity: STANDARD_GRAVITY, mass }
    }

    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    #[inline]
    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        self.gravity = gravity;
    }

    pub fn set_mass(&mut self, mass: f32) {
        self.mass = mass;
    }

    /// Weight force in newtons.
    #[inline]
    pub fn weight(&self) -> f32 {
        self.mass * self.gravity
    }
}

impl Default for Physics {
    fn default() -> Self {
        Self::new(1.0)
    }
}
