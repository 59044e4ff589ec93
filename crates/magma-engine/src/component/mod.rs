//! Component variants attachable to an entity.
//!
//! The set is closed: adding a variant means
//! - add a data module here
//! - add a variant to [`Component`] and [`ComponentKind`]
//! - add a slot and one match arm in `render::dispatch`
//!
//! The dispatcher's match is exhaustive, so a missing arm is a compile error.

mod collider;
mod physics;
mod transform;

use std::fmt;

pub use collider::{BoxCollider, CapsuleCollider, CapsuleOrientation, CircleCollider};
pub use physics::{Physics, STANDARD_GRAVITY};
pub use transform::Transform;

/// A typed data record owned by exactly one entity.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Transform(Transform),
    Physics(Physics),
    BoxCollider(BoxCollider),
    CircleCollider(CircleCollider),
    CapsuleCollider(CapsuleCollider),
}

impl Component {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::Transform(_) => ComponentKind::Transform,
            Component::Physics(_) => ComponentKind::Physics,
            Component::BoxCollider(_) => ComponentKind::BoxCollider,
            Component::CircleCollider(_) => ComponentKind::CircleCollider,
            Component::CapsuleCollider(_) => ComponentKind::CapsuleCollider,
        }
    }
}

/// Discriminant of a [`Component`], used in diagnostics and queries.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ComponentKind {
    Transform,
    Physics,
    BoxCollider,
    CircleCollider,
    CapsuleCollider,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComponentKind::Transform => "Transform",
            ComponentKind::Physics => "Physics",
            ComponentKind::BoxCollider => "BoxCollider",
            ComponentKind::CircleCollider => "CircleCollider",
            ComponentKind::CapsuleCollider => "CapsuleCollider",
        };
        f.write_str(name)
    }
}

impl From<Transform> for Component {
    fn from(v: Transform) -> Self {
        Component::Transform(v)
    }
}

impl From<Physics> for Component {
    fn from(v: Physics) -> Self {
        Component::Physics(v)
    }
}

impl From<BoxCollider> for Component {
    fn from(v: BoxCollider) -> Self {
        Component::BoxCollider(v)
    }
}

impl From<CircleCollider> for Component {
    fn from(v: CircleCollider) -> Self {
        Component::CircleCollider(v)
    }
}

impl From<CapsuleCollider> for Component {
    fn from(v: CapsuleCollider) -> Self {
        Component::CapsuleCollider(v)
    }
}
