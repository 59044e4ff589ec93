//! Entities: a display name plus an ordered list of owned components.

use std::fmt;

use crate::component::{Component, ComponentKind};

/// Caller-supplied identifier, unique within one scene.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Game object holding components in insertion order.
///
/// Components are add-only. Adding a second component of a kind already
/// present keeps both; the frame dispatcher uses the last one it sees.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Entity {
    name: String,
    components: Vec<Component>,
}

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), components: Vec::new() }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Names are not required to be unique.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Appends a component; the entity owns it from here on.
    pub fn add_component(&mut self, component: impl Into<Component>) -> &mut Self {
        let component = component.into();
        log::trace!("entity `{}`: add {}", self.name, component.kind());
        self.components.push(component);
        self
    }

    /// Builder form of [`add_component`](Self::add_component).
    pub fn with_component(mut self, component: impl Into<Component>) -> Self {
        self.add_component(component);
        self
    }

    /// Components in insertion order.
    #[inline]
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// In-place access for updating component data. The set itself cannot
    /// grow or shrink through this.
    #[inline]
    pub fn components_mut(&mut self) -> &mut [Component] {
        &mut self.components
    }

    #[inline]
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn has(&self, kind: ComponentKind) -> bool {
        self.components.iter().any(|c| c.kind() == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{BoxCollider, Physics, Transform};
    use crate::coords::Vec2;

    #[test]
    fn add_component_preserves_insertion_order() {
        let mut e = Entity::new("crate");
        e.add_component(Physics::default())
            .add_component(Transform::default())
            .add_component(BoxCollider::from_rect(Vec2::zero(), 4, 4));

        let kinds: Vec<_> = e.components().iter().map(Component::kind).collect();
        assert_eq!(
            kinds,
            [ComponentKind::Physics, ComponentKind::Transform, ComponentKind::BoxCollider]
        );
    }

    #[test]
    fn duplicate_kinds_are_kept() {
        let e = Entity::new("twin")
            .with_component(Transform::new(Vec2::new(1, 1)))
            .with_component(Transform::new(Vec2::new(2, 2)));
        assert_eq!(e.component_count(), 2);
        assert!(e.has(ComponentKind::Transform));
        assert!(!e.has(ComponentKind::Physics));
    }

    #[test]
    fn set_name_replaces_name() {
        let mut e = Entity::new("a");
        e.set_name("b");
        assert_eq!(e.name(), "b");
    }
}
