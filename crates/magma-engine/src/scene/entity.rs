use crate::component::Component;
use crate::coords::Vec2;
use crate::entity::{Entity, EntityId};

use super::Registration;

/// An entity placed in a scene.
///
/// Lifecycle: created registered by [`Scene::spawn`](super::Scene::spawn)
/// after validation, deregistered unconditionally when dropped. There is no
/// way to re-register the same value.
#[derive(Debug)]
pub struct SceneEntity {
    entity: Entity,
    x: u32,
    y: u32,
    registration: Registration,
}

impl SceneEntity {
    pub(super) fn new(registration: Registration, x: u32, y: u32) -> Self {
        let entity = Entity::new(registration.id().as_str());
        Self { entity, x, y, registration }
    }

    #[inline]
    pub fn id(&self) -> &EntityId {
        self.registration.id()
    }

    #[inline]
    pub fn x(&self) -> u32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> u32 {
        self.y
    }

    /// Spawn coordinates.
    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// False once the owning scene has been dropped.
    pub fn is_registered(&self) -> bool {
        self.registration.is_attached()
    }

    #[inline]
    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    #[inline]
    pub fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    /// Shorthand for `entity_mut().add_component(..)`.
    pub fn add_component(&mut self, component: impl Into<Component>) -> &mut Self {
        self.entity.add_component(component);
        self
    }

    /// Ends the entity's lifetime, releasing its identifier.
    pub fn despawn(self) {
        log::debug!("entity `{}` despawned", self.id());
    }
}

#[cfg(test)]
mod tests {
    use crate::component::{ComponentKind, Transform};
    use crate::platform::HeadlessPlatform;
    use crate::scene::{Scene, SceneConfig};

    #[test]
    fn spawned_entity_is_named_after_its_id() {
        let mut p = HeadlessPlatform::new();
        let s = Scene::new(&mut p, SceneConfig::new("t", 10, 10)).unwrap();
        let mut e = s.spawn("coin", 3, 4).unwrap();

        assert_eq!(e.entity().name(), "coin");
        assert_eq!(e.position().x(), 3);
        assert_eq!(e.position().y(), 4);
        assert!(e.is_registered());

        e.add_component(Transform::default());
        assert!(e.entity().has(ComponentKind::Transform));
    }

    #[test]
    fn renaming_does_not_touch_registration() {
        let mut p = HeadlessPlatform::new();
        let s = Scene::new(&mut p, SceneConfig::new("t", 10, 10)).unwrap();
        let mut e = s.spawn("coin", 0, 0).unwrap();
        e.entity_mut().set_name("gold coin");

        assert_eq!(e.id().as_str(), "coin");
        assert_eq!(s.entity_ids(), [crate::entity::EntityId::from("coin")]);
    }
}
