//! Per-frame component classification.
//!
//! The working slots are shared across the whole render cache, not kept per
//! entity: colliders and physics of different entities end up in one set and
//! the last component of each kind wins.

use crate::component::{
    BoxCollider, CapsuleCollider, CircleCollider, Component, Physics, Transform,
};
use crate::entity::Entity;

/// At most one component of each kind, extracted from a render cache.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameSlots {
    pub transform: Option<Transform>,
    pub physics: Option<Physics>,
    pub box_collider: Option<BoxCollider>,
    pub circle_collider: Option<CircleCollider>,
    pub capsule_collider: Option<CapsuleCollider>,
}

impl FrameSlots {
    /// Overwrites the slot matching `component`'s kind.
    pub fn absorb(&mut self, component: &Component) {
        match component {
            Component::Transform(t) => self.transform = Some(*t),
            Component::Physics(p) => self.physics = Some(*p),
            Component::BoxCollider(b) => self.box_collider = Some(*b),
            Component::CircleCollider(c) => self.circle_collider = Some(*c),
            Component::CapsuleCollider(c) => self.capsule_collider = Some(*c),
        }
    }

    /// A frame can only be drawn once some entity supplied a Transform.
    #[inline]
    pub fn has_transform(&self) -> bool {
        self.transform.is_some()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Walks `cache` in order, then each entity's components in order, and fills
/// a fresh set of slots. Later components overwrite earlier ones.
pub fn classify(cache: &[Entity]) -> FrameSlots {
    let mut slots = FrameSlots::default();
    for entity in cache {
        for component in entity.components() {
            slots.absorb(component);
        }
    }
    log::trace!("classified {} entities: {slots:?}", cache.len());
    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;

    fn at(x: u32, y: u32) -> Transform {
        Transform::new(Vec2::new(x, y))
    }

    // ── classification ────────────────────────────────────────────────────

    #[test]
    fn empty_cache_yields_empty_slots() {
        let slots = classify(&[]);
        assert!(slots.is_empty());
        assert!(!slots.has_transform());
    }

    #[test]
    fn transform_and_collider_from_different_entities() {
        let collider = BoxCollider::from_rect(Vec2::new(0, 0), 8, 8);
        let t2 = at(5, 6);
        let e1 = Entity::new("e1").with_component(collider);
        let e2 = Entity::new("e2").with_component(t2);

        let forward = classify(&[e1.clone(), e2.clone()]);
        assert_eq!(forward.transform, Some(t2));
        assert_eq!(forward.box_collider, Some(collider));

        let reversed = classify(&[e2, e1]);
        assert_eq!(reversed, forward);
    }

    #[test]
    fn last_transform_in_cache_wins() {
        let cache = [
            Entity::new("first").with_component(at(1, 1)),
            Entity::new("second").with_component(at(2, 2)),
        ];
        assert_eq!(classify(&cache).transform, Some(at(2, 2)));
    }

    #[test]
    fn duplicate_kind_within_one_entity_is_last_wins() {
        let e = Entity::new("twice")
            .with_component(Physics::new(1.0))
            .with_component(Physics::new(3.0));
        assert_eq!(e.component_count(), 2);
        assert_eq!(classify(&[e]).physics, Some(Physics::new(3.0)));
    }

    #[test]
    fn every_kind_gets_its_own_slot() {
        let e = Entity::new("full")
            .with_component(at(0, 0))
            .with_component(Physics::default())
            .with_component(BoxCollider::default())
            .with_component(CircleCollider::new(4.0))
            .with_component(CapsuleCollider::default());
        let slots = classify(&[e]);
        assert!(slots.transform.is_some());
        assert!(slots.physics.is_some());
        assert!(slots.box_collider.is_some());
        assert_eq!(slots.circle_collider, Some(CircleCollider::new(4.0)));
        assert!(slots.capsule_collider.is_some());
    }

    // ── known defects ─────────────────────────────────────────────────────

    // Slots are per cache, not per entity: a collider from an entity without
    // a Transform is drawn relative to another entity's Transform.
    #[test]
    fn known_defect_slots_conflate_entities() {
        let orphan = BoxCollider::from_rect(Vec2::new(0, 0), 3, 3);
        let cache = [
            Entity::new("has-transform").with_component(at(10, 10)),
            Entity::new("collider-only").with_component(orphan),
        ];
        let slots = classify(&cache);
        assert_eq!(slots.transform, Some(at(10, 10)));
        assert_eq!(slots.box_collider, Some(orphan));
    }

    #[test]
    fn classification_starts_fresh_each_call() {
        let cache = [Entity::new("p").with_component(Physics::default())];
        let _ = classify(&[Entity::new("t").with_component(at(1, 1))]);
        assert!(!classify(&cache).has_transform());
    }
}
