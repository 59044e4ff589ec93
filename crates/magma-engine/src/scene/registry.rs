use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::entity::EntityId;

/// Ordered list of live entity identifiers.
///
/// `add` performs no uniqueness check; callers validate first.
#[derive(Debug, Default)]
pub(crate) struct Registry {
    ids: Vec<EntityId>,
}

impl Registry {
    pub(crate) fn add(&mut self, id: EntityId) {
        self.ids.push(id);
    }

    /// Removes the first matching identifier. No-op if absent.
    pub(crate) fn remove(&mut self, id: &EntityId) -> bool {
        match self.ids.iter().position(|x| x == id) {
            Some(i) => {
                self.ids.remove(i);
                true
            }
            None => false,
        }
    }

    pub(crate) fn contains(&self, id: &EntityId) -> bool {
        self.ids.contains(id)
    }

    pub(crate) fn ids(&self) -> &[EntityId] {
        &self.ids
    }
}

pub(crate) type SharedRegistry = Rc<RefCell<Registry>>;

/// Scoped registration of one identifier in a scene.
///
/// Dropping the handle removes the identifier. The handle holds a weak
/// reference: it never keeps the scene's registry alive, and if the scene is
/// gone there is nothing left to deregister.
#[derive(Debug)]
pub struct Registration {
    id: EntityId,
    registry: Weak<RefCell<Registry>>,
}

impl Registration {
    /// Adds `id` to `registry` and returns the handle owning that entry.
    pub(crate) fn register(registry: &SharedRegistry, id: EntityId) -> Self {
        registry.borrow_mut().add(id.clone());
        Self { id, registry: Rc::downgrade(registry) }
    }

    #[inline]
    pub fn id(&self) -> &EntityId {
        &self.id
    }

    /// Whether the owning scene still exists.
    pub fn is_attached(&self) -> bool {
        self.registry.strong_count() > 0
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            log::trace!("entity `{}` outlived its scene", self.id);
            return;
        };
        if registry.borrow_mut().remove(&self.id) {
            log::debug!("entity `{}` deregistered", self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> EntityId {
        EntityId::from(s)
    }

    #[test]
    fn remove_takes_first_match_only() {
        let mut r = Registry::default();
        r.add(id("a"));
        r.add(id("b"));
        r.add(id("a"));
        assert!(r.remove(&id("a")));
        assert_eq!(r.ids(), [id("b"), id("a")]);
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut r = Registry::default();
        r.add(id("a"));
        assert!(!r.remove(&id("zzz")));
        assert_eq!(r.ids(), [id("a")]);
    }

    #[test]
    fn registration_drop_deregisters() {
        let shared = SharedRegistry::default();
        let handle = Registration::register(&shared, id("hero"));
        assert!(shared.borrow().contains(&id("hero")));
        assert!(handle.is_attached());

        drop(handle);
        assert!(shared.borrow().ids().is_empty());
    }

    #[test]
    fn registration_outliving_registry_is_harmless() {
        let shared = SharedRegistry::default();
        let handle = Registration::register(&shared, id("ghost"));
        drop(shared);
        assert!(!handle.is_attached());
        drop(handle);
    }
}
