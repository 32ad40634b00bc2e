//! Component trait and lifecycle scope

use std::any::Any;

use crate::context::EngineContext;
use crate::scene::entity::Entity;

/// What a component can see while one of its lifecycle hooks runs.
///
/// The scope replaces both the stored entity back-reference and the global
/// service locator of a classic object hierarchy: sibling components are
/// reached through `entity`, engine services through `ctx`. It is rebuilt
/// for every call, so components store neither.
pub struct ComponentScope<'a> {
    /// The entity this component is attached to
    pub entity: &'a Entity,
    /// Engine services for the current tick
    pub ctx: &'a EngineContext,
}

/// A typed capability attached to an entity.
///
/// Components are constructed through [`Entity::attach`] and live exactly
/// as long as their entity. The lifecycle hooks are propagated by the
/// entity in attachment order and are not expected to fail; a component
/// that cannot uphold its contract should panic rather than limp on.
///
/// While a hook runs, the component is mutably borrowed out of its entity:
/// looking up a sibling of the *same* concrete type from inside a hook is
/// a contract violation and panics.
pub trait Component: Any {
    /// Called once when the owning entity is spawned
    fn start(&mut self, scope: &ComponentScope<'_>) {
        let _ = scope;
    }

    /// Called every tick
    fn update(&mut self, scope: &ComponentScope<'_>, dt: f32) {
        let _ = (scope, dt);
    }

    /// Called when the owning entity is torn down
    fn teardown(&mut self, scope: &ComponentScope<'_>) {
        let _ = scope;
    }

    /// Downcast support
    fn as_any(&self) -> &dyn Any;

    /// Downcast support, mutable
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Attach a component to an entity by its serialization token.
///
/// This is the boundary mechanism for data-driven entity authoring: a
/// scene file names components by token and this function maps tokens to
/// the typed [`Entity::attach`] call. Returns `false` for an unknown token
/// or when the entity already carries the component type.
pub fn attach_by_name(entity: &mut Entity, token: &str) -> bool {
    use crate::scene::components::{Renderer, Transform};

    match token {
        "Transform" => entity.attach::<Transform>().is_some(),
        "Renderer" => entity.attach::<Renderer>().is_some(),
        _ => {
            log::warn!("unknown component token '{token}'");
            false
        }
    }
}
