//! Entity: an ordered, type-unique set of components

use std::any::TypeId;
use std::cell::{Ref, RefCell, RefMut};
use std::collections::HashMap;

use crate::context::EngineContext;
use crate::render::surface::DrawSurface;
use crate::scene::component::{Component, ComponentScope};
use crate::scene::components::Renderer;

struct ComponentSlot {
    type_id: TypeId,
    cell: RefCell<Box<dyn Component>>,
}

/// A gameplay object: a friendly name plus an ordered collection of
/// components in which each concrete component type appears at most once.
///
/// The entity exclusively owns its components. Lookup is by concrete type,
/// using the type's compile-time [`TypeId`] as the stable per-type
/// identifier; the attachment order of components is preserved and drives
/// the order of every lifecycle propagation.
///
/// Components live in [`RefCell`]s so that a component being updated can
/// read its siblings (the renderer reading the transform's matrix, for
/// instance). The engine is single-threaded, so the borrow flag is the
/// only guard needed.
#[derive(Default)]
pub struct Entity {
    name: String,
    components: Vec<ComponentSlot>,
    index: HashMap<TypeId, usize>,
}

impl Entity {
    /// Create an entity with a friendly name. Names are labels for debug
    /// output and need not be unique.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            components: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// The entity's friendly name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Construct and attach a component of type `T`.
    ///
    /// Returns a reference to the freshly attached component for further
    /// configuration, or `None` if the entity already carries a `T` — the
    /// existing component is left untouched.
    pub fn attach<T: Component + Default>(&mut self) -> Option<&mut T> {
        let type_id = TypeId::of::<T>();
        if self.index.contains_key(&type_id) {
            return None;
        }

        self.index.insert(type_id, self.components.len());
        self.components.push(ComponentSlot {
            type_id,
            cell: RefCell::new(Box::new(T::default())),
        });

        let slot = self.components.last_mut().expect("component just pushed");
        slot.cell.get_mut().as_any_mut().downcast_mut::<T>()
    }

    /// Borrow the component of type `T`, or `None` if absent.
    ///
    /// # Panics
    ///
    /// Panics if the component is currently mutably borrowed, i.e. when a
    /// component looks up its own type from inside one of its hooks.
    pub fn get<T: Component>(&self) -> Option<Ref<'_, T>> {
        let slot = self.slot(TypeId::of::<T>())?;
        Some(Ref::map(slot.cell.borrow(), |component| {
            component
                .as_any()
                .downcast_ref::<T>()
                .expect("component slot holds a different type")
        }))
    }

    /// Mutably borrow the component of type `T`, or `None` if absent.
    ///
    /// # Panics
    ///
    /// Panics if the component is currently borrowed, like
    /// [`Entity::get`].
    pub fn get_mut<T: Component>(&self) -> Option<RefMut<'_, T>> {
        let slot = self.slot(TypeId::of::<T>())?;
        Some(RefMut::map(slot.cell.borrow_mut(), |component| {
            component
                .as_any_mut()
                .downcast_mut::<T>()
                .expect("component slot holds a different type")
        }))
    }

    /// Whether a component of type `T` is attached
    pub fn has<T: Component>(&self) -> bool {
        self.index.contains_key(&TypeId::of::<T>())
    }

    /// Number of attached components
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Start every component in attachment order.
    pub fn start(&self, ctx: &EngineContext) {
        let scope = ComponentScope { entity: self, ctx };
        for slot in &self.components {
            slot.cell.borrow_mut().start(&scope);
        }
    }

    /// Update every component in attachment order.
    pub fn update(&self, ctx: &EngineContext, dt: f32) {
        let scope = ComponentScope { entity: self, ctx };
        for slot in &self.components {
            slot.cell.borrow_mut().update(&scope, dt);
        }
    }

    /// Tear down every component in attachment order.
    pub fn teardown(&self, ctx: &EngineContext) {
        let scope = ComponentScope { entity: self, ctx };
        for slot in &self.components {
            slot.cell.borrow_mut().teardown(&scope);
        }
    }

    /// Draw the entity by delegating to its renderer component, if any.
    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        if let Some(renderer) = self.get::<Renderer>() {
            renderer.draw(surface);
        }
    }

    fn slot(&self, type_id: TypeId) -> Option<&ComponentSlot> {
        let index = *self.index.get(&type_id)?;
        let slot = &self.components[index];
        debug_assert_eq!(slot.type_id, type_id);
        Some(slot)
    }
}
