//! Scene registry: owns entities and drives their lifecycle

use crate::context::EngineContext;
use crate::render::surface::DrawSurface;
use crate::scene::entity::Entity;

/// Top-level owner of every spawned entity.
///
/// The manager drives the per-tick sequencing for all entities it owns:
/// `update` walks them in spawn order, `draw` is a separate read-only walk
/// issuing draw calls, and `teardown` runs every component's teardown hook
/// before the entities are dropped.
///
/// `teardown` must run while the [`EngineContext`] is still alive — the
/// hooks release texture references into it. Dropping the context first
/// leaves the reference counts unbalanced, which the texture manager
/// reports at its own teardown.
#[derive(Default)]
pub struct SceneManager {
    entities: Vec<Entity>,
}

impl SceneManager {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of an entity and start it immediately.
    ///
    /// Returns the entity's index, valid for the scene's lifetime.
    pub fn spawn(&mut self, entity: Entity, ctx: &EngineContext) -> usize {
        let index = self.entities.len();
        self.entities.push(entity);
        self.entities[index].start(ctx);
        index
    }

    /// Borrow a spawned entity by index
    pub fn entity(&self, index: usize) -> Option<&Entity> {
        self.entities.get(index)
    }

    /// Mutably borrow a spawned entity by index
    pub fn entity_mut(&mut self, index: usize) -> Option<&mut Entity> {
        self.entities.get_mut(index)
    }

    /// Update every entity in spawn order.
    pub fn update(&self, ctx: &EngineContext, dt: f32) {
        for entity in &self.entities {
            entity.update(ctx, dt);
        }
    }

    /// Issue draw calls for every entity in spawn order.
    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        for entity in &self.entities {
            entity.draw(surface);
        }
    }

    /// Tear down and drop every entity.
    pub fn teardown(&mut self, ctx: &EngineContext) {
        for entity in &self.entities {
            entity.teardown(ctx);
        }
        self.entities.clear();
    }

    /// Number of spawned entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the scene has no entities
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
