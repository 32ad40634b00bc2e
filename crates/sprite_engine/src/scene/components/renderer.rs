//! Renderer component: a named collection of drawables

use std::any::Any;

use crate::foundation::math::{trs_matrix, Mat3, Vec2};
use crate::render::drawable::Drawable;
use crate::render::surface::DrawSurface;
use crate::scene::component::{Component, ComponentScope};
use crate::scene::components::Transform;

/// Stable identity of a drawable within one renderer.
///
/// Returned by [`Renderer::add_drawable`] and used to address the entry
/// afterwards; entries are never removed, so the handle stays valid for
/// the renderer's lifetime. Handles from one renderer mean nothing to
/// another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawableId(usize);

struct DrawableEntry {
    name: String,
    drawable: Box<dyn Drawable>,
    relative_position: Vec2,
    relative_rotation_deg: f32,
    relative_scale: Vec2,
    relative_transform: Mat3,
    has_relative_transform: bool,
}

impl DrawableEntry {
    fn new(name: String, drawable: Box<dyn Drawable>) -> Self {
        Self {
            name,
            drawable,
            relative_position: Vec2::zeros(),
            relative_rotation_deg: 0.0,
            relative_scale: Vec2::new(1.0, 1.0),
            relative_transform: Mat3::identity(),
            has_relative_transform: false,
        }
    }

    /// Rebuild the relative matrix from the pose fields.
    ///
    /// The `has_relative_transform` flag is derived from the pose values
    /// themselves, not from comparing the resulting matrix against
    /// identity: a pose of zero offset, zero rotation and unit scale is
    /// identity by construction, and pose comparison stays exact where
    /// trigonometric matrix entries would not.
    fn compute_relative_transform(&mut self) {
        self.relative_transform = trs_matrix(
            self.relative_position,
            self.relative_rotation_deg,
            self.relative_scale,
        );
        self.has_relative_transform = !Self::is_identity_pose(
            self.relative_position,
            self.relative_rotation_deg,
            self.relative_scale,
        );
    }

    fn is_identity_pose(position: Vec2, rotation_deg: f32, scale: Vec2) -> bool {
        position == Vec2::zeros() && rotation_deg == 0.0 && scale == Vec2::new(1.0, 1.0)
    }

    fn world_transform_from(&self, parent: &Mat3) -> Mat3 {
        if self.has_relative_transform {
            parent * self.relative_transform
        } else {
            *parent
        }
    }
}

/// Owner of an entity's drawables.
///
/// Each drawable is registered under a friendly name that is unique within
/// this renderer and carries an optional pose relative to the entity's
/// [`Transform`]. On start and on every tick the renderer recomputes each
/// drawable's world transform from the transform's matrix composed with
/// the relative matrix, then forwards the lifecycle call — updates are
/// skipped entirely for invisible drawables, and visibility is rechecked
/// every tick.
#[derive(Default)]
pub struct Renderer {
    entries: Vec<DrawableEntry>,
    started: bool,
}

impl Renderer {
    /// Add a drawable of type `D` under `name` with no relative pose.
    ///
    /// Returns `None` without mutating anything if `name` is already used
    /// in this renderer.
    pub fn add_drawable<D: Drawable + Default>(&mut self, name: &str) -> Option<DrawableId> {
        if self.entries.iter().any(|entry| entry.name == name) {
            return None;
        }
        self.entries
            .push(DrawableEntry::new(name.to_string(), Box::new(D::default())));
        Some(DrawableId(self.entries.len() - 1))
    }

    /// Add a drawable of type `D` under `name` at a pose relative to the
    /// entity's transform.
    ///
    /// An exact identity pose (zero offset, zero rotation, unit scale) is
    /// equivalent to [`Renderer::add_drawable`]: no relative matrix is
    /// stored and no extra multiply happens per tick.
    pub fn add_drawable_with_pose<D: Drawable + Default>(
        &mut self,
        name: &str,
        position: Vec2,
        rotation_deg: f32,
        scale: Vec2,
    ) -> Option<DrawableId> {
        if DrawableEntry::is_identity_pose(position, rotation_deg, scale) {
            return self.add_drawable::<D>(name);
        }

        if self.entries.iter().any(|entry| entry.name == name) {
            return None;
        }

        let mut entry = DrawableEntry::new(name.to_string(), Box::new(D::default()));
        entry.relative_position = position;
        entry.relative_rotation_deg = rotation_deg;
        entry.relative_scale = scale;
        entry.compute_relative_transform();
        self.entries.push(entry);
        Some(DrawableId(self.entries.len() - 1))
    }

    /// Borrow the drawable behind `id` as its concrete type `D`.
    ///
    /// Returns `None` when the entry's drawable is not a `D`.
    pub fn drawable<D: Drawable>(&self, id: DrawableId) -> Option<&D> {
        self.entries
            .get(id.0)?
            .drawable
            .as_any()
            .downcast_ref::<D>()
    }

    /// Mutably borrow the drawable behind `id` as its concrete type `D`.
    pub fn drawable_mut<D: Drawable>(&mut self, id: DrawableId) -> Option<&mut D> {
        self.entries
            .get_mut(id.0)?
            .drawable
            .as_any_mut()
            .downcast_mut::<D>()
    }

    /// Set the relative position of the entry behind `id` and recompute
    /// its relative matrix immediately. Unknown handles are ignored.
    pub fn set_drawable_relative_position(&mut self, id: DrawableId, position: Vec2) {
        if let Some(entry) = self.entries.get_mut(id.0) {
            entry.relative_position = position;
            entry.compute_relative_transform();
        }
    }

    /// Set the relative rotation (degrees) of the entry behind `id` and
    /// recompute its relative matrix immediately.
    pub fn set_drawable_relative_rotation(&mut self, id: DrawableId, rotation_deg: f32) {
        if let Some(entry) = self.entries.get_mut(id.0) {
            entry.relative_rotation_deg = rotation_deg;
            entry.compute_relative_transform();
        }
    }

    /// Set the relative scale of the entry behind `id` and recompute its
    /// relative matrix immediately.
    pub fn set_drawable_relative_scale(&mut self, id: DrawableId, scale: Vec2) {
        if let Some(entry) = self.entries.get_mut(id.0) {
            entry.relative_scale = scale;
            entry.compute_relative_transform();
        }
    }

    /// Number of registered drawables
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no drawables are registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Draw every visible drawable in attachment order at its
    /// last-computed world transform. Read-only; must not be called before
    /// the renderer has started.
    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        debug_assert!(self.started, "Renderer::draw called before start");
        for entry in &self.entries {
            if entry.drawable.is_visible() {
                entry.drawable.draw(surface);
            }
        }
    }

    fn parent_matrix(scope: &ComponentScope<'_>) -> Mat3 {
        *scope
            .entity
            .get::<Transform>()
            .expect("Renderer requires a Transform component on the same entity")
            .matrix()
    }
}

impl Component for Renderer {
    fn start(&mut self, scope: &ComponentScope<'_>) {
        let parent = Self::parent_matrix(scope);
        for entry in &mut self.entries {
            let world = entry.world_transform_from(&parent);
            entry.drawable.set_world_transform(world);
            entry.drawable.start(scope.ctx);
        }
        self.started = true;
    }

    fn update(&mut self, scope: &ComponentScope<'_>, dt: f32) {
        let parent = Self::parent_matrix(scope);
        for entry in &mut self.entries {
            if entry.drawable.is_visible() {
                let world = entry.world_transform_from(&parent);
                entry.drawable.set_world_transform(world);
                entry.drawable.update(scope.ctx, dt);
            }
        }
    }

    fn teardown(&mut self, scope: &ComponentScope<'_>) {
        for entry in &mut self.entries {
            entry.drawable.teardown(scope.ctx);
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
