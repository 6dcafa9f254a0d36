// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene host abstraction and in-memory mesh scene
//!
//! The planner emits placement instructions; executing them is the
//! materializer's job. [`SceneHost`] is the narrow contract the
//! materializer needs from a host: duplicate a template, transform the
//! copy, drop the template, join everything. [`MeshScene`] is the
//! in-memory implementation whose joined result persists as a Wavefront
//! scene. The scene is an explicit value threaded through the pipeline;
//! there is no process-wide "current scene" state.

use crate::types::TemplateId;
use nalgebra::Vector3;
use panelforge_geometry::transform::{apply_transform, rotation_about_z, translation};
use panelforge_geometry::wavefront::{write_mtl, write_obj};
use panelforge_geometry::{BumpCellularMaterial, Mesh};
use rustc_hash::FxHashMap;
use std::path::Path;

/// Opaque handle to an object placed in a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(pub u32);

/// Narrow contract over a scene host's object primitives.
pub trait SceneHost {
    /// Duplicate a template into an independent object.
    fn duplicate(&mut self, template: TemplateId) -> ObjectId;

    /// Rotate an object about the vertical axis.
    fn rotate_z(&mut self, object: ObjectId, radians: f64);

    /// Translate an object.
    fn translate(&mut self, object: ObjectId, offset: &Vector3<f64>);

    /// Remove a template from the scene once stamping is done.
    fn delete_template(&mut self, template: TemplateId);

    /// Join all placed objects into a single object.
    fn join_all(&mut self);
}

/// In-memory scene of mesh objects.
#[derive(Debug, Default)]
pub struct MeshScene {
    templates: FxHashMap<TemplateId, Mesh>,
    material: Option<BumpCellularMaterial>,
    objects: Vec<(ObjectId, Mesh)>,
    next_template: u32,
    next_object: u32,
}

impl MeshScene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a panel template and attach its surface material so every
    /// stamped copy inherits it.
    pub fn import_template(
        &mut self,
        mesh: Mesh,
        material: BumpCellularMaterial,
    ) -> TemplateId {
        let id = TemplateId(self.next_template);
        self.next_template += 1;
        self.templates.insert(id, mesh);
        self.material = Some(material);
        id
    }

    /// Number of objects currently placed.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// All placed objects merged into one mesh.
    pub fn combined_mesh(&self) -> Mesh {
        let mut combined = Mesh::new();
        for (_, mesh) in &self.objects {
            combined.merge(mesh);
        }
        combined
    }

    /// Consume the scene, returning its joined mesh.
    pub fn into_mesh(self) -> Mesh {
        self.combined_mesh()
    }

    /// Persist the scene as a Wavefront OBJ plus MTL sidecar.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> panelforge_geometry::Result<()> {
        let path = path.as_ref();
        let combined = self.combined_mesh();

        write_obj(path, &combined, "structure", self.material.as_ref())?;
        if let Some(material) = &self.material {
            write_mtl(path.with_extension("mtl"), material)?;
        }
        Ok(())
    }

    fn object_mesh(&mut self, object: ObjectId) -> Option<&mut Mesh> {
        self.objects
            .iter_mut()
            .find(|(id, _)| *id == object)
            .map(|(_, mesh)| mesh)
    }
}

impl SceneHost for MeshScene {
    /// Duplicating an id that was never imported stamps an empty object;
    /// ids only come from [`MeshScene::import_template`], so the pipeline
    /// never hits that case.
    fn duplicate(&mut self, template: TemplateId) -> ObjectId {
        let id = ObjectId(self.next_object);
        self.next_object += 1;
        let mesh = self.templates.get(&template).cloned().unwrap_or_default();
        self.objects.push((id, mesh));
        id
    }

    fn rotate_z(&mut self, object: ObjectId, radians: f64) {
        if let Some(mesh) = self.object_mesh(object) {
            apply_transform(mesh, &rotation_about_z(radians));
        }
    }

    fn translate(&mut self, object: ObjectId, offset: &Vector3<f64>) {
        if let Some(mesh) = self.object_mesh(object) {
            apply_transform(mesh, &translation(offset));
        }
    }

    fn delete_template(&mut self, template: TemplateId) {
        self.templates.remove(&template);
    }

    fn join_all(&mut self) {
        let joined = self.combined_mesh();
        let id = ObjectId(self.next_object);
        self.next_object += 1;
        self.objects.clear();
        self.objects.push((id, joined));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panelforge_geometry::create_panel;

    fn panel() -> Mesh {
        create_panel(2.0, 0.1, 2.0).unwrap()
    }

    #[test]
    fn test_duplicate_is_independent_of_template() {
        let mut scene = MeshScene::new();
        let template = scene.import_template(panel(), BumpCellularMaterial::default());

        let object = scene.duplicate(template);
        scene.translate(object, &Vector3::new(10.0, 0.0, 0.0));

        // The template is untouched: a second duplicate lands at the origin
        scene.duplicate(template);
        let (min, max) = scene.combined_mesh().bounds();
        assert!(min.x < 0.0, "second duplicate must stay at the origin");
        assert!(max.x > 10.0, "first duplicate must have moved");
    }

    #[test]
    fn test_join_all_collapses_objects() {
        let mut scene = MeshScene::new();
        let template = scene.import_template(panel(), BumpCellularMaterial::default());

        scene.duplicate(template);
        scene.duplicate(template);
        assert_eq!(scene.object_count(), 2);

        scene.join_all();
        assert_eq!(scene.object_count(), 1);
        assert_eq!(scene.combined_mesh().vertex_count(), panel().vertex_count() * 2);
    }

    #[test]
    fn test_deleted_template_leaves_objects() {
        let mut scene = MeshScene::new();
        let template = scene.import_template(panel(), BumpCellularMaterial::default());

        scene.duplicate(template);
        scene.delete_template(template);

        assert_eq!(scene.object_count(), 1);
        assert!(!scene.combined_mesh().is_empty());
    }
}
