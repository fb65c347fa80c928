//! Task library repository: library tasks and the materials they use.

use academy_core::entities::TaskMaterial;
use academy_core::enums::{EntityKind, ForeignKey};

use crate::cascade::CascadeReport;
use crate::drafts::library::NewTaskMaterial;
use crate::error::StoreError;
use crate::service::AcademyService;

impl AcademyService {
    /// Replace the full material list of a library task.
    ///
    /// Every existing pair for `task_id` is dropped first. Drafts are pinned to
    /// `task_id`; a material listed twice keeps its last quantity.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Collection` if the backend fails.
    pub async fn set_task_materials(
        &self,
        task_id: &str,
        materials: Vec<NewTaskMaterial>,
    ) -> Result<Vec<TaskMaterial>, StoreError> {
        let drafts = materials
            .into_iter()
            .map(|m| NewTaskMaterial {
                task_id: task_id.to_string(),
                ..m
            })
            .collect();
        self.task_materials_store()
            .replace_all(ForeignKey::TaskId, task_id, drafts)
            .await
    }

    /// # Errors
    ///
    /// Returns `StoreError::Collection` if the backend fails.
    pub async fn task_materials(&self, task_id: &str) -> Result<Vec<TaskMaterial>, StoreError> {
        self.task_materials_store()
            .find_by(ForeignKey::TaskId, task_id)
            .await
    }

    /// Delete a library task and its material pairs.
    ///
    /// Session plan blocks that point at the task keep the dangling reference.
    ///
    /// # Errors
    ///
    /// Returns the first backend `StoreError`; earlier removals stay.
    pub async fn delete_library_task(&self, task_id: &str) -> Result<CascadeReport, StoreError> {
        self.delete(EntityKind::LibraryTask, task_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drafts::library::NewLibraryTask;
    use crate::test_support::helpers::test_service;
    use academy_core::ids::composite_id;
    use pretty_assertions::assert_eq;

    fn uses(material_id: &str, quantity: u32) -> NewTaskMaterial {
        NewTaskMaterial {
            task_id: String::new(),
            material_id: material_id.into(),
            quantity,
        }
    }

    #[tokio::test]
    async fn materials_are_replaced_as_a_whole() {
        let svc = test_service();
        let task = svc
            .library_tasks()
            .create(NewLibraryTask {
                title: "Rondo 5v2".into(),
                ..NewLibraryTask::default()
            })
            .await
            .unwrap();

        svc.set_task_materials(&task.id, vec![uses("mat-balls", 2), uses("mat-cones", 8)])
            .await
            .unwrap();
        let saved = svc
            .set_task_materials(&task.id, vec![uses("mat-bibs", 10), uses("mat-bibs", 12)])
            .await
            .unwrap();

        let current = svc.task_materials(&task.id).await.unwrap();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].id, composite_id(&task.id, "mat-bibs"));
        assert_eq!(current[0].quantity, 12);
        assert_eq!(saved, current);
    }

    #[tokio::test]
    async fn creating_an_existing_pair_replaces_it() {
        let svc = test_service();
        let store = svc.task_materials_store();
        let draft = |quantity| NewTaskMaterial {
            task_id: "ltk-1".into(),
            material_id: "mat-balls".into(),
            quantity,
        };
        store.create(draft(3)).await.unwrap();
        store.create(draft(9)).await.unwrap();

        let all = store.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].quantity, 9);
    }

    #[tokio::test]
    async fn deleting_a_task_drops_its_materials() {
        let svc = test_service();
        svc.set_task_materials("ltk-a", vec![uses("mat-balls", 1), uses("mat-cones", 4)])
            .await
            .unwrap();
        svc.set_task_materials("ltk-b", vec![uses("mat-balls", 1)])
            .await
            .unwrap();

        let report = svc.delete_library_task("ltk-a").await.unwrap();
        assert!(!report.parent_removed);
        assert_eq!(report.removed(EntityKind::TaskMaterial), 2);
        assert_eq!(svc.task_materials("ltk-b").await.unwrap().len(), 1);
    }
}
