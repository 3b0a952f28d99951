use std::sync::Arc;

use crate::models::resource::{NewResource, Resource};
use crate::repositories::{RepoError, ResourceRepository};

#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("resource not found")]
    NotFound,

    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// CRUD over the well-being content library.
pub struct ResourceService {
    resources: Arc<dyn ResourceRepository>,
}

impl ResourceService {
    pub fn new(resources: Arc<dyn ResourceRepository>) -> Self {
        Self { resources }
    }

    pub async fn create(&self, new: NewResource) -> Result<Resource, ResourceError> {
        Ok(self.resources.insert(&new).await?)
    }

    pub async fn get(&self, id: i64) -> Result<Resource, ResourceError> {
        self.resources
            .find_by_id(id)
            .await?
            .ok_or(ResourceError::NotFound)
    }

    pub async fn list(&self) -> Result<Vec<Resource>, ResourceError> {
        Ok(self.resources.find_all().await?)
    }

    pub async fn update(&self, resource: Resource) -> Result<Resource, ResourceError> {
        self.resources
            .update(&resource)
            .await?
            .ok_or(ResourceError::NotFound)
    }

    pub async fn delete(&self, id: i64) -> Result<bool, ResourceError> {
        Ok(self.resources.delete(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::InMemoryResources;

    fn new_resource(name: &str) -> NewResource {
        NewResource {
            name: name.into(),
            kind: "article".into(),
            url: "https://example.com/a".into(),
        }
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let svc = ResourceService::new(Arc::new(InMemoryResources::new()));

        let saved = svc.create(new_resource("Desk stretches")).await.unwrap();
        let fetched = svc.get(saved.id).await.unwrap();
        assert_eq!(fetched.name, "Desk stretches");
    }

    #[tokio::test]
    async fn get_and_update_report_missing_rows() {
        let svc = ResourceService::new(Arc::new(InMemoryResources::new()));

        assert!(matches!(svc.get(404).await, Err(ResourceError::NotFound)));

        let ghost = Resource {
            id: 404,
            name: "Ghost".into(),
            kind: "article".into(),
            url: "https://example.com/g".into(),
        };
        assert!(matches!(
            svc.update(ghost).await,
            Err(ResourceError::NotFound)
        ));
    }

    #[tokio::test]
    async fn list_is_ordered_by_name() {
        let svc = ResourceService::new(Arc::new(InMemoryResources::new()));
        svc.create(new_resource("Walking meetings")).await.unwrap();
        svc.create(new_resource("Box breathing")).await.unwrap();

        let names: Vec<String> = svc
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["Box breathing", "Walking meetings"]);
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_was_removed() {
        let svc = ResourceService::new(Arc::new(InMemoryResources::new()));
        let saved = svc.create(new_resource("Desk stretches")).await.unwrap();

        assert!(svc.delete(saved.id).await.unwrap());
        assert!(!svc.delete(saved.id).await.unwrap());
    }
}
