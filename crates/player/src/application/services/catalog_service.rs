//! Catalog Service - races, skills, powers and equipment
//!
//! The four collections share one code path, parameterised by `CatalogKind`.

use futures_util::future::try_join4;

use roster_domain::{CatalogEntry, CatalogKind, CatalogName};

use crate::application::api::Api;
use crate::application::dto::{CatalogEntryDto, CreateCatalogEntryRequest};
use crate::application::error::ClientError;
use crate::ports::outbound::ApiPort;

/// Collection path for a catalog kind.
pub fn collection_path(kind: CatalogKind) -> &'static str {
    match kind {
        CatalogKind::Race => "/razas/",
        CatalogKind::Skill => "/habilidades/",
        CatalogKind::Power => "/poderes/",
        CatalogKind::Equipment => "/equipamientos/",
    }
}

/// All four catalog lists, in server order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogLists {
    pub races: Vec<CatalogEntry>,
    pub skills: Vec<CatalogEntry>,
    pub powers: Vec<CatalogEntry>,
    pub equipment: Vec<CatalogEntry>,
}

impl CatalogLists {
    pub fn get(&self, kind: CatalogKind) -> &[CatalogEntry] {
        match kind {
            CatalogKind::Race => &self.races,
            CatalogKind::Skill => &self.skills,
            CatalogKind::Power => &self.powers,
            CatalogKind::Equipment => &self.equipment,
        }
    }
}

#[derive(Clone)]
pub struct CatalogService {
    api: Api,
}

impl CatalogService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    pub async fn list(&self, kind: CatalogKind) -> Result<Vec<CatalogEntry>, ClientError> {
        tracing::debug!(%kind, "listing catalog");
        let entries: Vec<CatalogEntryDto> = self.api.get(collection_path(kind)).await?;
        Ok(entries.into_iter().map(Into::into).collect())
    }

    pub async fn create(
        &self,
        kind: CatalogKind,
        name: &CatalogName,
    ) -> Result<CatalogEntry, ClientError> {
        let request = CreateCatalogEntryRequest {
            name: name.as_str().to_string(),
        };
        let created: CatalogEntryDto = self
            .api
            .post(collection_path(kind), &request)
            .await
            .map_err(|e| {
                tracing::warn!(%kind, error = %e, "catalog create failed");
                e
            })?;
        Ok(created.into())
    }

    /// Fetch the four lists concurrently; any failure fails the whole load.
    pub async fn list_all(&self) -> Result<CatalogLists, ClientError> {
        let (races, skills, powers, equipment) = try_join4(
            self.list(CatalogKind::Race),
            self.list(CatalogKind::Skill),
            self.list(CatalogKind::Power),
            self.list(CatalogKind::Equipment),
        )
        .await?;
        Ok(CatalogLists {
            races,
            skills,
            powers,
            equipment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::fixtures;
    use crate::ports::outbound::MockRawApiPort;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn list_all_fetches_each_collection() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json().times(4).returning(|path| match path {
            "/razas/" => Ok(json!([{"id": 1, "nombre": "Orco"}, {"id": 2, "nombre": "Humano"}])),
            "/habilidades/" => Ok(json!([{"id": 5, "nombre": "Sigilo"}])),
            "/poderes/" => Ok(json!([])),
            "/equipamientos/" => Ok(json!([{"id": 9, "nombre": "Hacha"}])),
            other => panic!("unexpected path {other}"),
        });

        let lists = CatalogService::new(Api::new(Arc::new(raw)))
            .list_all()
            .await
            .unwrap();

        assert_eq!(
            lists.races,
            vec![CatalogEntry::new(1, "Orco"), CatalogEntry::new(2, "Humano")]
        );
        assert_eq!(lists.get(CatalogKind::Skill).len(), 1);
        assert!(lists.powers.is_empty());
        assert_eq!(lists.equipment[0].name, "Hacha");
    }

    #[tokio::test]
    async fn one_failed_list_fails_the_load() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json().returning(|path| {
            if path == "/poderes/" {
                Err(fixtures::api_rejection(
                    403,
                    r#"{"detail":"You do not have permission"}"#,
                ))
            } else {
                Ok(json!([]))
            }
        });

        let err = CatalogService::new(Api::new(Arc::new(raw)))
            .list_all()
            .await
            .unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[tokio::test]
    async fn create_posts_name_to_kind_path() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .withf(|path, body| path == "/equipamientos/" && *body == json!({"nombre": "Escudo"}))
            .times(1)
            .returning(|_, _| Ok(json!({"id": 12, "nombre": "Escudo"})));

        let name = CatalogName::new("Escudo").unwrap();
        let created = CatalogService::new(Api::new(Arc::new(raw)))
            .create(CatalogKind::Equipment, &name)
            .await
            .unwrap();
        assert_eq!(created, CatalogEntry::new(12, "Escudo"));
    }
}
