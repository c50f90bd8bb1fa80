//! In-memory `MorphApi` for handler tests.

use super::{MorphApi, MorphError};
use async_trait::async_trait;
use common::model::field::{CreateFieldConfig, FieldFilters, FieldMeta};
use common::model::record::ResourceRecord;
use common::requests::{
    CreateSessionRequest, ListParams, ListResponse, SessionResponse, UpdateRequest, UpdateResponse,
};
use std::collections::HashMap;
use std::sync::Mutex;

pub const FAKE_TOKEN: &str = "session-token";

#[derive(Default)]
pub struct FakeMorph {
    pub records: Mutex<HashMap<String, Vec<ResourceRecord>>>,
    pub fields: Mutex<Vec<FieldMeta>>,
    pub fail_session: bool,
    pub fail_list: bool,
    pub fail_update: bool,
    /// Every list call's params, in order.
    pub list_calls: Mutex<Vec<ListParams>>,
}

impl FakeMorph {
    pub fn with_records(model: &str, records: Vec<ResourceRecord>) -> Self {
        let fake = FakeMorph::default();
        fake.records.lock().unwrap().insert(model.to_string(), records);
        fake
    }

    fn check_token(token: &str) -> Result<(), MorphError> {
        if token == FAKE_TOKEN {
            Ok(())
        } else {
            Err(MorphError::api(401, "invalid session"))
        }
    }
}

#[async_trait]
impl MorphApi for FakeMorph {
    async fn create_session(&self, request: &CreateSessionRequest) -> Result<SessionResponse, MorphError> {
        if self.fail_session {
            return Err(MorphError::api(400, "unknown connector"));
        }
        assert!(!request.connection.owner_id.is_empty());
        Ok(SessionResponse {
            session_token: FAKE_TOKEN.to_string(),
        })
    }

    async fn list_resources(
        &self,
        session_token: &str,
        model: &str,
        params: &ListParams,
    ) -> Result<ListResponse, MorphError> {
        Self::check_token(session_token)?;
        self.list_calls.lock().unwrap().push(params.clone());
        if self.fail_list {
            return Err(MorphError::api(500, "list failed"));
        }
        let records = self.records.lock().unwrap();
        let all = records.get(model).cloned().unwrap_or_default();
        let filtered: Vec<ResourceRecord> = match &params.q {
            Some(q) => all
                .into_iter()
                .filter(|r| r.fields.values().any(|v| v.raw_string().contains(q.as_str())))
                .collect(),
            None => all,
        };
        let start: usize = params.cursor.as_deref().and_then(|c| c.parse().ok()).unwrap_or(0);
        let end = (start + params.limit as usize).min(filtered.len());
        let next = (end < filtered.len()).then(|| end.to_string());
        Ok(ListResponse {
            data: filtered.get(start..end).map(<[_]>::to_vec).unwrap_or_default(),
            next,
        })
    }

    async fn update_resource(
        &self,
        session_token: &str,
        model: &str,
        record_id: &str,
        request: &UpdateRequest,
    ) -> Result<UpdateResponse, MorphError> {
        Self::check_token(session_token)?;
        if self.fail_update {
            return Err(MorphError::api(422, "field is read-only"));
        }
        let mut records = self.records.lock().unwrap();
        let record = records
            .get_mut(model)
            .and_then(|rs| rs.iter_mut().find(|r| r.id == record_id))
            .ok_or_else(|| MorphError::api(404, "record not found"))?;
        record.fields.extend(request.fields.clone());
        Ok(UpdateResponse {
            data: Some(record.clone()),
        })
    }

    async fn list_fields(&self, session_token: &str, filters: &FieldFilters) -> Result<Vec<FieldMeta>, MorphError> {
        Self::check_token(session_token)?;
        Ok(self
            .fields
            .lock()
            .unwrap()
            .iter()
            .filter(|f| f.model == filters.model)
            .filter(|f| filters.remote.is_none_or(|remote| f.remote == remote))
            .cloned()
            .collect())
    }

    async fn create_field(&self, session_token: &str, config: &CreateFieldConfig) -> Result<FieldMeta, MorphError> {
        Self::check_token(session_token)?;
        let meta = FieldMeta {
            id: format!("custom_{}", config.label.to_lowercase().replace(' ', "_")),
            label: config.label.clone(),
            model: config.model.clone(),
            kind: config.kind,
            remote: true,
            options: config.options.clone(),
        };
        self.fields.lock().unwrap().push(meta.clone());
        Ok(meta)
    }
}
