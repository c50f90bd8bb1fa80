//! State of the client resource table.
//!
//! `TableState` owns the loaded rows, the pagination cursor, the search term
//! and the column descriptors of one page view. It never talks to the network:
//! operations return a [`ListFetch`] or [`CellUpdate`] describing the call to
//! make, and the caller reports the outcome back.
//!
//! Every initial load bumps a request generation. Pages and failures carry the
//! generation of the request that produced them, and anything from an older
//! generation is dropped, so a slow response to a superseded search can no
//! longer overwrite the rows of the current one.

use crate::columns::{apply_metadata, observe_batch};
use crate::debounce::Debouncer;
use crate::model::column::ColumnDescriptor;
use crate::model::field::FieldMeta;
use crate::model::record::{FieldValue, ResourceRecord};
use crate::requests::{ListParams, ListResponse, UpdateRequest};
use std::collections::BTreeMap;

pub const CLIENT_PAGE_SIZE: u32 = 20;
pub const SERVER_PAGE_SIZE: u32 = 10;

/// A list call to issue.
#[derive(Debug, Clone, PartialEq)]
pub struct ListFetch {
    pub generation: u64,
    pub params: ListParams,
    /// `true` for "load more", whose rows are appended.
    pub append: bool,
}

/// A remote update to issue after an optimistic local write.
#[derive(Debug, Clone, PartialEq)]
pub struct CellUpdate {
    pub record_id: String,
    pub field_id: String,
    pub value: FieldValue,
}

impl CellUpdate {
    pub fn body(&self) -> UpdateRequest {
        let mut fields = BTreeMap::new();
        fields.insert(self.field_id.clone(), self.value.clone());
        UpdateRequest { fields }
    }
}

#[derive(Debug, Clone)]
pub struct TableState {
    session_token: Option<String>,
    columns: Vec<ColumnDescriptor>,
    rows: Vec<ResourceRecord>,
    cursor: Option<String>,
    search: Debouncer,
    generation: u64,
    loading: bool,
    loading_more: bool,
}

impl TableState {
    pub fn new(columns: Vec<ColumnDescriptor>) -> Self {
        Self {
            session_token: None,
            columns,
            rows: Vec::new(),
            cursor: None,
            search: Debouncer::new(),
            generation: 0,
            loading: false,
            loading_more: false,
        }
    }

    pub fn set_session(&mut self, token: Option<String>) {
        self.session_token = token.filter(|t| !t.is_empty());
    }

    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }

    pub fn has_session(&self) -> bool {
        self.session_token.is_some()
    }

    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    pub fn column(&self, field_id: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.field_id == field_id)
    }

    pub fn rows(&self) -> &[ResourceRecord] {
        &self.rows
    }

    pub fn has_more(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_loading_more(&self) -> bool {
        self.loading_more
    }

    pub fn search_raw(&self) -> &str {
        self.search.raw()
    }

    pub fn search_term(&self) -> &str {
        self.search.effective()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Field metadata arrived or changed: select fields pick up their options.
    pub fn apply_metadata(&mut self, metadata: &[FieldMeta]) {
        apply_metadata(&mut self.columns, metadata);
    }

    fn field_params(&self) -> ListParams {
        ListParams::new(self.columns.iter().map(|c| c.field_id.as_str()), CLIENT_PAGE_SIZE)
            .with_search(self.search.effective())
    }

    /// Resets rows and cursor and starts the first page. Nothing is fetched
    /// without a session.
    pub fn initial_load(&mut self) -> Option<ListFetch> {
        if !self.has_session() {
            return None;
        }
        self.rows.clear();
        self.cursor = None;
        self.generation += 1;
        self.loading = true;
        self.loading_more = false;
        Some(ListFetch {
            generation: self.generation,
            params: self.field_params(),
            append: false,
        })
    }

    /// Next page from the last cursor; `None` while a load-more is in flight
    /// or when there is nothing left to load.
    pub fn load_more(&mut self) -> Option<ListFetch> {
        if !self.has_session() || self.loading_more {
            return None;
        }
        let cursor = self.cursor.clone()?;
        self.loading_more = true;
        Some(ListFetch {
            generation: self.generation,
            params: self.field_params().with_cursor(Some(cursor)),
            append: true,
        })
    }

    /// Records a keystroke in the search box and returns its debounce ticket.
    pub fn search_input(&mut self, raw: String) -> u64 {
        self.search.input(raw)
    }

    /// Called when a debounce ticket's quiet period has elapsed. A new
    /// effective term restarts loading from the first page, dropping the old
    /// cursor.
    pub fn search_settled(&mut self, ticket: u64) -> Option<ListFetch> {
        self.search.settle(ticket)?;
        self.initial_load()
    }

    /// Applies a fetched page. Returns `false` when the page belongs to a
    /// superseded request and was discarded.
    pub fn apply_page(&mut self, generation: u64, page: ListResponse) -> bool {
        if generation != self.generation {
            return false;
        }
        let fresh: Vec<ResourceRecord> = page
            .data
            .into_iter()
            .filter(|r| !self.rows.iter().any(|existing| existing.id == r.id))
            .collect();
        observe_batch(&mut self.columns, &fresh);
        self.rows.extend(fresh);
        self.cursor = page.next.filter(|c| !c.is_empty());
        self.loading = false;
        self.loading_more = false;
        true
    }

    /// A list call failed; rows stay as they are. Returns `false` for stale
    /// failures, which callers should not report.
    pub fn apply_list_failure(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.loading = false;
        self.loading_more = false;
        true
    }

    /// Writes `value` into the local row before the remote call is made.
    pub fn update_cell(&mut self, record_id: &str, field_id: &str, value: FieldValue) -> Option<CellUpdate> {
        let row = self.rows.iter_mut().find(|r| r.id == record_id)?;
        row.fields.insert(field_id.to_string(), value.clone());
        Some(CellUpdate {
            record_id: record_id.to_string(),
            field_id: field_id.to_string(),
            value,
        })
    }

    /// Reconciles a row with the record the service confirmed, if it sent one.
    pub fn apply_update_success(&mut self, record_id: &str, confirmed: Option<ResourceRecord>) {
        let Some(confirmed) = confirmed else {
            return;
        };
        if let Some(row) = self.rows.iter_mut().find(|r| r.id == record_id) {
            row.fields.extend(confirmed.fields);
        }
    }

    /// The remote update failed: throw away every optimistic change by
    /// reloading from scratch.
    pub fn apply_update_failure(&mut self) -> Option<ListFetch> {
        self.initial_load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::columns_for;
    use crate::model::column::ColumnType;
    use crate::registry;
    use pretty_assertions::assert_eq;

    fn contact_table() -> TableState {
        let model = registry::model("genericContact").unwrap();
        let mut table = TableState::new(columns_for(model, &[], &[]));
        table.set_session(Some("tok".to_string()));
        table
    }

    fn page(ids: &[&str], next: Option<&str>) -> ListResponse {
        ListResponse {
            data: ids
                .iter()
                .map(|id| ResourceRecord::new(*id).with_field("firstName", *id))
                .collect(),
            next: next.map(str::to_string),
        }
    }

    fn ids(table: &TableState) -> Vec<&str> {
        table.rows().iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn no_session_means_no_fetch() {
        let model = registry::model("genericCompany").unwrap();
        let mut table = TableState::new(columns_for(model, &[], &[]));
        assert_eq!(table.initial_load(), None);
        table.set_session(Some(String::new()));
        assert!(!table.has_session());
        assert_eq!(table.initial_load(), None);
    }

    #[test]
    fn initial_load_requests_first_page_of_model_fields() {
        let mut table = contact_table();
        let fetch = table.initial_load().unwrap();
        assert_eq!(fetch.params.limit, CLIENT_PAGE_SIZE);
        assert_eq!(fetch.params.cursor, None);
        assert_eq!(fetch.params.fields, "firstName,lastName,email,phone,createdAt");
        assert!(!fetch.append);
        assert!(table.is_loading());
    }

    #[test]
    fn single_record_renders_single_row() {
        let mut table = contact_table();
        let fetch = table.initial_load().unwrap();
        let record = ResourceRecord::new("r1").with_field("firstName", "Ada");
        table.apply_page(
            fetch.generation,
            ListResponse {
                data: vec![record],
                next: None,
            },
        );

        assert_eq!(table.rows().len(), 1);
        let row = &table.rows()[0];
        let first = table.column("firstName").unwrap();
        let last = table.column("lastName").unwrap();
        assert_eq!(crate::cell::display_text(row.value("firstName"), first), "Ada");
        assert_eq!(crate::cell::display_text(row.value("lastName"), last), crate::cell::PLACEHOLDER);
    }

    #[test]
    fn load_more_appends_rows() {
        let mut table = contact_table();
        let first = table.initial_load().unwrap();
        table.apply_page(first.generation, page(&["a", "b"], Some("c1")));

        let more = table.load_more().unwrap();
        assert!(more.append);
        assert_eq!(more.params.cursor.as_deref(), Some("c1"));
        table.apply_page(more.generation, page(&["c", "d"], None));

        assert_eq!(ids(&table), vec!["a", "b", "c", "d"]);
        assert!(!table.has_more());
        assert_eq!(table.load_more(), None);
    }

    #[test]
    fn load_more_cannot_overlap_itself() {
        let mut table = contact_table();
        let first = table.initial_load().unwrap();
        table.apply_page(first.generation, page(&["a"], Some("c1")));
        assert!(table.load_more().is_some());
        assert!(table.is_loading_more());
        assert_eq!(table.load_more(), None);
    }

    #[test]
    fn repeated_ids_are_not_duplicated() {
        let mut table = contact_table();
        let first = table.initial_load().unwrap();
        table.apply_page(first.generation, page(&["a", "b"], Some("c1")));
        let more = table.load_more().unwrap();
        table.apply_page(more.generation, page(&["b", "c"], None));
        assert_eq!(ids(&table), vec!["a", "b", "c"]);
    }

    #[test]
    fn stale_pages_are_discarded() {
        let mut table = contact_table();
        let old = table.initial_load().unwrap();
        let ticket = table.search_input("ada".to_string());
        let new = table.search_settled(ticket).unwrap();

        assert!(table.apply_page(new.generation, page(&["ada"], None)));
        assert!(!table.apply_page(old.generation, page(&["x", "y"], None)));
        assert!(!table.apply_list_failure(old.generation));
        assert_eq!(ids(&table), vec!["ada"]);
    }

    #[test]
    fn debounced_search_triggers_one_fetch_with_the_term() {
        let mut table = contact_table();
        let first = table.initial_load().unwrap();
        table.apply_page(first.generation, page(&["a"], Some("c1")));

        let tickets: Vec<u64> = ["g", "gr", "gra"]
            .iter()
            .map(|s| table.search_input(s.to_string()))
            .collect();
        assert_eq!(table.search_raw(), "gra");

        let fetches: Vec<ListFetch> = tickets
            .into_iter()
            .filter_map(|t| table.search_settled(t))
            .collect();
        assert_eq!(fetches.len(), 1);
        assert_eq!(fetches[0].params.q.as_deref(), Some("gra"));
        assert_eq!(fetches[0].params.cursor, None);
        assert!(table.rows().is_empty());
    }

    #[test]
    fn failed_update_reloads_pre_edit_value() {
        let mut table = contact_table();
        let original = ListResponse {
            data: vec![ResourceRecord::new("r1").with_field("firstName", "Ada")],
            next: None,
        };
        let first = table.initial_load().unwrap();
        table.apply_page(first.generation, original.clone());

        let update = table.update_cell("r1", "firstName", FieldValue::from("Grace")).unwrap();
        assert_eq!(update.body().fields.get("firstName"), Some(&FieldValue::from("Grace")));
        assert_eq!(table.rows()[0].value("firstName"), Some(&FieldValue::from("Grace")));

        let reload = table.apply_update_failure().unwrap();
        assert!(table.rows().is_empty());
        table.apply_page(reload.generation, original);
        assert_eq!(table.rows()[0].value("firstName"), Some(&FieldValue::from("Ada")));
    }

    #[test]
    fn update_success_takes_confirmed_shape() {
        let mut table = contact_table();
        let first = table.initial_load().unwrap();
        table.apply_page(first.generation, page(&["r1"], None));
        table.update_cell("r1", "email", FieldValue::from("ADA@EXAMPLE.COM"));
        let confirmed = ResourceRecord::new("r1").with_field("email", "ada@example.com");
        table.apply_update_success("r1", Some(confirmed));
        assert_eq!(
            table.rows()[0].value("email"),
            Some(&FieldValue::from("ada@example.com"))
        );
        assert_eq!(table.rows()[0].value("firstName"), Some(&FieldValue::from("r1")));
    }

    #[test]
    fn metadata_turns_columns_into_selects() {
        use crate::model::field::{FieldKind, FieldOption};
        let mut table = contact_table();
        table.apply_metadata(&[FieldMeta {
            id: "email".to_string(),
            label: "Email".to_string(),
            model: "genericContact".to_string(),
            kind: FieldKind::Select,
            remote: false,
            options: Some(vec![FieldOption {
                value: "a@x.io".to_string(),
                label: "A".to_string(),
            }]),
        }]);
        let email = table.column("email").unwrap();
        assert_eq!(email.column_type, ColumnType::Select);
        assert_eq!(email.option_label("a@x.io"), "A");
    }

    #[test]
    fn unknown_row_update_is_ignored() {
        let mut table = contact_table();
        assert_eq!(table.update_cell("missing", "email", FieldValue::Null), None);
    }

    #[test]
    fn list_failure_keeps_rows() {
        let mut table = contact_table();
        let first = table.initial_load().unwrap();
        table.apply_page(first.generation, page(&["a"], Some("c1")));
        let more = table.load_more().unwrap();
        assert!(table.apply_list_failure(more.generation));
        assert_eq!(ids(&table), vec!["a"]);
        assert!(!table.is_loading_more());
        assert!(table.has_more());
    }

    #[test]
    fn columns_are_inferred_from_pages() {
        let mut table = contact_table();
        let first = table.initial_load().unwrap();
        table.apply_page(
            first.generation,
            ListResponse {
                data: vec![ResourceRecord::new("r1").with_field("createdAt", "2023-11-02T09:00:00Z")],
                next: None,
            },
        );
        assert_eq!(table.column("createdAt").unwrap().column_type, ColumnType::Date);
    }
}
