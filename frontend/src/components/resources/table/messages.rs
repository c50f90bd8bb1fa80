use common::model::record::{FieldValue, ResourceRecord};
use common::requests::ListResponse;

pub enum Msg {
    /// Restart from the first page.
    Reload,
    SearchInput(String),
    /// The debounce delay of a search keystroke elapsed.
    SearchSettled(u64),
    LoadMore,
    PageLoaded { generation: u64, page: ListResponse },
    PageFailed { generation: u64, error: String },
    CellCommitted { record_id: String, field_id: String, value: FieldValue },
    UpdateSucceeded { record_id: String, record: Option<ResourceRecord> },
    UpdateFailed(String),
}
