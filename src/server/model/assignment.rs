use indexmap::IndexMap;
use serde::Deserialize;

/// guest name -> table id, one table per guest
pub(crate) type Assignments = IndexMap<String, String>;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PostAssignmentsRequest {
    pub guest: Option<String>,
    pub table_id: Option<String>,
}
