use serde::{Deserialize, Serialize};
use serde_json::Number;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Table {
    pub id: String,
    pub x: Number,
    pub y: Number,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PostTablesRequest {
    pub id: Option<String>,
    pub x: Option<Number>,
    pub y: Option<Number>,
}

/// partial update, omitted coordinates keep their value
#[derive(Debug, Default, Deserialize)]
pub(crate) struct PutTableRequest {
    pub x: Option<Number>,
    pub y: Option<Number>,
}

impl Table {
    pub fn apply(&mut self, PutTableRequest { x, y }: PutTableRequest) {
        if let Some(x) = x {
            self.x = x;
        }
        if let Some(y) = y {
            self.y = y;
        }
    }
}
