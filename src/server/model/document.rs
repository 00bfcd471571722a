use std::collections::HashSet;
use serde::{Deserialize, Serialize};
use crate::server::model::ad::Ad;
use crate::server::model::assignment::Assignments;
use crate::server::model::table::Table;

/// Everything the service persists, loaded and saved as a whole.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Document {
    pub tables: Vec<Table>,
    pub assignments: Assignments,
    pub ads: Vec<Ad>,
}

impl Document {
    pub fn table(&self, id: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.id == id)
    }

    pub fn table_mut(&mut self, id: &str) -> Option<&mut Table> {
        self.tables.iter_mut().find(|t| t.id == id)
    }

    pub fn ad(&self, id: &str) -> Option<&Ad> {
        self.ads.iter().find(|a| a.id == id)
    }

    /// Checks invariants serde cannot express, returns a description of the first violation.
    pub fn check(&self) -> Result<(), String> {
        let mut seen = HashSet::with_capacity(self.tables.len());
        if let Some(t) = self.tables.iter().find(|t| !seen.insert(t.id.as_str())) {
            return Err(format!("duplicate table id {}", t.id));
        }
        let mut seen = HashSet::with_capacity(self.ads.len());
        if let Some(a) = self.ads.iter().find(|a| !seen.insert(a.id.as_str())) {
            return Err(format!("duplicate ad id {}", a.id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn check_rejects_duplicate_ids() {
        let doc: Document = serde_json::from_value(json!({
            "tables": [{"id": "T1", "x": 1, "y": 2}, {"id": "T1", "x": 3, "y": 4}],
            "assignments": {},
            "ads": [],
        })).unwrap();
        assert_eq!(doc.check(), Err("duplicate table id T1".to_string()));

        let doc: Document = serde_json::from_value(json!({
            "tables": [],
            "assignments": {},
            "ads": [
                {"id": "A", "title": "t", "imageUrl": "i", "link": ""},
                {"id": "A", "title": "u", "imageUrl": "j", "link": ""},
            ],
        })).unwrap();
        assert_eq!(doc.check(), Err("duplicate ad id A".to_string()));
        assert!(Document::default().check().is_ok());
    }

    #[test]
    fn missing_collection_is_rejected() {
        let res = serde_json::from_value::<Document>(json!({"tables": [], "ads": []}));
        assert!(res.is_err());
    }

    #[test]
    fn assignments_keep_insertion_order() {
        let raw = r#"{"tables":[],"assignments":{"Zoe":"T2","Adam":"T1"},"ads":[]}"#;
        let doc: Document = serde_json::from_str(raw).unwrap();
        assert_eq!(doc.assignments.keys().collect::<Vec<_>>(), vec!["Zoe", "Adam"]);
        assert_eq!(serde_json::to_string(&doc).unwrap(), raw);
    }
}
