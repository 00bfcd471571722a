use actix_web::{delete, get, post, web, HttpRequest, HttpResponse, Responder};
use indexmap::IndexMap;
use log::{info, warn};
use crate::server::controller::error::CustomError;
use crate::server::controller::json_body;
use crate::server::model::assignment::{Assignments, PostAssignmentsRequest};
use crate::server::model::document::Document;
use crate::server::model::present;
use crate::server::state::AppState;

/// Seats a guest, replacing any table the guest had before.
pub(crate) fn create_assignment(doc: &mut Document, req: PostAssignmentsRequest) -> Result<Assignments, CustomError> {
    let (Some(guest), Some(table_id)) = (present(&req.guest), present(&req.table_id)) else {
        return Err(CustomError::Validation("Missing guest or tableId"));
    };
    if doc.table(table_id).is_none() {
        return Err(CustomError::NotFound("Table not found"));
    }
    doc.assignments.insert(guest.to_string(), table_id.to_string());
    Ok(IndexMap::from([(guest.to_string(), table_id.to_string())]))
}

pub(crate) fn delete_assignment(doc: &mut Document, guest: &str) -> Result<(), CustomError> {
    doc.assignments
        .shift_remove(guest)
        .map(|_| ())
        .ok_or(CustomError::NotFound("Assignment not found"))
}

#[get("/api/assignments")]
/// guest to table mapping
async fn get_assignments(data: web::Data<AppState>) -> Result<impl Responder, CustomError> {
    let assignments = data.store().read(|doc| doc.assignments.clone()).await?;
    Ok(web::Json(assignments))
}

#[post("/api/assignments")]
async fn post_assignments(req: HttpRequest, body: web::Bytes, data: web::Data<AppState>) -> Result<impl Responder, CustomError> {
    let body: PostAssignmentsRequest = json_body(&req, &body)?;
    let assignment = data.store().update(|doc| create_assignment(doc, body)).await
        .inspect_err(|e| warn!("post_assignments rejected, {}", e))?;
    info!("assignment {:?} saved", assignment);
    Ok(HttpResponse::Created().json(assignment))
}

#[delete("/api/assignments/{guest}")]
async fn delete_assignment_by_guest(guest: web::Path<String>, data: web::Data<AppState>) -> Result<impl Responder, CustomError> {
    let guest = guest.into_inner();
    data.store().update(|doc| delete_assignment(doc, &guest)).await
        .inspect_err(|e| warn!("delete_assignment {} rejected, {}", guest, e))?;
    Ok(HttpResponse::NoContent())
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use super::*;

    fn post(guest: &str, table_id: &str) -> PostAssignmentsRequest {
        PostAssignmentsRequest {
            guest: Some(guest.to_string()),
            table_id: Some(table_id.to_string()),
        }
    }

    fn doc() -> Document {
        serde_json::from_value(json!({
            "tables": [{"id": "T1", "x": 1, "y": 2}, {"id": "T2", "x": 5, "y": 5}],
            "assignments": {"Bob": "T2"},
            "ads": [],
        })).unwrap()
    }

    #[test]
    fn create_returns_single_entry() {
        let mut doc = doc();
        let created = create_assignment(&mut doc, post("Alice", "T1")).unwrap();
        assert_eq!(serde_json::to_value(&created).unwrap(), json!({"Alice": "T1"}));
        assert_eq!(serde_json::to_value(&doc.assignments).unwrap(), json!({"Bob": "T2", "Alice": "T1"}));
    }

    #[test]
    fn reassigning_overwrites() {
        let mut doc = doc();
        create_assignment(&mut doc, post("Bob", "T1")).unwrap();
        assert_eq!(doc.assignments.len(), 1);
        assert_eq!(doc.assignments.get("Bob").map(String::as_str), Some("T1"));
    }

    #[test]
    fn unknown_table_leaves_assignments_untouched() {
        let mut doc = doc();
        let before = doc.assignments.clone();
        let err = create_assignment(&mut doc, post("Alice", "T9")).unwrap_err();
        assert!(matches!(err, CustomError::NotFound("Table not found")));
        assert_eq!(doc.assignments, before);
    }

    #[test]
    fn missing_fields_are_rejected() {
        let mut doc = doc();
        let req = PostAssignmentsRequest { guest: Some("Alice".to_string()), table_id: None };
        let err = create_assignment(&mut doc, req).unwrap_err();
        assert_eq!(err.to_string(), "Missing guest or tableId");

        let err = create_assignment(&mut doc, post("", "T1")).unwrap_err();
        assert_eq!(err.to_string(), "Missing guest or tableId");
    }

    #[test]
    fn delete_removes_entry() {
        let mut doc = doc();
        delete_assignment(&mut doc, "Bob").unwrap();
        assert!(doc.assignments.is_empty());

        let err = delete_assignment(&mut doc, "Bob").unwrap_err();
        assert_eq!(err.to_string(), "Assignment not found");
    }
}
