use actix_web::{delete, get, post, put, web, HttpRequest, HttpResponse, Responder};
use log::{info, warn};
use crate::server::controller::error::CustomError;
use crate::server::controller::json_body;
use crate::server::model::document::Document;
use crate::server::model::present;
use crate::server::model::table::{PostTablesRequest, PutTableRequest, Table};
use crate::server::state::AppState;

pub(crate) fn create_table(doc: &mut Document, req: PostTablesRequest) -> Result<Table, CustomError> {
    let (Some(id), Some(x), Some(y)) = (present(&req.id), req.x, req.y) else {
        return Err(CustomError::Validation("Missing id, x or y"));
    };
    if doc.table(id).is_some() {
        return Err(CustomError::Conflict("Table ID already exists"));
    }
    let table = Table { id: id.to_string(), x, y };
    doc.tables.push(table.clone());
    Ok(table)
}

pub(crate) fn update_table(doc: &mut Document, id: &str, req: PutTableRequest) -> Result<Table, CustomError> {
    let table = doc.table_mut(id).ok_or(CustomError::NotFound("Table not found"))?;
    table.apply(req);
    Ok(table.clone())
}

/// Removes the table and every assignment pointing at it.
pub(crate) fn delete_table(doc: &mut Document, id: &str) -> Result<(), CustomError> {
    let before = doc.tables.len();
    doc.tables.retain(|t| t.id != id);
    if doc.tables.len() == before {
        return Err(CustomError::NotFound("Table not found"));
    }
    doc.assignments.retain(|_, table_id| table_id != id);
    Ok(())
}

#[get("/api/tables")]
/// list tables in insertion order
async fn get_tables(data: web::Data<AppState>) -> Result<impl Responder, CustomError> {
    let tables = data.store().read(|doc| doc.tables.clone()).await?;
    Ok(web::Json(tables))
}

#[post("/api/tables")]
/// add a new table
async fn post_tables(req: HttpRequest, body: web::Bytes, data: web::Data<AppState>) -> Result<impl Responder, CustomError> {
    let body: PostTablesRequest = json_body(&req, &body)?;
    let table = data.store().update(|doc| create_table(doc, body)).await
        .inspect_err(|e| warn!("post_tables rejected, {}", e))?;
    info!("table {} created", table.id);
    Ok(HttpResponse::Created().json(table))
}

#[put("/api/tables/{id}")]
/// move a table, omitted coordinates are kept
async fn put_table(id: web::Path<String>, req: HttpRequest, body: web::Bytes, data: web::Data<AppState>) -> Result<impl Responder, CustomError> {
    let id = id.into_inner();
    let body: PutTableRequest = json_body(&req, &body)?;
    let table = data.store().update(|doc| update_table(doc, &id, body)).await
        .inspect_err(|e| warn!("put_table {} rejected, {}", id, e))?;
    Ok(web::Json(table))
}

#[delete("/api/tables/{id}")]
/// remove a table together with its assignments
async fn delete_table_by_id(id: web::Path<String>, data: web::Data<AppState>) -> Result<impl Responder, CustomError> {
    let id = id.into_inner();
    data.store().update(|doc| delete_table(doc, &id)).await
        .inspect_err(|e| warn!("delete_table {} rejected, {}", id, e))?;
    info!("table {} deleted", id);
    Ok(HttpResponse::NoContent())
}
