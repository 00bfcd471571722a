use actix_web::{delete, get, post, web, HttpRequest, HttpResponse, Responder};
use log::{info, warn};
use crate::server::controller::error::CustomError;
use crate::server::controller::json_body;
use crate::server::model::ad::{Ad, PostAdsRequest};
use crate::server::model::document::Document;
use crate::server::model::present;
use crate::server::state::AppState;

pub(crate) fn create_ad(doc: &mut Document, req: PostAdsRequest) -> Result<Ad, CustomError> {
    let (Some(id), Some(title), Some(image_url)) = (present(&req.id), present(&req.title), present(&req.image_url)) else {
        return Err(CustomError::Validation("Missing id, title or imageUrl"));
    };
    if doc.ad(id).is_some() {
        return Err(CustomError::Conflict("Ad ID already exists"));
    }
    let ad = Ad::new(id, title, image_url, req.link);
    doc.ads.push(ad.clone());
    Ok(ad)
}

pub(crate) fn delete_ad(doc: &mut Document, id: &str) -> Result<(), CustomError> {
    let before = doc.ads.len();
    doc.ads.retain(|a| a.id != id);
    if doc.ads.len() == before {
        return Err(CustomError::NotFound("Ad not found"));
    }
    Ok(())
}

#[get("/api/ads")]
async fn get_ads(data: web::Data<AppState>) -> Result<impl Responder, CustomError> {
    let ads = data.store().read(|doc| doc.ads.clone()).await?;
    Ok(web::Json(ads))
}

#[post("/api/ads")]
/// publish a banner
async fn post_ads(req: HttpRequest, body: web::Bytes, data: web::Data<AppState>) -> Result<impl Responder, CustomError> {
    let body: PostAdsRequest = json_body(&req, &body)?;
    let ad = data.store().update(|doc| create_ad(doc, body)).await
        .inspect_err(|e| warn!("post_ads rejected, {}", e))?;
    info!("ad {} created", ad.id);
    Ok(HttpResponse::Created().json(ad))
}

#[delete("/api/ads/{id}")]
async fn delete_ad_by_id(id: web::Path<String>, data: web::Data<AppState>) -> Result<impl Responder, CustomError> {
    let id = id.into_inner();
    data.store().update(|doc| delete_ad(doc, &id)).await
        .inspect_err(|e| warn!("delete_ad {} rejected, {}", id, e))?;
    Ok(HttpResponse::NoContent())
}
