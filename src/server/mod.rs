//! main file for the server

pub mod model;
mod controller;
mod state;
mod store;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;
use crate::server::controller::{ad, assignment, table};
use crate::server::model::config::ServerConfig;
use crate::server::state::AppState;
use crate::server::store::file::FileBackend;
use crate::server::store::Store;

/// Run the server
pub async fn run(ServerConfig { addr, store_path }: ServerConfig) -> anyhow::Result<()> {
    let backend = FileBackend::new(store_path);
    info!("using store at {}", backend.path().display());
    let store = Store::new(backend);
    store.initialize().await?;
    let state = AppState::new(store);

    info!("API server running on http://{}", addr);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(cors())
            .app_data(web::Data::new(state.clone()))
            .configure(routes)
    })
        .bind(addr)?
        .run()
        .await?;
    Ok(())
}

/// Any origin may call the api.
fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allow_any_method()
        .allow_any_header()
}

/// Registers every endpoint.
fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(table::get_tables)
        .service(table::post_tables)
        .service(table::put_table)
        .service(table::delete_table_by_id)
        .service(assignment::get_assignments)
        .service(assignment::post_assignments)
        .service(assignment::delete_assignment_by_guest)
        .service(ad::get_ads)
        .service(ad::post_ads)
        .service(ad::delete_ad_by_id);
}
