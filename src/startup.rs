//! src/startup.rs

use std::net::TcpListener;
use actix_web::{HttpServer, App, web, dev::Server};
use crate::identity::DomainAllowList;
use crate::routes::{ping, home, contact, dashboard, submit_contact};
use crate::storage_client::StorageClient;

pub fn run(
    listener: TcpListener,
    storage_client: StorageClient,
    allow_list: DomainAllowList,
) -> Result<Server, std::io::Error> {
    let storage_client = web::Data::new(storage_client);
    // The pre-signup hook has no route of its own; it is held with the other
    // collaborators for the external sign-up workflow.
    let allow_list = web::Data::new(allow_list);
    let server = HttpServer::new(move || {
        App::new()
            .route("/ping", web::get().to(ping))
            .route("/", web::get().to(home))
            .route("/contact", web::get().to(contact))
            .route("/dashboard", web::get().to(dashboard))
            .route("/submit_contact", web::post().to(submit_contact))
            .app_data(storage_client.clone())
            .app_data(allow_list.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
