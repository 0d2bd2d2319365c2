//! src/routes/pages.rs

use actix_web::HttpResponse;

pub async fn home() -> HttpResponse {
    HttpResponse::Ok().body("Welcome to Connecting The Dots!")
}

pub async fn contact() -> HttpResponse {
    HttpResponse::Ok().body("Contact Page")
}

pub async fn dashboard() -> HttpResponse {
    HttpResponse::Ok().body("Dashboard Page")
}
