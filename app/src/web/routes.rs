// app/src/web/routes.rs

use actix_web::web;

use crate::web::handlers::{admin_handlers, public_handlers};

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// Called from `main.rs` (and the HTTP tests) to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .route("/", web::get().to(public_handlers::index_handler))
    .route("/health", web::get().to(health_check_handler))
    .service(
      web::scope("/admin")
        .route("/", web::get().to(admin_handlers::admin_index_handler))
        // Admin views for the `product` resource
        .service(
          web::scope("/product")
            .route("/", web::get().to(admin_handlers::list_products_handler))
            .service(
              web::resource("/new")
                .route(web::get().to(admin_handlers::new_product_form_handler))
                .route(web::post().to(admin_handlers::create_product_handler)),
            )
            .service(
              web::resource("/edit/{id}")
                .route(web::get().to(admin_handlers::edit_product_form_handler))
                .route(web::post().to(admin_handlers::update_product_handler)),
            )
            .route(
              "/delete/{id}",
              web::post().to(admin_handlers::delete_product_handler),
            ),
        ),
    );
}
