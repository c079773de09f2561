pub mod email_list_handlers;
pub mod form_handlers;
pub mod public_handlers;
pub mod response_handlers;
pub mod send_handlers;

use actix_web::web;

/// Full route table, registered by `main` and by handler tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Form CRUD (owner-scoped)
        .route("/forms", web::get().to(form_handlers::list::list))
        .route("/forms", web::post().to(form_handlers::crud::create))
        .route("/forms/{id}", web::get().to(form_handlers::crud::read))
        .route("/forms/{id}", web::put().to(form_handlers::crud::update))
        .route("/forms/{id}", web::delete().to(form_handlers::crud::delete))
        // Response viewing and export (owner-scoped)
        .route(
            "/forms/{id}/responses",
            web::get().to(response_handlers::list),
        )
        .route(
            "/forms/{id}/responses/export",
            web::get().to(response_handlers::export),
        )
        // Multipart submission — public despite living under /forms
        .route(
            "/forms/{id}/submit",
            web::post().to(public_handlers::submit_multipart),
        )
        // Public form access + JSON submission
        .route("/public/forms/{id}", web::get().to(public_handlers::read))
        .route(
            "/public/submit-form",
            web::post().to(public_handlers::submit_json),
        )
        // Email list CRUD + bulk import (owner-scoped)
        .route("/email-lists", web::get().to(email_list_handlers::list))
        .route("/email-lists", web::post().to(email_list_handlers::create))
        .route("/email-lists/{id}", web::get().to(email_list_handlers::read))
        .route("/email-lists/{id}", web::put().to(email_list_handlers::update))
        .route(
            "/email-lists/{id}",
            web::delete().to(email_list_handlers::delete),
        )
        .route(
            "/email-lists/{id}/import",
            web::post().to(email_list_handlers::import),
        )
        // Distribution (owner-scoped)
        .route("/send-form", web::post().to(send_handlers::send_form));
}
