use crate::routes;
use actix_web::web;

pub fn comment_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(routes::show_all_comments))
        .route("", web::post().to(routes::create_comment))
        .route("", web::patch().to(routes::patch_comment))
        .route("/posts/{id}", web::get().to(routes::show_comments_for_post))
        .route("/{id}", web::delete().to(routes::delete_comment));
}
