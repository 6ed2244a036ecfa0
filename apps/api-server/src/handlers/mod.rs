//! HTTP handlers and route configuration.

mod blog;
mod health;
mod locations;

use actix_web::{HttpRequest, HttpResponse, web};

use crate::middleware::error::{AppError, AppResult, json_error_handler};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::resource("/locations")
                .route(web::post().to(locations::create_location))
                .route(web::get().to(locations::list_locations)),
        )
        .route("/blog", web::post().to(blog::create_blog_post))
        .route("/blog/{id}", web::get().to(blog::list_blog_posts));
}

/// Fallback for unmatched routes.
pub async fn route_not_found(req: HttpRequest) -> AppResult<HttpResponse> {
    Err(AppError::NotFound(format!(
        "No route for {} {}",
        req.method(),
        req.path()
    )))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use serde_json::{Value, json};

    use super::*;
    use crate::state::AppState;

    #[actix_web::test]
    async fn test_unknown_route_is_problem_json() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::in_memory()))
                .configure(configure_routes)
                .default_service(web::route().to(route_not_found)),
        )
        .await;

        let req = test::TestRequest::get().uri("/nope").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["title"], "Not Found");
        assert_eq!(body["detail"], "No route for GET /nope");
    }

    #[actix_web::test]
    async fn test_location_and_blog_round_trip() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::in_memory()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/locations")
            .set_json(json!({ "lat": 40.7, "long": -74.0 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let location: Value = test::read_body_json(resp).await;
        let location_id = location["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::post()
            .uri("/blog")
            .set_json(json!({
                "location_id": location_id,
                "user": "alice",
                "date": "2024-01-01",
                "time": "10:00",
                "text": "hi"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(resp).await;

        let req = test::TestRequest::get()
            .uri(&format!("/blog/{location_id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let posts: Value = test::read_body_json(resp).await;
        assert_eq!(posts, json!([created]));
        assert_eq!(posts[0]["user"], "alice");

        let req = test::TestRequest::get().uri("/blog/other-id").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "Error": "Not found" }));
    }
}
