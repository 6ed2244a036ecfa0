//! Location handlers.

use actix_web::{HttpResponse, web};

use geoblog_core::domain::Location;
use geoblog_core::ports::BaseRepository;
use geoblog_shared::dto::{CreateLocationRequest, LocationResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_response(location: Location) -> LocationResponse {
    LocationResponse {
        id: location.id.to_string(),
        lat: location.lat,
        long: location.long,
    }
}

/// POST /locations
pub async fn create_location(
    state: web::Data<AppState>,
    body: web::Json<CreateLocationRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let (Some(lat), Some(long)) = (req.lat, req.long) else {
        return Err(AppError::missing_fields(&req.missing_fields()));
    };

    let location = state.locations.create(Location::new(lat, long)).await?;
    tracing::info!(location_id = %location.id, "Location created");

    Ok(HttpResponse::Created().json(to_response(location)))
}

/// GET /locations
///
/// An empty collection is still a 200 with `[]`.
pub async fn list_locations(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let locations = state.locations.find_all().await?;

    Ok(HttpResponse::Ok().json(
        locations
            .into_iter()
            .map(to_response)
            .collect::<Vec<_>>(),
    ))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use serde_json::{Value, json};

    use crate::handlers::configure_routes;

    use super::*;

    #[actix_web::test]
    async fn test_create_location_echoes_coordinates() {
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

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["lat"], 40.7);
        assert_eq!(body["long"], -74.0);
        assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));
        assert_eq!(body.as_object().unwrap().len(), 3);
    }

    #[actix_web::test]
    async fn test_list_locations_returns_every_location() {
        let state = AppState::in_memory();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/locations").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!([]));

        let mut created = Vec::new();
        for (lat, long) in [(1.0, 2.0), (3.5, -4.5), (0.0, 0.0)] {
            let req = test::TestRequest::post()
                .uri("/locations")
                .set_json(json!({ "lat": lat, "long": long }))
                .to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;
            created.push(body);
        }

        let req = test::TestRequest::get().uri("/locations").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let listed = body.as_array().unwrap();

        assert_eq!(listed.len(), 3);
        for location in &created {
            assert!(listed.contains(location));
        }
    }

    #[actix_web::test]
    async fn test_create_location_missing_fields() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::in_memory()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/locations")
            .set_json(json!({ "lat": 40.7 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 400);
        assert_eq!(body["detail"], "long is required");
    }

    #[actix_web::test]
    async fn test_create_location_rejects_non_numbers() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::in_memory()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/locations")
            .set_json(json!({ "lat": "north", "long": -74.0 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["title"], "Bad Request");

        let req = test::TestRequest::get().uri("/locations").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!([]));
    }
}
