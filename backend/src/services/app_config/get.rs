use actix_web::{web, HttpResponse, Responder};

use common::config::ClientConfig;

/// Handler for `GET /app-config.json`.
pub async fn process(config: web::Data<ClientConfig>) -> impl Responder {
    HttpResponse::Ok().json(config.get_ref())
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};

    use common::config::{ClientConfig, CONFIG_PATH};

    use crate::services::app_config::configure_routes;

    #[actix_web::test]
    async fn serves_the_client_config() {
        let config = ClientConfig {
            api_base_url: "https://api.newra.test".to_string(),
            ..ClientConfig::default()
        };
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config.clone()))
                .service(configure_routes()),
        )
        .await;

        let request = test::TestRequest::get().uri(CONFIG_PATH).to_request();
        let served: ClientConfig = test::call_and_read_body_json(&app, request).await;
        assert_eq!(served, config);
    }

    #[actix_web::test]
    async fn only_get_is_routed() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ClientConfig::default()))
                .service(configure_routes()),
        )
        .await;

        let request = test::TestRequest::post().uri(CONFIG_PATH).to_request();
        let response = test::call_service(&app, request).await;
        assert!(response.status().is_client_error());
    }
}
