use poem::{EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing};
use poem_openapi::OpenApiService;

use crate::{
    api::security::ExpectedToken, config::app_config::AppConfig,
    setup::dependency_injection::DependencyContainer,
};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let api_service = OpenApiService::new(
            (container.health_api, container.product_api),
            "Product Catalog API",
            "0.1.0",
        )
        .server(format!("http://{}", addr));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        let app = Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .data(ExpectedToken(config.security.api_token))
            .with(config.cors)
            .with(Tracing);
        tracing::info!(%addr, "server running; Swagger UI at /docs, OpenAPI JSON at /openapi.json");
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
