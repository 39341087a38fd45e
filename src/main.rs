#![recursion_limit = "256"]

#[cfg(feature = "ssr")]
mod web;

#[cfg(feature = "ssr")]
fn init_tracing(config: &batavia::config::SiteConfig) -> std::io::Result<()> {
    use batavia::common::ConfigError;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .map_err(|e| std::io::Error::other(ConfigError::LogFilter(e.to_string())))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(std::io::Error::other)
}

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::web::Data;
    use actix_web::{App, HttpServer, middleware};
    use batavia::common::ConfigError;
    use batavia::config::SiteConfig;
    use batavia::frontend::{App as Site, SiteUrl, shell};
    use leptos::config::get_configuration;
    use leptos::prelude::*;
    use leptos_actix::{LeptosRoutes, generate_route_list};

    dotenvy::dotenv().ok();

    let config = SiteConfig::from_env().map_err(std::io::Error::other)?;
    init_tracing(&config)?;

    let conf = get_configuration(None)
        .map_err(|e| std::io::Error::other(ConfigError::Leptos(e.to_string())))?;
    let mut leptos_options = conf.leptos_options;
    if let Some(addr) = config.bind_addr {
        leptos_options.site_addr = addr;
    }
    let addr = leptos_options.site_addr;

    let security = web::middleware::SecurityHeaders::new().map_err(std::io::Error::other)?;

    tracing::info!(
        %addr,
        site_url = %config.site_url,
        static_dir = %config.static_dir.display(),
        "starting server"
    );

    HttpServer::new(move || {
        let routes = generate_route_list(Site);
        let leptos_options = leptos_options.clone();
        let site_root = leptos_options.site_root.to_string();
        let site_url = config.site_url.clone();

        App::new()
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            .service(Files::new("/logos", config.logos_dir()))
            .service(Files::new("/static", config.static_dir.clone()).prefer_utf8(true))
            .leptos_routes_with_context(
                routes,
                move || provide_context(SiteUrl(site_url.clone())),
                {
                    let leptos_options = leptos_options.clone();
                    move || shell(leptos_options.clone())
                },
            )
            .app_data(Data::new(leptos_options))
            .wrap(security.clone())
            .wrap(middleware::Logger::default())
    })
    .bind(addr)?
    .run()
    .await
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // The client is built as a library and started through `hydrate()`.
}
