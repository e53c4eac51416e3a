use actix_web::{App, HttpServer, middleware::Logger};
use anyhow::Context;

mod config;
mod server;

use config::SiteConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional; real env vars win
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let site = SiteConfig::from_env()?;
    log::info!(
        "serving {} (assets {}) on http://{}:{}",
        site.dist_dir.display(),
        site.assets_dir.display(),
        site.host,
        site.port
    );

    if !site.index_file().is_file() {
        log::warn!(
            "{} is missing; run `trunk build` in ui/ first",
            site.index_file().display()
        );
    }

    let bind = (site.host.clone(), site.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(|cfg| server::mount(cfg, &site))
    })
    .bind(bind.clone())
    .with_context(|| format!("binding {}:{}", bind.0, bind.1))?
    .run()
    .await
    .context("http server")
}
