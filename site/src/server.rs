use actix_files::{Files, NamedFile};
use actix_web::dev::{ServiceRequest, ServiceResponse, fn_service};
use actix_web::web;

use crate::config::SiteConfig;

/// Mounts the static routes:
/// ① `/assets` from the assets dir
/// ② everything else from the Trunk bundle
/// ③ unknown paths -> index.html so the client router picks the page (or its 404)
pub fn mount(cfg: &mut web::ServiceConfig, site: &SiteConfig) {
    let index = site.index_file();

    cfg.service(Files::new("/assets", &site.assets_dir))
        .service(
            Files::new("/", &site.dist_dir)
                .index_file("index.html")
                .default_handler(fn_service(move |req: ServiceRequest| {
                    let index = index.clone();
                    async move {
                        let (req, _) = req.into_parts();
                        log::debug!("spa fallback for {}", req.path());
                        let res = match NamedFile::open_async(&index).await {
                            Ok(file) => {
                                let res = file.into_response(&req);
                                ServiceResponse::new(req, res)
                            }
                            Err(err) => {
                                log::error!("cannot open {}: {err}", index.display());
                                ServiceResponse::from_err(err, req)
                            }
                        };
                        Ok::<_, actix_web::Error>(res)
                    }
                })),
        );
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use std::fs;
    use tempfile::TempDir;

    const INDEX: &str = "<!doctype html><title>CrossFire</title>";

    fn fixture() -> (TempDir, SiteConfig) {
        let dir = tempfile::tempdir().unwrap();
        let dist = dir.path().join("dist");
        let assets = dir.path().join("assets");
        fs::create_dir_all(&dist).unwrap();
        fs::create_dir_all(assets.join("images")).unwrap();

        fs::write(dist.join("index.html"), INDEX).unwrap();
        fs::write(dist.join("crossfire_ui.js"), "export default 1;").unwrap();
        fs::write(assets.join("images/logo.txt"), "flame").unwrap();

        let site = SiteConfig {
            host: "127.0.0.1".into(),
            port: 0,
            dist_dir: dist,
            assets_dir: assets,
        };
        (dir, site)
    }

    #[actix_web::test]
    async fn root_serves_index() {
        let (_dir, site) = fixture();
        let app = test::init_service(App::new().configure(|c| mount(c, &site))).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(&test::read_body(resp).await[..], INDEX.as_bytes());
    }

    #[actix_web::test]
    async fn bundle_files_are_served_directly() {
        let (_dir, site) = fixture();
        let app = test::init_service(App::new().configure(|c| mount(c, &site))).await;

        let req = test::TestRequest::get().uri("/crossfire_ui.js").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(&test::read_body(resp).await[..], b"export default 1;");
    }

    #[actix_web::test]
    async fn page_routes_and_unknown_paths_fall_back_to_index() {
        let (_dir, site) = fixture();
        let app = test::init_service(App::new().configure(|c| mount(c, &site))).await;

        for uri in ["/gallery", "/contact", "/no/such/page"] {
            let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(resp.status(), StatusCode::OK, "{uri}");
            assert_eq!(&test::read_body(resp).await[..], INDEX.as_bytes(), "{uri}");
        }
    }

    #[actix_web::test]
    async fn assets_are_mounted_under_assets() {
        let (_dir, site) = fixture();
        let app = test::init_service(App::new().configure(|c| mount(c, &site))).await;

        let req = test::TestRequest::get().uri("/assets/images/logo.txt").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(&test::read_body(resp).await[..], b"flame");
    }

    #[actix_web::test]
    async fn missing_index_is_an_error_not_a_panic() {
        let (_dir, site) = fixture();
        fs::remove_file(site.index_file()).unwrap();
        let app = test::init_service(App::new().configure(|c| mount(c, &site))).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/about").to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
