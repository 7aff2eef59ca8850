use actix_files::{Files, NamedFile};
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer, Result};
use once_cell::sync::Lazy;
use rustls::{
    pki_types::{CertificateDer, PrivateKeyDer, PrivatePkcs8KeyDer},
    server::ServerConfig,
};
use rustls_pemfile::{certs, pkcs8_private_keys};
use std::{env, fs::File, io::BufReader, path::Path, path::PathBuf};

/* ---------- dev TLS ------------------------------------------------------ */

fn build_tls_config() -> ServerConfig {
    let cert_path = env::var("YOGA_TLS_CERT").unwrap_or_else(|_| "certs/dev-cert.pem".into());
    let key_path = env::var("YOGA_TLS_KEY").unwrap_or_else(|_| "certs/dev-key.pem".into());

    let mut r = BufReader::new(File::open(&cert_path).expect("open cert"));
    let certs: Vec<CertificateDer<'static>> =
        certs(&mut r).collect::<std::result::Result<_, _>>().expect("parse cert");

    let mut r = BufReader::new(File::open(&key_path).expect("open key"));
    let key: PrivatePkcs8KeyDer<'static> = pkcs8_private_keys(&mut r)
        .next()
        .expect("one key")
        .expect("valid pkcs8 key");

    ServerConfig::builder()
        .with_no_client_auth()
        .with_single_cert(certs, PrivateKeyDer::Pkcs8(key))
        .expect("TLS config")
}

static TLS_CFG: Lazy<ServerConfig> = Lazy::new(build_tls_config);

/* ---------- SPA fallback ------------------------------------------------- */

// Deep links (/login, /sessions/detail/3, /me, ...) are client-side routes;
// anything that is not a real file gets index.html.
async fn spa_fallback(req: HttpRequest, dist: web::Data<PathBuf>) -> Result<HttpResponse> {
    Ok(NamedFile::open(dist.join("index.html"))?.into_response(&req))
}

/* ---------- main --------------------------------------------------------- */

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // bundle produced by `trunk build` in frontend/
    let dist_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../frontend/dist");
    println!("Serving the yoga app from {}", dist_dir.display());

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(dist_dir.clone()))
            .service(Files::new("/", &dist_dir).index_file("index.html"))
            .default_service(web::to(spa_fallback))
    })
    .bind_rustls_0_23(("0.0.0.0", 8444), TLS_CFG.clone())?
    .run()
    .await
}
