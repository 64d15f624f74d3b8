//! Live-socket tests: real listener, real HTTP client, graceful shutdown.

use std::net::SocketAddr;
use std::time::Duration;

use localized_site::{HttpServer, Shutdown, SiteConfig};

async fn spawn_server(config: SiteConfig) -> (SocketAddr, Shutdown, tokio::task::JoinHandle<()>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config).unwrap();
    let server_shutdown = shutdown.subscribe();

    let handle = tokio::spawn(async move {
        server.run(listener, server_shutdown).await.unwrap();
    });

    (addr, shutdown, handle)
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_redirect_then_page_over_http() {
    let (addr, shutdown, handle) = spawn_server(SiteConfig::default()).await;
    let client = client();

    let res = client
        .get(format!("http://{addr}/"))
        .send()
        .await
        .expect("Server unreachable");
    assert_eq!(res.status(), 302);
    assert_eq!(res.headers()["location"], "/en/home");

    let res = client
        .get(format!("http://{addr}/de/privacy"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.headers()["content-language"], "de");
    let body = res.text().await.unwrap();
    assert!(body.contains("<h1>Datenschutz</h1>"));

    shutdown.trigger();
    tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("server did not stop after shutdown")
        .unwrap();
}

#[tokio::test]
async fn test_following_redirects_lands_on_localized_page() {
    let (addr, shutdown, handle) = spawn_server(SiteConfig::default()).await;
    let client = reqwest::Client::builder().no_proxy().build().unwrap();

    let res = client
        .get(format!("http://{addr}/contact"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.url().path(), "/en/contact");

    shutdown.trigger();
    let _ = tokio::time::timeout(Duration::from_secs(5), handle).await;
}
