//! Catalog behavior against a local HTTP server with the real client.

use std::thread;
use std::time::Duration;

use felis_api::CatApiClient;
use felis_catalog::BreedCatalog;
use felis_config::{CatApiConfig, ImagesConfig};
use pretty_assertions::assert_eq;

const BREEDS_BODY: &str = r#"[
    {
        "id": "abys",
        "name": "Abyssinian",
        "temperament": "Active, Energetic",
        "origin": "Egypt",
        "description": "The Abyssinian is easy to care for. A joy to have at home.",
        "life_span": "14 - 15",
        "energy_level": 5,
        "grooming": 1,
        "hairless": 0
    },
    {
        "id": "beng",
        "name": "Bengal",
        "temperament": "Alert, Agile",
        "origin": "United States",
        "description": "Bengals are a lot of fun to live with.",
        "life_span": "12 - 16",
        "energy_level": 5,
        "grooming": 1,
        "hairless": 0
    }
]"#;

const IMAGES_BODY: &str = r#"[
    {
        "id": "J8w3",
        "url": "https://cdn2.thecatapi.com/images/J8w3.jpg",
        "width": 1200,
        "height": 800
    }
]"#;

/// Serve the scripted bodies in order, recording each request path.
fn serve_script(bodies: Vec<&'static str>) -> (u16, thread::JoinHandle<Vec<String>>) {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind local server");
    let port = server
        .server_addr()
        .to_ip()
        .map(|a| a.port())
        .expect("tcp listen address");
    let handle = thread::spawn(move || {
        let mut seen = Vec::new();
        for body in bodies {
            let Ok(request) = server.recv() else { break };
            seen.push(request.url().to_string());
            let _ = request.respond(tiny_http::Response::from_string(body));
        }
        seen
    });
    (port, handle)
}

fn catalog_for(port: u16) -> BreedCatalog<CatApiClient> {
    let api = CatApiConfig {
        base_url: format!("http://127.0.0.1:{port}/v1"),
        api_key: String::new(),
        request_timeout_secs: 5,
    };
    let client = CatApiClient::new(&api, &ImagesConfig::default());
    BreedCatalog::new(client, Duration::from_secs(24 * 3600))
}

#[tokio::test]
async fn one_fetch_serves_every_read() {
    let (port, handle) = serve_script(vec![BREEDS_BODY]);
    let catalog = catalog_for(port);

    let breeds = catalog.all_breeds().await;
    assert_eq!(breeds.len(), 2);
    assert_eq!(breeds[0].display_name, "Abyssinian");
    assert_eq!(breeds[0].summary, "The Abyssinian is easy to care for.");

    assert_eq!(catalog.all_breeds().await.len(), 2);
    assert!(catalog.breed("bengal").await.is_some());

    let seen = handle.join().unwrap();
    assert_eq!(seen, vec!["/v1/breeds".to_string()]);
}

#[tokio::test]
async fn images_round_trip_resolves_slug() {
    let (port, handle) = serve_script(vec![BREEDS_BODY, IMAGES_BODY]);
    let catalog = catalog_for(port);

    let images = catalog.breed_images("abyssinian", 2).await;
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].url, "https://cdn2.thecatapi.com/images/J8w3.jpg");

    let seen = handle.join().unwrap();
    assert_eq!(seen[0], "/v1/breeds");
    assert_eq!(seen[1], "/v1/images/search?breed_ids=abys&limit=2");
}

#[tokio::test]
async fn dead_upstream_never_panics_reads() {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind local server");
    let port = server
        .server_addr()
        .to_ip()
        .map(|a| a.port())
        .expect("tcp listen address");
    drop(server);

    let catalog = catalog_for(port);
    assert!(catalog.all_breeds().await.is_empty());
    assert!(catalog.breed("any").await.is_none());
    assert!(catalog.search("any").await.is_empty());
    assert!(catalog.breed_images("any", 3).await.is_empty());
}
