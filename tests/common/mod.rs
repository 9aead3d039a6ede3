//! In-process mock of the remote catalog, serving canned fixtures.

#![allow(dead_code)]

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;

use fakestore_storefront::api::{Product, Rating};

pub struct MockCatalog {
    addr: SocketAddr,
}

impl MockCatalog {
    /// Serve `products` on an ephemeral local port.
    pub async fn start(products: Vec<Product>) -> Self {
        let app = Router::new()
            .route("/products", get(list))
            .route("/products/{id}", get(by_id))
            .with_state(products);
        Self {
            addr: serve(app).await,
        }
    }

    /// A catalog whose responses claim to be JSON but do not match the
    /// product schema.
    pub async fn start_malformed() -> Self {
        let app = Router::new()
            .route("/products", get(garbage))
            .route("/products/{id}", get(garbage));
        Self {
            addr: serve(app).await,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

async fn serve(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn list(State(products): State<Vec<Product>>) -> Json<Vec<Product>> {
    Json(products)
}

async fn by_id(State(products): State<Vec<Product>>, Path(id): Path<u32>) -> Response {
    match products.iter().find(|product| product.id == id) {
        Some(product) => Json(product.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn garbage() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/json")],
        r#"{"unexpected": true}"#,
    )
}

pub fn fixture_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            title: "Fjallraven Foldsack Backpack".into(),
            price: 109.95,
            description: "Fits 15 inch laptops".into(),
            category: "men's clothing".into(),
            image: "https://example.com/backpack.png".into(),
            rating: Rating {
                rate: 3.9,
                count: 120,
            },
        },
        Product {
            id: 2,
            title: "Mens Casual Premium Slim Fit T-Shirt".into(),
            price: 22.3,
            description: "Slim-fitting style, contrast raglan sleeve".into(),
            category: "men's clothing".into(),
            image: "https://example.com/shirt.png".into(),
            rating: Rating {
                rate: 4.1,
                count: 259,
            },
        },
        Product {
            id: 3,
            title: "Mens Cotton Jacket".into(),
            price: 55.99,
            description: "Great outerwear jackets for spring and autumn".into(),
            category: "men's clothing".into(),
            image: "https://example.com/jacket.png".into(),
            rating: Rating {
                rate: 4.7,
                count: 500,
            },
        },
    ]
}
