#![deny(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod error;
mod fetch;
mod menu;
mod parse;
mod render;

use std::{env, net::SocketAddr, str::FromStr};

use axum::{
    extract::State,
    http::{Method, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{Datelike, Local};
use reqwest::Client;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::compression::CompressionLayer;

use crate::fetch::make_client;
use crate::menu::{MenuResponse, RestaurantMenu};
use crate::parse::extract;

pub use error::Result;

const STUDENT_RESTAURANT: &str = "학생 식당";
const FACULTY_RESTAURANT: &str = "교직원 식당";

#[cfg(all(target_env = "musl", target_pointer_width = "64"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn menu_from_page(page: &str, restaurant: &str) -> RestaurantMenu {
    let items = extract(page, Local::now().weekday());
    RestaurantMenu {
        restaurant: restaurant.to_owned(),
        items,
    }
}

fn fetch_failed(restaurant: &str, e: &error::Error) -> Response {
    log::error!("failed to fetch {restaurant} menu board: {e}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "error": "Failed to fetch data" })),
    )
        .into_response()
}

async fn student_menu(State(client): State<Client>) -> Response {
    match fetch::student_menu_page(&client).await {
        Ok(page) => Json(MenuResponse {
            menus: vec![menu_from_page(&page, STUDENT_RESTAURANT)],
        })
        .into_response(),
        Err(e) => fetch_failed(STUDENT_RESTAURANT, &e),
    }
}

async fn faculty_menu(State(client): State<Client>) -> Response {
    match fetch::faculty_menu_page(&client).await {
        Ok(page) => Json(MenuResponse {
            menus: vec![menu_from_page(&page, FACULTY_RESTAURANT)],
        })
        .into_response(),
        Err(e) => fetch_failed(FACULTY_RESTAURANT, &e),
    }
}

async fn index(State(client): State<Client>) -> Html<String> {
    let pages = futures::future::try_join(
        fetch::student_menu_page(&client),
        fetch::faculty_menu_page(&client),
    )
    .await;
    let menus = match pages {
        Ok((student, faculty)) => vec![
            menu_from_page(&student, STUDENT_RESTAURANT),
            menu_from_page(&faculty, FACULTY_RESTAURANT),
        ],
        Err(e) => {
            tracing::warn!("menu boards unavailable, rendering placeholder page: {e}");
            Vec::new()
        }
    };
    Html(render::page(&menus))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> core::result::Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let client = make_client();
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = SocketAddr::from_str(format!("{host}:{port}").as_str()).unwrap();
    let compression_layer: CompressionLayer = CompressionLayer::new()
        .br(true)
        .deflate(true)
        .gzip(true)
        .zstd(true);
    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_origin(Any);

    let app = Router::new()
        .route("/", get(index))
        .route("/api/student-menu", get(student_menu))
        .route("/api/faculty-menu", get(faculty_menu))
        .with_state(client)
        .layer(cors_layer)
        .layer(compression_layer);
    let listener = TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("failed to listen on {addr}: {e}"));
    log::info!("listening on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
