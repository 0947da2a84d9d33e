use axum::body::Body;
use axum::http::{Request, StatusCode};
use brigade::api::{self, AppState};
use brigade::loader::{parse_menu, parse_stock, parse_tables};
use brigade::Restaurant;
use tower::util::ServiceExt;

const MENU_FEED: &str = "\
2
Bakery
2
Bread
1 101
Croissant
2 101 103
Drinks
1
Lemonade
1 102
";

const STOCK_FEED: &str = "\
5
101 Flour
2.0 10
102 Sugar
1.0 100
103 Butter
3.5 20
";

fn setup_test_app() -> axum::Router {
    let menu = parse_menu(MENU_FEED).expect("menu feed parses");
    let pantry = parse_stock(STOCK_FEED).expect("stock feed parses");
    let tables = parse_tables("2\n2 3\n1 4\n").expect("tables feed parses");
    let restaurant = Restaurant::open(menu, pantry, tables);
    api::create_router(AppState::new(restaurant))
}

async fn get_json(app: &axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health_and_ready() {
    let app = setup_test_app();

    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = get_json(&app, "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["dishes"], 3);
    assert_eq!(body["ingredients"], 3);
    assert_eq!(body["tables"], 2);
}

#[tokio::test]
async fn test_list_dishes_in_traversal_order_with_pricing() {
    let app = setup_test_app();
    let (status, body) = get_json(&app, "/v1/menu/dishes").await;
    assert_eq!(status, StatusCode::OK);

    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    // Croissant was fed after Bread, so it heads Bakery's traversal order.
    assert_eq!(names, vec!["Croissant", "Bread", "Lemonade"]);

    let bread = &body.as_array().unwrap()[1];
    assert_eq!(bread["category"], "Bakery");
    assert!((bread["price"].as_f64().unwrap() - 2.4).abs() < 1e-9);
    assert!((bread["profit"].as_f64().unwrap() - 0.4).abs() < 1e-9);
}

#[tokio::test]
async fn test_list_categories_in_load_order() {
    let app = setup_test_app();
    let (status, body) = get_json(&app, "/v1/menu/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!(["Bakery", "Drinks"]));
}

#[tokio::test]
async fn test_dishes_by_category() {
    let app = setup_test_app();

    let (status, body) = get_json(&app, "/v1/menu/categories/drinks/dishes").await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Lemonade"]);

    // Unknown categories yield an empty list rather than an error.
    let (status, body) = get_json(&app, "/v1/menu/categories/Seafood/dishes").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}
