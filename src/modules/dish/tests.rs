use super::repository::{seed, Dish};
use crate::utils::testing::{router, send};
use axum::http::{Method, StatusCode};
use serde_json::{json, Number, Value};

fn spaghetti() -> Dish {
    Dish {
        id: String::from("d1"),
        name: String::from("Dolcelatte and chickpea spaghetti"),
        description: String::from("Spaghetti topped with a blend of dolcelatte and fresh chickpeas"),
        price: Number::from(19),
        image_url: String::from("https://example.com/spaghetti.jpg"),
    }
}

fn valid_body() -> Value {
    json!({
        "data": {
            "name": "Falafel and tahini bagel",
            "description": "A warm bagel filled with falafel and tahini",
            "price": 6,
            "image_url": "https://example.com/bagel.jpg",
        }
    })
}

#[tokio::test]
async fn lists_every_dish() {
    let app = router(seed(), vec![]);

    let (status, body) = send(&app, Method::GET, "/dishes", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(seed().len()));
}

#[tokio::test]
async fn reads_a_dish_by_id() {
    let app = router(vec![spaghetti()], vec![]);

    let (status, body) = send(&app, Method::GET, "/dishes/d1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!(spaghetti()));
}

#[tokio::test]
async fn reading_an_unknown_dish_is_not_found() {
    let app = router(vec![spaghetti()], vec![]);

    let (status, body) = send(&app, Method::GET, "/dishes/nope", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], json!(404));
    assert_eq!(body["message"], json!("Dish id not found: nope"));
}

#[tokio::test]
async fn creates_a_dish_with_a_fresh_id() {
    let app = router(vec![], vec![]);

    let (status, body) = send(&app, Method::POST, "/dishes", Some(valid_body())).await;

    assert_eq!(status, StatusCode::CREATED);
    let id = body["data"]["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());
    assert_eq!(
        body["data"]["description"],
        json!("A warm bagel filled with falafel and tahini")
    );

    let (status, listed) = send(&app, Method::GET, "/dishes", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["data"][0]["id"], json!(id));
}

#[tokio::test]
async fn integer_prices_echo_unchanged() {
    let app = router(vec![spaghetti()], vec![]);

    let (status, created) = send(&app, Method::POST, "/dishes", Some(valid_body())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["data"]["price"], json!(6));
    assert!(created["data"]["price"].is_u64());

    let mut body = valid_body();
    body["data"]["price"] = json!(12.5);
    let (status, updated) = send(&app, Method::PUT, "/dishes/d1", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["data"]["price"], json!(12.5));
}

#[tokio::test]
async fn creating_a_dish_without_a_price_is_rejected() {
    let app = router(vec![], vec![]);
    let mut body = valid_body();
    body["data"]
        .as_object_mut()
        .unwrap()
        .remove("price");

    let (status, body) = send(&app, Method::POST, "/dishes", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Dish must include a price"));
}

#[tokio::test]
async fn creating_a_dish_with_a_non_positive_price_is_rejected() {
    let app = router(vec![], vec![]);

    for price in [json!(0), json!(-1)] {
        let mut body = valid_body();
        body["data"]["price"] = price;

        let (status, body) = send(&app, Method::POST, "/dishes", Some(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["message"],
            json!("Dish must have a price that is an integer greater than 0")
        );
    }

    let (_, listed) = send(&app, Method::GET, "/dishes", None).await;
    assert_eq!(listed["data"], json!([]));
}

#[tokio::test]
async fn a_body_without_data_fails_the_first_check() {
    let app = router(vec![], vec![]);

    let (status, body) = send(&app, Method::POST, "/dishes", Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Dish must include a name"));
}

#[tokio::test]
async fn updates_a_dish_in_place() {
    let app = router(vec![spaghetti()], vec![]);
    let mut body = valid_body();
    body["data"]["id"] = json!("d1");

    let (status, updated) = send(&app, Method::PUT, "/dishes/d1", Some(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["data"]["id"], json!("d1"));
    assert_eq!(updated["data"]["name"], json!("Falafel and tahini bagel"));

    let (_, read) = send(&app, Method::GET, "/dishes/d1", None).await;
    assert_eq!(read["data"], updated["data"]);
}

#[tokio::test]
async fn update_keeps_the_route_id_when_the_body_has_none() {
    let app = router(vec![spaghetti()], vec![]);

    let (status, updated) = send(&app, Method::PUT, "/dishes/d1", Some(valid_body())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["data"]["id"], json!("d1"));
}

#[tokio::test]
async fn updating_with_a_mismatched_id_is_rejected() {
    let app = router(vec![spaghetti()], vec![]);
    let mut body = valid_body();
    body["data"]["id"] = json!("d2");

    let (status, body) = send(&app, Method::PUT, "/dishes/d1", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        json!("Dish id does not match route id. Dish: d2, Route: d1")
    );
}

#[tokio::test]
async fn updating_an_unknown_dish_is_not_found_before_validation() {
    let app = router(vec![], vec![]);

    let (status, body) = send(&app, Method::PUT, "/dishes/ghost", Some(json!({}))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("Dish id not found: ghost"));
}

#[tokio::test]
async fn updating_with_a_string_price_is_rejected() {
    let app = router(vec![spaghetti()], vec![]);
    let mut body = valid_body();
    body["data"]["price"] = json!("17");

    let (status, body) = send(&app, Method::PUT, "/dishes/d1", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        json!("Dish must have a price that is an integer greater than 0")
    );
}

#[tokio::test]
async fn dishes_cannot_be_deleted() {
    let app = router(vec![spaghetti()], vec![]);

    let (status, _) = send(&app, Method::DELETE, "/dishes/d1", None).await;
    assert!(status.is_client_error());

    let (status, _) = send(&app, Method::GET, "/dishes/d1", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    let app = router(vec![], vec![]);
    let request = Request::builder()
        .method(Method::POST)
        .uri("/dishes")
        .header("content-type", "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_paths_are_not_found() {
    let app = router(vec![], vec![]);

    let (status, body) = send(&app, Method::GET, "/menus", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("Path not found: /menus"));
}
