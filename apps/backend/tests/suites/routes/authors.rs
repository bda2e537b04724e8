use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use backend_test_support::unique_helpers::unique_author_name;
use serde_json::json;

use crate::common::{ids, read_json};
use crate::support::app_builder::create_test_app;
use crate::support::factory::create_author;
use crate::support::test_state::memory_state;

#[actix_web::test]
async fn create_then_get_round_trip() {
    let app = create_test_app(memory_state().await).await;

    let name = unique_author_name("Tolkien");
    let req = test::TestRequest::post()
        .uri("/author/")
        .set_json(json!({ "name": name, "bio": "Philologist" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let created = read_json(resp).await;
    assert_eq!(created["name"], name.as_str());
    assert_eq!(created["bio"], "Philologist");

    let id = created["id"].as_i64().expect("id");
    let req = test::TestRequest::get()
        .uri(&format!("/author/{id}/"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await, created);
}

#[actix_web::test]
async fn tolkien_scenario() {
    let app = create_test_app(memory_state().await).await;
    let body = json!({ "name": "Tolkien", "bio": "Author of The Hobbit" });

    let req = test::TestRequest::post()
        .uri("/author/")
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        read_json(resp).await,
        json!({ "id": 1, "name": "Tolkien", "bio": "Author of The Hobbit" })
    );

    let req = test::TestRequest::post()
        .uri("/author/")
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        StatusCode::BAD_REQUEST,
        "AUTHOR_NAME_EXISTS",
        Some("Author name already exists"),
    )
    .await;
}

#[actix_web::test]
async fn bio_is_optional_and_null_when_absent() {
    let app = create_test_app(memory_state().await).await;

    let created = create_author(&app, "Ursula K. Le Guin").await;
    assert!(created["bio"].is_null());
}

#[actix_web::test]
async fn duplicate_name_is_rejected_and_not_stored() {
    let app = create_test_app(memory_state().await).await;

    create_author(&app, "Tolkien").await;

    let req = test::TestRequest::post()
        .uri("/author/")
        .set_json(json!({ "name": "Tolkien", "bio": "again" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        StatusCode::BAD_REQUEST,
        "AUTHOR_NAME_EXISTS",
        Some("Author name already exists"),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/author/?limit=10")
        .to_request();
    let list = read_json(test::call_service(&app, req).await).await;
    assert_eq!(ids(&list).len(), 1);
}

#[actix_web::test]
async fn name_match_is_exact() {
    let app = create_test_app(memory_state().await).await;

    create_author(&app, "Tolkien").await;
    create_author(&app, "tolkien").await;
    create_author(&app, "Tolkien ").await;
}

#[actix_web::test]
async fn missing_author_is_404() {
    let app = create_test_app(memory_state().await).await;

    let req = test::TestRequest::get().uri("/author/999/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        StatusCode::NOT_FOUND,
        "AUTHOR_NOT_FOUND",
        Some("Author id= 999 not found"),
    )
    .await;
}

#[actix_web::test]
async fn list_defaults_and_paging() {
    let app = create_test_app(memory_state().await).await;

    let mut created = Vec::new();
    for n in 0..5 {
        let author = create_author(&app, &format!("Author {n}")).await;
        created.push(author["id"].as_i64().expect("id"));
    }

    let req = test::TestRequest::get().uri("/author/").to_request();
    let list = read_json(test::call_service(&app, req).await).await;
    assert_eq!(ids(&list), created[..3].to_vec());

    let req = test::TestRequest::get()
        .uri("/author/?limit=2&offset=3")
        .to_request();
    let list = read_json(test::call_service(&app, req).await).await;
    assert_eq!(ids(&list), created[3..5].to_vec());

    let req = test::TestRequest::get()
        .uri("/author/?offset=10")
        .to_request();
    let list = read_json(test::call_service(&app, req).await).await;
    assert!(ids(&list).is_empty());

    let req = test::TestRequest::get().uri("/author/?limit=0").to_request();
    let list = read_json(test::call_service(&app, req).await).await;
    assert!(ids(&list).is_empty());
}

#[actix_web::test]
async fn list_order_is_stable() {
    let app = create_test_app(memory_state().await).await;
    for n in 0..4 {
        create_author(&app, &format!("Writer {n}")).await;
    }

    let req = test::TestRequest::get().uri("/author/?limit=10").to_request();
    let first = read_json(test::call_service(&app, req).await).await;
    let req = test::TestRequest::get().uri("/author/?limit=10").to_request();
    let second = read_json(test::call_service(&app, req).await).await;
    assert_eq!(first, second);
}

#[actix_web::test]
async fn negative_pagination_is_422() {
    let app = create_test_app(memory_state().await).await;

    for (uri, detail) in [
        ("/author/?limit=-1", "limit must be >= 0"),
        ("/author/?offset=-5", "offset must be >= 0"),
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details_from_service_response(
            resp,
            StatusCode::UNPROCESSABLE_ENTITY,
            "INVALID_PAGINATION",
            Some(detail),
        )
        .await;
    }
}

#[actix_web::test]
async fn non_integer_query_is_422() {
    let app = create_test_app(memory_state().await).await;

    let req = test::TestRequest::get()
        .uri("/author/?limit=lots")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        StatusCode::UNPROCESSABLE_ENTITY,
        "VALIDATION_ERROR",
        None,
    )
    .await;
}

#[actix_web::test]
async fn non_integer_id_is_422() {
    let app = create_test_app(memory_state().await).await;

    let req = test::TestRequest::get().uri("/author/abc/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        StatusCode::UNPROCESSABLE_ENTITY,
        "INVALID_ID",
        Some("Invalid id: abc"),
    )
    .await;
}

#[actix_web::test]
async fn invalid_body_is_422() {
    let app = create_test_app(memory_state().await).await;

    let bodies = [
        json!({ "bio": "no name" }),
        json!({ "name": 42 }),
        json!(["not", "an", "object"]),
    ];
    for body in bodies {
        let req = test::TestRequest::post()
            .uri("/author/")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details_from_service_response(
            resp,
            StatusCode::UNPROCESSABLE_ENTITY,
            "VALIDATION_ERROR",
            None,
        )
        .await;
    }

    let req = test::TestRequest::post()
        .uri("/author/")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
