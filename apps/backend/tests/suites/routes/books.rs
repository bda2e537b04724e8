use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use serde_json::json;

use crate::common::{ids, read_json};
use crate::support::app_builder::create_test_app;
use crate::support::factory::{create_author, create_book};
use crate::support::test_state::memory_state;

#[actix_web::test]
async fn create_then_get_round_trip() {
    let app = create_test_app(memory_state().await).await;
    let author = create_author(&app, "Tolkien").await;
    let author_id = author["id"].as_i64().expect("id");

    let req = test::TestRequest::post()
        .uri("/book/")
        .set_json(json!({
            "title": "The Hobbit",
            "summary": "There and back again",
            "publication_date": "1937-09-21",
            "author_id": author_id,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let created = read_json(resp).await;
    assert_eq!(created["title"], "The Hobbit");
    assert_eq!(created["summary"], "There and back again");
    assert_eq!(created["publication_date"], "1937-09-21");
    assert_eq!(created["author_id"], author_id);

    let id = created["id"].as_i64().expect("id");
    let req = test::TestRequest::get()
        .uri(&format!("/book/{id}/"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await, created);
}

#[actix_web::test]
async fn book_for_missing_author_is_404_and_not_stored() {
    let app = create_test_app(memory_state().await).await;

    let req = test::TestRequest::post()
        .uri("/book/")
        .set_json(json!({
            "title": "The Hobbit",
            "publication_date": "1937-09-21",
            "author_id": 999,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        StatusCode::NOT_FOUND,
        "AUTHOR_NOT_FOUND",
        Some("Author id= 999 not found"),
    )
    .await;

    let req = test::TestRequest::get().uri("/book/").to_request();
    let list = read_json(test::call_service(&app, req).await).await;
    assert!(ids(&list).is_empty());
}

#[actix_web::test]
async fn missing_book_is_404() {
    let app = create_test_app(memory_state().await).await;

    let req = test::TestRequest::get().uri("/book/42/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        StatusCode::NOT_FOUND,
        "BOOK_NOT_FOUND",
        Some("Book not found"),
    )
    .await;
}

#[actix_web::test]
async fn list_filters_by_author() {
    let app = create_test_app(memory_state().await).await;
    let a = create_author(&app, "Author A").await["id"]
        .as_i64()
        .expect("id");
    let b = create_author(&app, "Author B").await["id"]
        .as_i64()
        .expect("id");

    let a1 = create_book(&app, "A one", a).await["id"].as_i64().expect("id");
    let b1 = create_book(&app, "B one", b).await["id"].as_i64().expect("id");
    let a2 = create_book(&app, "A two", a).await["id"].as_i64().expect("id");

    let req = test::TestRequest::get()
        .uri(&format!("/book/?author_id={a}"))
        .to_request();
    let list = read_json(test::call_service(&app, req).await).await;
    assert_eq!(ids(&list), vec![a1, a2]);

    let req = test::TestRequest::get()
        .uri(&format!("/book/?author_id={b}"))
        .to_request();
    let list = read_json(test::call_service(&app, req).await).await;
    assert_eq!(ids(&list), vec![b1]);

    let req = test::TestRequest::get().uri("/book/").to_request();
    let list = read_json(test::call_service(&app, req).await).await;
    assert_eq!(ids(&list), vec![a1, b1, a2]);

    let req = test::TestRequest::get()
        .uri("/book/?author_id=999")
        .to_request();
    let list = read_json(test::call_service(&app, req).await).await;
    assert!(ids(&list).is_empty());
}

#[actix_web::test]
async fn list_paging_with_filter() {
    let app = create_test_app(memory_state().await).await;
    let a = create_author(&app, "Prolific").await["id"]
        .as_i64()
        .expect("id");

    let mut created = Vec::new();
    for n in 0..5 {
        created.push(
            create_book(&app, &format!("Volume {n}"), a).await["id"]
                .as_i64()
                .expect("id"),
        );
    }

    let req = test::TestRequest::get()
        .uri(&format!("/book/?author_id={a}&limit=2&offset=1"))
        .to_request();
    let list = read_json(test::call_service(&app, req).await).await;
    assert_eq!(ids(&list), created[1..3].to_vec());

    let req = test::TestRequest::get().uri("/book/").to_request();
    let list = read_json(test::call_service(&app, req).await).await;
    assert_eq!(ids(&list), created[..3].to_vec());
}

#[actix_web::test]
async fn invalid_date_is_422() {
    let app = create_test_app(memory_state().await).await;
    let a = create_author(&app, "Dated").await["id"].as_i64().expect("id");

    for date in ["1937-13-01", "yesterday", "1937/09/21"] {
        let req = test::TestRequest::post()
            .uri("/book/")
            .set_json(json!({
                "title": "Bad date",
                "publication_date": date,
                "author_id": a,
            }))
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
}

#[actix_web::test]
async fn missing_required_fields_is_422() {
    let app = create_test_app(memory_state().await).await;

    let req = test::TestRequest::post()
        .uri("/book/")
        .set_json(json!({ "title": "No date or author" }))
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
async fn negative_offset_is_422() {
    let app = create_test_app(memory_state().await).await;

    let req = test::TestRequest::get().uri("/book/?offset=-1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        StatusCode::UNPROCESSABLE_ENTITY,
        "INVALID_PAGINATION",
        Some("offset must be >= 0"),
    )
    .await;
}
