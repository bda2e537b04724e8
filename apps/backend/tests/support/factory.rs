use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, Error};
use serde_json::{json, Value};

/// POST an author and return the created body. Panics on a non-200 response.
pub async fn create_author<S>(app: &S, name: &str) -> Value
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::post()
        .uri("/author/")
        .set_json(json!({ "name": name }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status().as_u16(), 200, "author create failed");
    test::read_body_json(resp).await
}

/// POST a book for `author_id` and return the created body.
pub async fn create_book<S>(app: &S, title: &str, author_id: i64) -> Value
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::post()
        .uri("/book/")
        .set_json(json!({
            "title": title,
            "publication_date": "2001-01-01",
            "author_id": author_id,
        }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status().as_u16(), 200, "book create failed");
    test::read_body_json(resp).await
}
