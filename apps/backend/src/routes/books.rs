use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::db::with_session;
use crate::error::AppError;
use crate::errors::DomainError;
use crate::extractors::{BookListQuery, IdPath, ValidatedJson, ValidatedQuery};
use crate::repos::authors;
use crate::repos::books::{self, Book, BookCreate};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct BookResponse {
    pub id: i64,
    pub title: String,
    pub summary: Option<String>,
    pub publication_date: Date,
    pub author_id: i64,
}

impl From<Book> for BookResponse {
    fn from(value: Book) -> Self {
        Self {
            id: value.id,
            title: value.title,
            summary: value.summary,
            publication_date: value.publication_date,
            author_id: value.author_id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateBookRequest {
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    pub publication_date: Date,
    pub author_id: i64,
}

async fn list_books(
    query: ValidatedQuery<BookListQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let page = query.page()?;
    let author_id = query.author_id;

    let books = with_session(&app_state, move |session| {
        Box::pin(async move {
            books::list(session, author_id, page)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    let body: Vec<BookResponse> = books.into_iter().map(BookResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

async fn get_book(book_id: IdPath, app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let IdPath(book_id) = book_id;

    let book = with_session(&app_state, move |session| {
        Box::pin(async move {
            books::find_by_id(session, book_id)
                .await
                .map_err(AppError::from)?
                .ok_or_else(|| AppError::from(DomainError::book_not_found()))
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(BookResponse::from(book)))
}

async fn create_book(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateBookRequest>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();

    let book = with_session(&app_state, move |session| {
        Box::pin(async move {
            // Not atomic with the insert below.
            authors::require(session, payload.author_id)
                .await
                .map_err(AppError::from)?;

            let dto = BookCreate {
                title: payload.title,
                summary: payload.summary,
                publication_date: payload.publication_date,
                author_id: payload.author_id,
            };
            books::create(session, dto).await.map_err(AppError::from)
        })
    })
    .await?;

    tracing::info!(book_id = book.id, author_id = book.author_id, "book.created");

    Ok(HttpResponse::Ok().json(BookResponse::from(book)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(list_books))
            .route(web::post().to(create_book)),
    )
    .service(web::resource("/{id}/").route(web::get().to(get_book)));
}
