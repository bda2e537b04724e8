use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::db::with_session;
use crate::error::AppError;
use crate::errors::DomainError;
use crate::extractors::{AuthorListQuery, IdPath, ValidatedJson, ValidatedQuery};
use crate::repos::authors::{self, Author, AuthorCreate};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct AuthorResponse {
    pub id: i64,
    pub name: String,
    pub bio: Option<String>,
}

impl From<Author> for AuthorResponse {
    fn from(value: Author) -> Self {
        Self {
            id: value.id,
            name: value.name,
            bio: value.bio,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateAuthorRequest {
    pub name: String,
    #[serde(default)]
    pub bio: Option<String>,
}

async fn list_authors(
    query: ValidatedQuery<AuthorListQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let page = query.page()?;

    let authors = with_session(&app_state, move |session| {
        Box::pin(async move { authors::list(session, page).await.map_err(AppError::from) })
    })
    .await?;

    let body: Vec<AuthorResponse> = authors.into_iter().map(AuthorResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

async fn get_author(
    author_id: IdPath,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let IdPath(author_id) = author_id;

    let author = with_session(&app_state, move |session| {
        Box::pin(async move {
            authors::require(session, author_id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(AuthorResponse::from(author)))
}

async fn create_author(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateAuthorRequest>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();

    let author = with_session(&app_state, move |session| {
        Box::pin(async move {
            // Check-then-insert: concurrent creates with the same name can both pass.
            let existing = authors::find_by_name(session, &payload.name)
                .await
                .map_err(AppError::from)?;
            if existing.is_some() {
                return Err(AppError::from(DomainError::author_name_exists()));
            }

            let dto = AuthorCreate {
                name: payload.name,
                bio: payload.bio,
            };
            authors::create(session, dto).await.map_err(AppError::from)
        })
    })
    .await?;

    tracing::info!(author_id = author.id, "author.created");

    Ok(HttpResponse::Ok().json(AuthorResponse::from(author)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(list_authors))
            .route(web::post().to(create_author)),
    )
    .service(web::resource("/{id}/").route(web::get().to(get_author)));
}
