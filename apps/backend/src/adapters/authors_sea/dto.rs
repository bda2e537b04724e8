//! DTOs for authors_sea adapter.

/// DTO for creating a new author.
#[derive(Debug, Clone)]
pub struct AuthorCreate {
    pub name: String,
    pub bio: Option<String>,
}

impl AuthorCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bio: None,
        }
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }
}
