pub mod authors;
pub mod books;

pub use authors::Entity as Authors;
pub use books::Entity as Books;
