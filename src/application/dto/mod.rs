pub mod articles;
pub mod categories;
pub mod serde_time;
pub mod users;

pub use articles::{ArticleDto, ArticleWithCategories};
pub use categories::CategoryDto;
pub use users::UserDto;
