mod children;
mod list;
mod service;

pub use children::ListChildCategoriesQuery;
pub use list::{ListActiveCategoriesQuery, ListCategoriesQuery};
pub use service::CategoryQueryService;
