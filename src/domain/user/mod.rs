// src/domain/user/mod.rs
//! Account references. Only the identity and display name of a user are
//! stored here; everything else belongs to the account subsystem.
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewUser, User};
pub use repository::UserRepository;
pub use value_objects::{UserId, Username};
