use crate::domain::user::value_objects::{UserId, Username};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
}

impl NewUser {
    pub fn new(username: Username) -> Self {
        Self { username }
    }
}
