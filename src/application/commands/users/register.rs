use super::UserCommandService;
use crate::{
    application::{dto::UserDto, error::ApplicationResult},
    domain::user::{NewUser, Username},
};

pub struct RegisterUserCommand {
    pub username: String,
}

impl UserCommandService {
    /// Records a user reference so articles can point at it as their author.
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username)?;
        let user = self.user_repo.insert(NewUser::new(username)).await?;
        tracing::info!(user_id = user.id.0, "user registered");
        Ok(user.into())
    }
}
