use super::UserCommandService;
use crate::{application::error::ApplicationResult, domain::user::UserId};

pub struct DeleteUserCommand {
    pub id: i64,
}

impl UserCommandService {
    /// Articles written by the user stay in place without an author.
    pub async fn delete_user(&self, command: DeleteUserCommand) -> ApplicationResult<()> {
        let id = UserId::new(command.id)?;
        self.user_repo.delete(id).await?;
        tracing::info!(user_id = id.0, "user deleted");
        Ok(())
    }
}
