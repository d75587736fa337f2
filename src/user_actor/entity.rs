//! [`ActorEntity`] implementation for [`User`].

use super::error::UserError;
use crate::model::{User, UserCreate, UserId, UserUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;

fn check_username(username: &str) -> Result<(), UserError> {
    if username.trim().is_empty() {
        return Err(UserError::MissingUsername);
    }
    Ok(())
}

fn check_email(email: &str) -> Result<(), UserError> {
    if !email.contains('@') {
        return Err(UserError::InvalidEmail(email.to_string()));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = UserError;

    fn id(&self) -> UserId {
        self.id
    }

    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, UserError> {
        check_username(&params.username)?;
        check_email(&params.email)?;
        Ok(Self {
            id,
            username: params.username,
            email: params.email,
            created_at: Utc::now(),
        })
    }

    /// # Fields Updated
    /// - `username`
    /// - `email`
    async fn on_update(&mut self, update: UserUpdate, _ctx: &()) -> Result<(), UserError> {
        if let Some(username) = update.username {
            check_username(&username)?;
            self.username = username;
        }
        if let Some(email) = update.email {
            check_email(&email)?;
            self.email = email;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), UserError> {
        Ok(())
    }
}
