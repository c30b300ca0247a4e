use serde::{Deserialize, Serialize};

use crate::{
    api::error::ValidationError,
    model::{
        validate::{require_text, required_message},
        NewUser, User, ValidateModel,
    },
    types::{FieldValue, Uuid},
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPayload {
    pub username: Option<FieldValue>,
}

impl ValidateModel for UserPayload {
    type Valid = NewUser;

    fn validate(self) -> Result<NewUser, ValidationError> {
        match require_text(self.username) {
            Some(username) => Ok(NewUser::new(username)),
            None => {
                let mut err = ValidationError::new("User");
                err.push("username", required_message("username"));
                Err(err)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedUser {
    pub username: String,
    #[serde(rename = "_id")]
    pub id: Uuid,
}

impl From<User> for CreatedUser {
    fn from(user: User) -> Self {
        let User { id, username } = user;
        Self { username, id }
    }
}

/// A user as it appears in the user listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
    pub exercises: Vec<Uuid>,
}

impl UserRecord {
    pub fn new(user: User, exercises: Vec<Uuid>) -> Self {
        let User { id, username } = user;
        Self {
            id,
            username,
            exercises,
        }
    }
}
