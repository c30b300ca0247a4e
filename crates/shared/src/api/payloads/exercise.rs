use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    api::error::ValidationError,
    model::{
        validate::{cast_date, cast_duration, require_text},
        Exercise, NewExercise, User, ValidateModel,
    },
    types::{FieldValue, Uuid},
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExercisePayload {
    pub description: Option<FieldValue>,
    pub duration: Option<FieldValue>,
    pub date: Option<FieldValue>,
}

impl ExercisePayload {
    /// Validates the payload, using `now` for a missing date
    pub fn validate_at(self, now: DateTime<Utc>) -> Result<NewExercise, ValidationError> {
        let mut err = ValidationError::new("Exercise");

        let description = require_text(self.description);
        if description.is_none() {
            err.push("description", "Description is required");
        }

        let duration = match cast_duration(self.duration.as_ref()) {
            Ok(duration) => Some(duration),
            Err(message) => {
                err.push("duration", message);
                None
            }
        };

        let date = match cast_date(self.date.as_ref(), now) {
            Ok(date) => Some(date),
            Err(message) => {
                err.push("date", message);
                None
            }
        };

        match (description, duration, date) {
            (Some(description), Some(duration), Some(date)) => Ok(NewExercise {
                description,
                duration,
                date,
            }),
            _ => Err(err),
        }
    }
}

impl ValidateModel for ExercisePayload {
    type Valid = NewExercise;

    fn validate(self) -> Result<NewExercise, ValidationError> {
        self.validate_at(Utc::now())
    }
}

/// Response to adding an exercise: the owning user plus the new exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
    pub date: String,
    pub duration: f64,
    pub description: String,
}

impl ExerciseResponse {
    pub fn new(user: User, exercise: Exercise) -> Self {
        Self {
            id: user.id,
            username: user.username,
            date: exercise.display_date(),
            duration: exercise.duration,
            description: exercise.description,
        }
    }
}
