use const_format::concatcp;
pub mod error;
pub mod payloads;
pub mod response_errors;

pub const API_BASE_PATH: &str = "/api/";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Object {
    Users,
    UserExercises,
    UserLogs,
}

impl Object {
    pub const fn path(&self) -> &'static str {
        use Object::*;
        match self {
            Users => concatcp!(API_BASE_PATH, "users"),
            UserExercises => concatcp!(API_BASE_PATH, "users/:_id/exercises"),
            UserLogs => concatcp!(API_BASE_PATH, "users/:_id/logs"),
        }
    }

    /// The path with the `:_id` segment filled in
    pub fn id_path<T: ToString>(&self, id: T) -> String {
        self.path().replace(":_id", &id.to_string())
    }
}
