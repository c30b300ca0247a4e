mod uuid;
pub use self::uuid::*;

mod field_value;
pub use field_value::*;
