pub mod case_studies;
pub mod check;
pub mod contact;
pub mod content;
pub mod dispatch;
pub mod schema;
pub mod shared;
pub mod validate;
