mod check;
mod contact;

pub use check::CheckCommands;
pub use contact::{ContactCommands, SubmitArgs};
