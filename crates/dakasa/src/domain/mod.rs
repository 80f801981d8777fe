//! Domain logic independent of the terminal: validators, the step wizard,
//! the recovery session and the forms built from them.

pub mod forms;
pub mod recovery;
pub mod validators;
pub mod wizard;
