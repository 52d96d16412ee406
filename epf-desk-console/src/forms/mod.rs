pub mod confirmation;
pub mod creation;

pub use confirmation::{ConfirmationForm, FieldChange, FormAction, FormField};
pub use creation::CreationForm;
