pub mod endpoint;
pub mod form;
pub mod gallery;
pub mod model;
pub mod validity;

pub use form::{FormSnapshot, SubmitLabels};
pub use gallery::{CardEntry, GalleryState};
pub use model::{AvatarPatch, Card, Like, NewCard, Owner, Profile, ProfilePatch};
pub use validity::{form_is_valid, FieldReport};
