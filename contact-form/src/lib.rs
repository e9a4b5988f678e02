//! State and submit workflow for the contact page, kept apart from the UI
//! toolkit so it can be driven by the Yew page and by tests alike.
//!
//! The page owns a [`ContactForm`] through some [`FormStore`], shows
//! notifications through a [`Notifier`], and reaches the backend through a
//! [`ContactSubmitter`]. All three are handed to [`submit_draft`] explicitly.

mod form;
mod notify;
mod submit;

pub use form::{
    ContactForm, FormAction, FormStore, MirroredStore, SubmissionStatus,
};
pub use notify::{Notification, Notifier, Variant};
pub use submit::{ContactSubmitter, SubmitOutcome, submit_draft};

pub use payloads::requests::{ContactField, ContactMessage};
