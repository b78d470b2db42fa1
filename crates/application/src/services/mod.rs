//! Application services
//!
//! The form controller drives the interactive flow; link building and the
//! share message are pure helpers it and the one-shot commands share.

mod form_controller;
mod form_settings;
mod link_builder;
mod share_message;

pub use form_controller::{FormController, FormSnapshot, GenerateOutcome};
pub use form_settings::{FormSettings, StaleResponsePolicy};
pub use link_builder::{
    NINETY_NINE_LINK_BASE, RideEndpoint, UBER_LINK_BASE, build_link, build_link_for_fields,
};
pub use share_message::{WHATSAPP_SHARE_BASE, share_message, whatsapp_share_url};
