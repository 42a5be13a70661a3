//! HTTP handlers for the public RSVP form and the admin guest list.

pub mod common;
pub mod guests;
pub mod rsvp;
