//! Alexa Smart Home directive relay.
//!
//! Receives a directive as a Lambda event, POSTs it unchanged to `BASE_URL`
//! and returns the backend's JSON answer, or an Alexa error envelope when the
//! backend rejects it.

pub mod config;
pub mod handler;
pub mod http;
pub mod logging;
pub mod models;
pub mod relay;
