//! # vigil-core
//!
//! Core types and traits for the vigil watchdog: gateway events, the
//! [`HistorySource`]/[`LogSink`] transport boundary, error types, and
//! tracing initialization. Transport-agnostic; used by vigil-handlers and
//! vigil-bot.

pub mod error;
pub mod gateway;
pub mod logger;
pub mod types;

pub use error::{Result, VigilError};
pub use gateway::{HistorySource, LogSink};
pub use logger::init_tracing;
pub use types::{AttachmentPayload, GatewayEvent, IncomingMessage};
