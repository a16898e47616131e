// SPDX-License-Identifier: MPL-2.0
//! `flash_message` holds a transient, user-visible status message.
//!
//! A [`FlashMessage`] owns two observable fields, the message text and its
//! CSS class, which a view layer binds to. Messages can clear themselves after
//! a timeout scheduled on the tokio runtime.

pub mod config;
pub mod error;
pub mod flash;

pub use error::{Error, Result};
pub use flash::{FlashMessage, FlashState, Observable, Phase, ResetPolicy, Severity, TextSource};
