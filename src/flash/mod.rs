// SPDX-License-Identifier: MPL-2.0
//! Flash message widget for transient user feedback.
//!
//! A flash message is a single status line (text plus CSS class) that a view
//! binds to. Setting a new message replaces the current one immediately; an
//! optional timeout clears it again.
//!
//! # Components
//!
//! - [`observable`] - `Observable<T>` value holder with change notification
//! - [`text_source`] - Literal or lazily computed message text
//! - [`severity`] - Bootstrap contextual classes and default durations
//! - [`reset_policy`] - How successive reset timers interact
//! - [`message`] - The `FlashMessage` widget itself
//!
//! # Usage
//!
//! ```no_run
//! use flash_message::{FlashMessage, TextSource};
//! use std::time::Duration;
//!
//! # async fn demo() -> flash_message::Result<()> {
//! let flash = FlashMessage::new();
//! let mut updates = flash.message().subscribe();
//!
//! flash.change_message("Saved", Some("text-success"), Some(Duration::from_secs(2)))?;
//! flash.change_message(TextSource::computed(|| format!("{} files", 3)), None, None)?;
//!
//! updates.changed().await.ok();
//! println!("{}", *updates.borrow());
//! # Ok(())
//! # }
//! ```

pub mod message;
pub mod observable;
pub mod reset_policy;
pub mod severity;
pub mod text_source;

pub use message::{FlashMessage, FlashState, Phase};
pub use observable::Observable;
pub use reset_policy::ResetPolicy;
pub use severity::Severity;
pub use text_source::TextSource;
