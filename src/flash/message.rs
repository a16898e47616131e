// SPDX-License-Identifier: MPL-2.0
//! The flash message widget.
//!
//! `FlashMessage` owns the observable message text and CSS class, applies new
//! messages synchronously, and schedules the optional reset on the tokio
//! runtime. Timers only hold a weak reference to the widget, so dropping the
//! last handle cancels everything still pending.

use super::{Observable, ResetPolicy, Severity, TextSource};
use crate::config::{Config, DEFAULT_MESSAGE_CLASS};
use crate::error::{Error, Result};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Snapshot of what a view should currently render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashState {
    pub message: String,
    pub message_class: String,
}

impl Default for FlashState {
    fn default() -> Self {
        Self {
            message: String::new(),
            message_class: DEFAULT_MESSAGE_CLASS.to_owned(),
        }
    }
}

/// Whether the widget is currently displaying anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Empty message with the default class.
    #[default]
    Idle,
    /// A message or a non-default class is set.
    Showing,
}

/// Bookkeeping for scheduled resets.
#[derive(Debug, Default)]
struct Schedule {
    /// Bumped on every mutation; a reset only applies to its own generation
    /// when pending resets are cancellable.
    generation: u64,
    pending: Vec<(u64, JoinHandle<()>)>,
    runtime: Option<Handle>,
}

impl Schedule {
    fn next_generation(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    fn cancel_all(&mut self) {
        for (generation, handle) in self.pending.drain(..) {
            tracing::trace!(generation, "cancelled pending flash reset");
            handle.abort();
        }
    }
}

#[derive(Debug)]
struct Inner {
    message: Observable<String>,
    message_class: Observable<String>,
    snapshot: Observable<FlashState>,
    policy: ResetPolicy,
    config: Config,
    schedule: Mutex<Schedule>,
}

impl Inner {
    fn lock_schedule(&self) -> MutexGuard<'_, Schedule> {
        self.schedule.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Publishes the message, then the class, then the combined snapshot.
    fn apply(&self, message: String, message_class: &str) {
        let state = FlashState {
            message,
            message_class: message_class.to_owned(),
        };
        self.message.set(state.message.clone());
        self.message_class.set(state.message_class.clone());
        self.snapshot.set(state);
    }

    /// Starts a new generation, dropping pending resets if the policy says so.
    fn begin_change(&self, schedule: &mut Schedule) -> u64 {
        if self.policy.cancels_pending() {
            schedule.cancel_all();
        }
        schedule.next_generation()
    }

    /// Runs when a reset timer elapses.
    fn expire(&self, generation: u64) {
        let mut schedule = self.lock_schedule();
        schedule.pending.retain(|(g, _)| *g != generation);
        if self.policy.cancels_pending() && schedule.generation != generation {
            tracing::trace!(generation, "skipped stale flash reset");
            return;
        }
        tracing::debug!(generation, "flash message reset");
        self.apply(String::new(), DEFAULT_MESSAGE_CLASS);
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        self.schedule
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .cancel_all();
    }
}

/// A user-visible status message with an optional timed reset.
///
/// Cloning yields another handle to the same widget.
#[derive(Debug, Clone)]
pub struct FlashMessage {
    inner: Arc<Inner>,
}

impl FlashMessage {
    /// Creates an idle widget using the default configuration.
    ///
    /// If called from within a tokio runtime, that runtime runs the resets.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    /// Creates an idle widget with the given reset policy.
    #[must_use]
    pub fn with_policy(policy: ResetPolicy) -> Self {
        Self::from_config(&Config {
            reset_policy: Some(policy),
            ..Config::default()
        })
    }

    /// Creates an idle widget from a loaded configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let schedule = Schedule {
            runtime: Handle::try_current().ok(),
            ..Schedule::default()
        };
        Self {
            inner: Arc::new(Inner {
                message: Observable::new(String::new()),
                message_class: Observable::new(DEFAULT_MESSAGE_CLASS.to_owned()),
                snapshot: Observable::new(FlashState::default()),
                policy: config.reset_policy.unwrap_or_default(),
                config: config.clone(),
                schedule: Mutex::new(schedule),
            }),
        }
    }

    /// Uses `runtime` for scheduling resets instead of the one current at
    /// construction.
    #[must_use]
    pub fn with_runtime(self, runtime: Handle) -> Self {
        self.inner.lock_schedule().runtime = Some(runtime);
        self
    }

    /// The observable message text.
    #[must_use]
    pub fn message(&self) -> &Observable<String> {
        &self.inner.message
    }

    /// The observable CSS class.
    ///
    /// The class is published right after the message, so a view reading both
    /// from separate subscriptions can briefly pair the new message with the
    /// old class. Subscribe to [`FlashMessage::snapshot`] to get them together.
    #[must_use]
    pub fn message_class(&self) -> &Observable<String> {
        &self.inner.message_class
    }

    /// Message and class as one observable, updated once both are set.
    #[must_use]
    pub fn snapshot(&self) -> &Observable<FlashState> {
        &self.inner.snapshot
    }

    #[must_use]
    pub fn reset_policy(&self) -> ResetPolicy {
        self.inner.policy
    }

    /// Replaces the displayed message.
    ///
    /// An empty or missing `css_class` falls back to `text-info`. A non-zero
    /// `timeout` schedules a reset to the idle state once it elapses.
    ///
    /// The new state is visible as soon as this returns, even on error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoRuntime`] if a timeout was requested and no tokio
    /// runtime is available to run it.
    pub fn change_message<'a>(
        &self,
        text: impl Into<TextSource<'a>>,
        css_class: Option<&str>,
        timeout: Option<Duration>,
    ) -> Result<()> {
        let message = text.into().resolve();
        let message_class = css_class
            .filter(|class| !class.is_empty())
            .unwrap_or(DEFAULT_MESSAGE_CLASS);
        let timeout = timeout.filter(|delay| !delay.is_zero());

        let mut schedule = self.inner.lock_schedule();
        let generation = self.inner.begin_change(&mut schedule);
        tracing::debug!(generation, %message, message_class, ?timeout, "flash message changed");
        self.inner.apply(message, message_class);

        match timeout {
            Some(delay) => self.schedule_reset(&mut schedule, generation, delay),
            None => Ok(()),
        }
    }

    /// Shows `text` styled and timed according to `severity`.
    ///
    /// # Errors
    ///
    /// Same as [`FlashMessage::change_message`].
    pub fn flash<'a>(&self, severity: Severity, text: impl Into<TextSource<'a>>) -> Result<()> {
        let timeout = self.inner.config.auto_reset_for(severity);
        self.change_message(text, Some(severity.css_class()), timeout)
    }

    /// Resets to the idle state immediately.
    pub fn clear(&self) {
        let mut schedule = self.inner.lock_schedule();
        let generation = self.inner.begin_change(&mut schedule);
        tracing::debug!(generation, "flash message cleared");
        self.inner.apply(String::new(), DEFAULT_MESSAGE_CLASS);
    }

    /// Returns the current message and class as one consistent value.
    #[must_use]
    pub fn state(&self) -> FlashState {
        self.inner.snapshot.get()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.state() == FlashState::default() {
            Phase::Idle
        } else {
            Phase::Showing
        }
    }

    #[must_use]
    pub fn is_showing(&self) -> bool {
        self.phase() == Phase::Showing
    }

    /// Returns the number of resets that are scheduled but have neither fired
    /// nor been cancelled.
    #[must_use]
    pub fn pending_resets(&self) -> usize {
        self.inner.lock_schedule().pending.len()
    }

    fn schedule_reset(&self, schedule: &mut Schedule, generation: u64, delay: Duration) -> Result<()> {
        let captured = schedule.runtime.clone();
        let candidates = captured
            .into_iter()
            .map(|runtime| (runtime, false))
            .chain(Handle::try_current().ok().map(|runtime| (runtime, true)));

        for (runtime, is_current) in candidates {
            let widget: Weak<Inner> = Arc::downgrade(&self.inner);
            let handle = runtime.spawn(async move {
                tokio::time::sleep(delay).await;
                if let Some(inner) = widget.upgrade() {
                    inner.expire(generation);
                }
            });
            // A runtime that has shut down cancels new tasks on the spot.
            if handle.is_finished() {
                tracing::trace!(generation, is_current, "runtime rejected flash reset");
                continue;
            }
            if is_current {
                schedule.runtime = Some(runtime);
            }
            schedule.pending.push((generation, handle));
            return Ok(());
        }

        tracing::warn!(?delay, "no tokio runtime available, flash message will not reset");
        Err(Error::NoRuntime)
    }
}

impl Default for FlashMessage {
    fn default() -> Self {
        Self::new()
    }
}
