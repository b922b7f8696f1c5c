//! Phone dispatch protocol.
//!
//! Activating a phone row always navigates to the `tel:+1…` dial URI first.
//! On desktop-class hosts a call-options overlay follows after a short delay,
//! offering three actions: dial again, copy the number, or dismiss.
//!
//! The dispatcher owns all overlay state:
//!
//! - the delay is a [`ScheduledTask`]; a second dispatch cancels a pending
//!   overlay and schedules its own
//! - an overlay that is already open is replaced by the newer one
//! - at most one overlay is open at any time
//!
//! Everything the dispatcher does to the outside world goes through the
//! [`Host`] trait, so the protocol runs the same in a browser adapter, a
//! terminal, or a test with a recording host.
//!
//! # Example
//!
//! ```rust,ignore
//! let dispatcher = PhoneDispatcher::new(host, Capabilities::detect(platform, user_agent));
//! dispatcher.dispatch("(202) 456-1111").await;
//! // ... user clicks "Copy Phone Number"
//! dispatcher.handle_action(CallAction::CopyNumber).await;
//! ```

use crate::error::{Error, Result};
use crate::node::{Element, Node};
use async_trait::async_trait;
use civic_core::PhoneNumber;
use civic_core::config::DispatchSection;
use regex::Regex;
use std::future::Future;
use std::sync::{Arc, LazyLock};
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// Delay between the dial attempt and the call-options overlay.
pub const DEFAULT_OVERLAY_DELAY: Duration = Duration::from_millis(500);

/// Element id of the call-options overlay.
pub const OVERLAY_ID: &str = "call-options";

static MOBILE_USER_AGENT: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)Mobi|Android").ok());

/// Notice shown after a successful copy.
pub fn copied_notice(formatted: &str) -> String {
    format!("Phone number copied: {formatted}")
}

/// Notice shown when the number could not be copied.
pub fn copy_failed_notice(formatted: &str) -> String {
    format!("Copy failed. Please select and copy manually: {formatted}")
}

// ============================================================================
// Capabilities
// ============================================================================

/// What the host environment can do, supplied by the host at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// Desktop-class host where `tel:` links may not reach a phone.
    pub is_desktop_class: bool,
    /// The host can write to the clipboard.
    pub supports_clipboard: bool,
}

impl Capabilities {
    /// Create a capability descriptor.
    pub fn new(is_desktop_class: bool, supports_clipboard: bool) -> Self {
        Self {
            is_desktop_class,
            supports_clipboard,
        }
    }

    /// Derive capabilities from a platform string and user agent.
    ///
    /// Desktop-class means a Mac platform whose user agent is not mobile.
    /// Clipboard support is assumed; override it with
    /// [`with_clipboard`](Self::with_clipboard).
    ///
    /// ```
    /// use civic_render::dispatch::Capabilities;
    ///
    /// let mac = Capabilities::detect("MacIntel", "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_0)");
    /// assert!(mac.is_desktop_class);
    ///
    /// let iphone = Capabilities::detect("iPhone", "Mozilla/5.0 (iPhone) Mobile/15E148");
    /// assert!(!iphone.is_desktop_class);
    /// ```
    pub fn detect(platform: &str, user_agent: &str) -> Self {
        let is_mac = platform.to_uppercase().contains("MAC");
        let is_mobile = MOBILE_USER_AGENT
            .as_ref()
            .is_some_and(|re| re.is_match(user_agent));
        Self {
            is_desktop_class: is_mac && !is_mobile,
            supports_clipboard: true,
        }
    }

    /// Override clipboard support.
    pub fn with_clipboard(mut self, supports_clipboard: bool) -> Self {
        self.supports_clipboard = supports_clipboard;
        self
    }
}

// ============================================================================
// Overlay
// ============================================================================

/// The three actions the call-options overlay offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallAction {
    /// Navigate to the dial URI again.
    Retry,
    /// Copy the formatted number to the clipboard.
    CopyNumber,
    /// Close the overlay.
    Dismiss,
}

impl CallAction {
    /// Every action, in the order the overlay shows them.
    pub const ALL: [CallAction; 3] = [Self::Retry, Self::CopyNumber, Self::Dismiss];

    /// Value of the `data-action` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Retry => "retry",
            Self::CopyNumber => "copy",
            Self::Dismiss => "dismiss",
        }
    }

    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Retry => "Try FaceTime/Continuity Call",
            Self::CopyNumber => "Copy Phone Number",
            Self::Dismiss => "Cancel",
        }
    }

    /// Parse a `data-action` value.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.as_str() == name)
    }
}

/// A call-options overlay for one number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallOptions {
    number: PhoneNumber,
}

impl CallOptions {
    /// Overlay for `number`.
    pub fn new(number: PhoneNumber) -> Self {
        Self { number }
    }

    /// The number the overlay acts on.
    pub fn number(&self) -> &PhoneNumber {
        &self.number
    }

    /// Render the overlay: a dimmed full-viewport backdrop that dismisses on
    /// click, beneath a centred panel with the three actions.
    pub fn to_node(&self) -> Node {
        let backdrop = Element::new("div")
            .with_class("call-options-backdrop")
            .with_attr("data-action", CallAction::Dismiss.as_str());

        let panel = Element::new("div")
            .with_class("call-options-panel")
            .with_attr("role", "dialog")
            .with_attr("aria-modal", "true")
            .with_attr("aria-label", "Call options")
            .with_child(Element::new("h3").with_text("📞 Call Options"))
            .with_child(
                Element::new("p")
                    .with_child(Element::new("strong").with_text(self.number.formatted())),
            )
            .with_children(CallAction::ALL.iter().map(|action| {
                Element::new("button")
                    .with_attr("type", "button")
                    .with_class(format!("call-option call-option-{}", action.as_str()))
                    .with_attr("data-action", action.as_str())
                    .with_text(action.label())
            }))
            .with_child(
                Element::new("p")
                    .with_class("call-options-tip")
                    .with_text("Tip: On Mac, you can also use FaceTime or iPhone continuity features"),
            );

        Element::new("div")
            .with_id(OVERLAY_ID)
            .with_class("call-options")
            .with_child(backdrop)
            .with_child(panel)
            .into()
    }
}

// ============================================================================
// Host
// ============================================================================

/// The environment a dispatcher acts on.
#[async_trait]
pub trait Host: Send + Sync {
    /// Point the host's navigation target at `uri`.
    fn navigate(&self, uri: &str);

    /// Show the overlay.
    fn present_overlay(&self, overlay: &CallOptions);

    /// Remove the overlay.
    fn dismiss_overlay(&self);

    /// Write text to the clipboard.
    async fn write_clipboard(&self, text: &str) -> Result<()>;

    /// Show a short message to the user.
    fn notify(&self, message: &str);
}

// ============================================================================
// ScheduledTask
// ============================================================================

/// A future that runs after a delay unless cancelled first.
#[derive(Debug)]
pub struct ScheduledTask {
    handle: JoinHandle<()>,
}

impl ScheduledTask {
    /// Spawn `task` to run once `delay` has elapsed.
    pub fn after<F>(delay: Duration, task: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        });
        Self { handle }
    }

    /// Cancel the task if it has not run yet.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Whether the task has run or been cancelled.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

// ============================================================================
// PhoneDispatcher
// ============================================================================

/// Result of [`PhoneDispatcher::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Navigated to the dial URI; no overlay will follow.
    Dialed {
        /// The dial URI.
        uri: String,
    },
    /// Navigated to the dial URI; the overlay is scheduled.
    OverlayScheduled {
        /// The dial URI.
        uri: String,
    },
}

impl DispatchOutcome {
    /// The dial URI navigated to.
    pub fn uri(&self) -> &str {
        match self {
            Self::Dialed { uri } | Self::OverlayScheduled { uri } => uri,
        }
    }
}

/// Result of [`PhoneDispatcher::handle_action`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Navigated to the dial URI again and closed the overlay.
    Redialed {
        /// The dial URI.
        uri: String,
    },
    /// Copied the number and closed the overlay.
    Copied,
    /// The copy failed; the overlay stays open.
    CopyFailed,
    /// Closed the overlay.
    Dismissed,
    /// No overlay was open.
    NoOverlay,
}

#[derive(Debug, Default)]
struct OverlayState {
    generation: u64,
    pending: Option<ScheduledTask>,
    open: Option<OpenOverlay>,
}

#[derive(Debug)]
struct OpenOverlay {
    generation: u64,
    options: CallOptions,
}

/// Runs the phone dispatch protocol against a [`Host`].
pub struct PhoneDispatcher<H: Host + 'static> {
    host: Arc<H>,
    capabilities: Capabilities,
    overlay_delay: Duration,
    state: Arc<Mutex<OverlayState>>,
}

impl<H: Host + 'static> PhoneDispatcher<H> {
    /// Create a dispatcher with the default overlay delay.
    pub fn new(host: Arc<H>, capabilities: Capabilities) -> Self {
        Self {
            host,
            capabilities,
            overlay_delay: DEFAULT_OVERLAY_DELAY,
            state: Arc::new(Mutex::new(OverlayState::default())),
        }
    }

    /// Create a dispatcher using the `[dispatch]` config section.
    pub fn from_config(
        host: Arc<H>,
        capabilities: Capabilities,
        config: &DispatchSection,
    ) -> Self {
        Self::new(host, capabilities).with_overlay_delay(config.overlay_delay())
    }

    /// Overlay delay in use.
    pub fn overlay_delay(&self) -> Duration {
        self.overlay_delay
    }

    /// Override the overlay delay.
    pub fn with_overlay_delay(mut self, delay: Duration) -> Self {
        self.overlay_delay = delay;
        self
    }

    /// Host capabilities in use.
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Handle activation of a phone contact.
    pub async fn dispatch(&self, raw: &str) -> DispatchOutcome {
        let number = PhoneNumber::new(raw);
        let uri = number.dial_uri();
        if number.is_vanity() {
            log::warn!("Vanity number {raw} dials as {uri}");
        }
        log::debug!("Dialing {uri}");
        self.host.navigate(&uri);

        if !self.capabilities.is_desktop_class {
            return DispatchOutcome::Dialed { uri };
        }

        let mut state = self.state.lock().await;
        if let Some(previous) = state.pending.take() {
            log::debug!("Cancelling pending call options");
            previous.cancel();
        }
        state.generation += 1;
        let generation = state.generation;

        let options = CallOptions::new(number);
        let host = Arc::clone(&self.host);
        let shared = Arc::clone(&self.state);
        state.pending = Some(ScheduledTask::after(self.overlay_delay, async move {
            let mut state = shared.lock().await;
            if state.generation != generation {
                return;
            }
            state.pending = None;
            if state.open.take().is_some() {
                host.dismiss_overlay();
            }
            host.present_overlay(&options);
            state.open = Some(OpenOverlay {
                generation,
                options,
            });
        }));

        DispatchOutcome::OverlayScheduled { uri }
    }

    /// Handle one of the overlay's actions, including a backdrop click
    /// ([`CallAction::Dismiss`]).
    pub async fn handle_action(&self, action: CallAction) -> ActionOutcome {
        let (generation, number) = {
            let state = self.state.lock().await;
            match &state.open {
                Some(open) => (open.generation, open.options.number().clone()),
                None => {
                    log::debug!("Ignoring {} with no overlay open", action.as_str());
                    return ActionOutcome::NoOverlay;
                }
            }
        };

        match action {
            CallAction::Retry => {
                let uri = number.dial_uri();
                self.host.navigate(&uri);
                self.close(generation).await;
                ActionOutcome::Redialed { uri }
            }
            CallAction::CopyNumber => {
                let formatted = number.formatted();
                match self.copy(formatted).await {
                    Ok(()) => {
                        self.host.notify(&copied_notice(formatted));
                        self.close(generation).await;
                        ActionOutcome::Copied
                    }
                    Err(e) => {
                        log::warn!("Clipboard write failed: {e}");
                        self.host.notify(&copy_failed_notice(formatted));
                        ActionOutcome::CopyFailed
                    }
                }
            }
            CallAction::Dismiss => {
                self.close(generation).await;
                ActionOutcome::Dismissed
            }
        }
    }

    /// Whether an overlay is currently shown.
    pub async fn is_overlay_open(&self) -> bool {
        self.state.lock().await.open.is_some()
    }

    /// Whether an overlay is scheduled but not yet shown.
    pub async fn is_overlay_pending(&self) -> bool {
        self.state
            .lock()
            .await
            .pending
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }

    /// The overlay currently shown, if any.
    pub async fn open_overlay(&self) -> Option<CallOptions> {
        self.state
            .lock()
            .await
            .open
            .as_ref()
            .map(|open| open.options.clone())
    }

    async fn copy(&self, text: &str) -> Result<()> {
        if !self.capabilities.supports_clipboard {
            return Err(Error::clipboard("clipboard is not available"));
        }
        self.host.write_clipboard(text).await
    }

    async fn close(&self, generation: u64) {
        let mut state = self.state.lock().await;
        if state
            .open
            .as_ref()
            .is_some_and(|open| open.generation == generation)
        {
            state.open = None;
            self.host.dismiss_overlay();
        }
    }
}
