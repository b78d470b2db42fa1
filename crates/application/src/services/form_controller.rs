//! Ride link form controller
//!
//! Owns the two address fields, the provider toggle, the generated link and
//! the transient "copied" flag. Each field has its own debounce timer: every
//! text change aborts the pending timer and starts a new one, and when a
//! timer fires the field is searched if it has enough text and no confirmed
//! candidate.
//!
//! State lives behind a `parking_lot::Mutex` that is never held across an
//! `.await`. Observers subscribe to a revision counter that is bumped on
//! every change, including the ones that happen in background tasks.
//!
//! Search requests are never cancelled. Whether a response that lost the
//! race to a newer request is applied is decided by [`StaleResponsePolicy`].

use std::fmt;
use std::sync::Arc;

use domain::{AddressCandidate, FieldRole, FieldState, Provider};
use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::form_settings::{FormSettings, StaleResponsePolicy};
use super::link_builder::build_link_for_fields;
use super::share_message::whatsapp_share_url;
use crate::error::ApplicationError;
use crate::ports::{AddressSearchPort, ClipboardPort, UrlOpenerPort};

/// Point-in-time copy of everything the presentation layer renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    /// Active provider
    pub provider: Provider,
    /// Origin field
    pub origin: FieldState,
    /// Destination field
    pub destination: FieldState,
    /// Last generated link, kept until the next generation
    pub generated_link: Option<String>,
    /// A generation was refused since the last confirmation
    pub show_help: bool,
    /// The link was copied less than the reset interval ago
    pub copied: bool,
}

impl FormSnapshot {
    /// The field for `role`
    #[must_use]
    pub const fn field(&self, role: FieldRole) -> &FieldState {
        match role {
            FieldRole::Origin => &self.origin,
            FieldRole::Destination => &self.destination,
        }
    }

    /// Whether the generate action is enabled
    #[must_use]
    pub const fn can_generate(&self) -> bool {
        self.origin.is_confirmed() && self.destination.is_confirmed()
    }

    /// Whether the instructional notice should be displayed
    #[must_use]
    pub const fn help_visible(&self) -> bool {
        self.show_help && !self.can_generate()
    }
}

/// Result of the generate action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// A new link was built and stored
    Generated(String),
    /// A field is not confirmed; the notice is now shown
    NeedsSelection,
}

struct FieldSlot {
    field: FieldState,
    debounce: Option<JoinHandle<()>>,
    latest_request: u64,
}

impl FieldSlot {
    const fn new(role: FieldRole) -> Self {
        Self {
            field: FieldState::new(role),
            debounce: None,
            latest_request: 0,
        }
    }

    fn cancel_debounce(&mut self) {
        if let Some(handle) = self.debounce.take() {
            handle.abort();
        }
    }
}

struct FormState {
    provider: Provider,
    origin: FieldSlot,
    destination: FieldSlot,
    generated_link: Option<String>,
    show_help: bool,
    copied: bool,
    copied_reset: Option<JoinHandle<()>>,
}

impl FormState {
    const fn slot_mut(&mut self, role: FieldRole) -> &mut FieldSlot {
        match role {
            FieldRole::Origin => &mut self.origin,
            FieldRole::Destination => &mut self.destination,
        }
    }

    fn cancel_copied_reset(&mut self) {
        if let Some(handle) = self.copied_reset.take() {
            handle.abort();
        }
    }
}

struct Shared {
    search: Arc<dyn AddressSearchPort>,
    clipboard: Arc<dyn ClipboardPort>,
    opener: Arc<dyn UrlOpenerPort>,
    settings: FormSettings,
    state: Mutex<FormState>,
    revision: watch::Sender<u64>,
}

impl Shared {
    fn notify(&self) {
        self.revision.send_modify(|rev| *rev = rev.wrapping_add(1));
    }

    /// Move the field to `Searching` if it wants a search; returns the query
    /// and its sequence number
    fn begin_search(&self, role: FieldRole) -> Option<(String, u64)> {
        let min_chars = self.settings.min_query_chars;
        let mut state = self.state.lock();
        let slot = state.slot_mut(role);
        let query = slot.field.begin_search(min_chars)?;
        slot.latest_request += 1;
        let seq = slot.latest_request;
        drop(state);

        info!(%role, seq, "Searching addresses");
        self.notify();
        Some((query, seq))
    }

    async fn complete_search(&self, role: FieldRole, query: &str, seq: u64) {
        let results = self.search.search(query).await;

        let mut state = self.state.lock();
        let slot = state.slot_mut(role);
        if self.settings.stale_responses == StaleResponsePolicy::LatestOnly
            && seq != slot.latest_request
        {
            debug!(%role, seq, latest = slot.latest_request, "Dropping stale search response");
            return;
        }
        let outcome = slot.field.apply_results(results);
        drop(state);

        debug!(%role, seq, ?outcome, "Search response applied");
        self.notify();
    }
}

/// Drives the ride link form
pub struct FormController {
    shared: Arc<Shared>,
}

impl fmt::Debug for FormController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormController")
            .field("settings", &self.shared.settings)
            .field("revision", &*self.shared.revision.borrow())
            .finish_non_exhaustive()
    }
}

impl FormController {
    /// Create a controller with both fields empty
    pub fn new(
        search: Arc<dyn AddressSearchPort>,
        clipboard: Arc<dyn ClipboardPort>,
        opener: Arc<dyn UrlOpenerPort>,
        settings: FormSettings,
    ) -> Self {
        let (revision, _) = watch::channel(0);
        let state = FormState {
            provider: settings.default_provider,
            origin: FieldSlot::new(FieldRole::Origin),
            destination: FieldSlot::new(FieldRole::Destination),
            generated_link: None,
            show_help: false,
            copied: false,
            copied_reset: None,
        };

        Self {
            shared: Arc::new(Shared {
                search,
                clipboard,
                opener,
                settings,
                state: Mutex::new(state),
                revision,
            }),
        }
    }

    /// Receive a new revision every time the form changes
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.shared.revision.subscribe()
    }

    /// Copy the current state for rendering
    pub fn snapshot(&self) -> FormSnapshot {
        let state = self.shared.state.lock();
        FormSnapshot {
            provider: state.provider,
            origin: state.origin.field.clone(),
            destination: state.destination.field.clone(),
            generated_link: state.generated_link.clone(),
            show_help: state.show_help,
            copied: state.copied,
        }
    }

    /// Switch the active provider; an existing link is left as is
    pub fn set_provider(&self, provider: Provider) {
        self.shared.state.lock().provider = provider;
        debug!(%provider, "Provider selected");
        self.shared.notify();
    }

    /// Raw-text change for a field: restarts that field's debounce timer
    ///
    /// Must be called from within a tokio runtime.
    pub fn input_text(&self, role: FieldRole, text: impl Into<String>) {
        let mut state = self.shared.state.lock();
        let slot = state.slot_mut(role);
        if slot.field.set_text(text) {
            debug!(%role, "Edit dropped the confirmed address");
        }
        slot.cancel_debounce();
        slot.debounce = Some(self.spawn_debounce(role));
        drop(state);

        self.shared.notify();
    }

    /// Confirm the candidate at zero-based `index` (a click on the list)
    pub fn select_candidate(
        &self,
        role: FieldRole,
        index: usize,
    ) -> Result<AddressCandidate, ApplicationError> {
        let mut state = self.shared.state.lock();
        let chosen = state.slot_mut(role).field.select(index)?.clone();
        state.show_help = false;
        drop(state);

        info!(%role, place_id = chosen.place_id, "Address confirmed");
        self.shared.notify();
        Ok(chosen)
    }

    /// Activation key: confirm the top candidate if a list is shown
    pub fn activate(&self, role: FieldRole) -> Option<AddressCandidate> {
        let mut state = self.shared.state.lock();
        let chosen = state.slot_mut(role).field.activate().cloned()?;
        state.show_help = false;
        drop(state);

        info!(%role, place_id = chosen.place_id, "Top address confirmed");
        self.shared.notify();
        Some(chosen)
    }

    /// Explicit clear: empties text and confirmation together
    pub fn clear(&self, role: FieldRole) {
        let mut state = self.shared.state.lock();
        let slot = state.slot_mut(role);
        slot.cancel_debounce();
        slot.field.clear();
        drop(state);

        debug!(%role, "Field cleared");
        self.shared.notify();
    }

    /// Build the link for the active provider, or show the notice
    pub fn generate_link(&self) -> GenerateOutcome {
        let mut state = self.shared.state.lock();
        let built = build_link_for_fields(
            state.provider,
            &state.origin.field,
            &state.destination.field,
        );

        let outcome = match built {
            Ok(link) => {
                info!(provider = %state.provider, "Ride link generated");
                state.generated_link = Some(link.clone());
                state.copied = false;
                state.cancel_copied_reset();
                GenerateOutcome::Generated(link)
            },
            Err(e) => {
                debug!(error = %e, "Link generation refused");
                state.show_help = true;
                GenerateOutcome::NeedsSelection
            },
        };
        drop(state);

        self.shared.notify();
        outcome
    }

    /// Write the generated link to the clipboard and raise the "copied"
    /// flag for the configured interval
    ///
    /// Must be called from within a tokio runtime.
    pub fn copy_link(&self) -> Result<(), ApplicationError> {
        let link = self
            .shared
            .state
            .lock()
            .generated_link
            .clone()
            .ok_or(ApplicationError::NoLinkGenerated)?;

        self.shared.clipboard.copy(&link).inspect_err(|e| {
            warn!(error = %e, "Clipboard write failed");
        })?;

        let mut state = self.shared.state.lock();
        state.copied = true;
        state.cancel_copied_reset();
        state.copied_reset = Some(self.spawn_copied_reset());
        drop(state);

        self.shared.notify();
        Ok(())
    }

    /// The messaging composer URL for the generated link
    pub fn share_url(&self) -> Option<String> {
        let state = self.shared.state.lock();
        state
            .generated_link
            .as_deref()
            .map(|link| whatsapp_share_url(state.provider, link))
    }

    /// Open the messaging composer pre-filled with the generated link
    pub async fn share_link(&self) -> Result<String, ApplicationError> {
        let url = self.share_url().ok_or(ApplicationError::NoLinkGenerated)?;
        self.shared.opener.open(&url).await.inspect_err(|e| {
            warn!(error = %e, "Could not open share link");
        })?;
        info!("Share link opened");
        Ok(url)
    }

    fn spawn_debounce(&self, role: FieldRole) -> JoinHandle<()> {
        let shared = Arc::clone(&self.shared);
        let delay = shared.settings.debounce();

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let Some((query, seq)) = shared.begin_search(role) else {
                return;
            };
            // Detached: aborting this timer must not cancel the request.
            tokio::spawn(async move {
                shared.complete_search(role, &query, seq).await;
            });
        })
    }

    fn spawn_copied_reset(&self) -> JoinHandle<()> {
        let shared = Arc::clone(&self.shared);
        let delay = shared.settings.copied_reset();

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            {
                let mut state = shared.state.lock();
                state.copied = false;
                state.copied_reset = None;
            }
            shared.notify();
        })
    }
}

impl Drop for FormController {
    fn drop(&mut self) {
        let mut state = self.shared.state.lock();
        state.origin.cancel_debounce();
        state.destination.cancel_debounce();
        state.cancel_copied_reset();
    }
}
