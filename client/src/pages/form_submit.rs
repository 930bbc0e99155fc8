//! Submission wiring shared by the form pages.
//!
//! DESIGN
//! ======
//! `use_form_submit` owns the `Editing -> Submitting -> Editing` cycle of one
//! form instance. Validation failures never reach the network. Each attempt
//! gets a fresh idempotency key so the proxy can collapse duplicates.
//!
//! CANCELLATION
//! ============
//! The in-flight call is wrapped in `futures::future::abortable` and aborted
//! from `on_cleanup` when the form unmounts. Dropping the aborted future also
//! aborts the browser `fetch`. An aborted submission shows no toast.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::components::toast::notify;
use crate::forms::{SubmitPhase, SupportForm};
use crate::state::toast::{Toast, ToastState};

/// Two-way binding of one string field of a form signal.
pub(crate) fn field<F, G, S>(form: RwSignal<F>, get: G, set: S) -> (Signal<String>, Callback<String>)
where
    F: Send + Sync + 'static,
    G: Fn(&F) -> &String + Copy + Send + Sync + 'static,
    S: Fn(&mut F, String) + Copy + Send + Sync + 'static,
{
    let value = Signal::derive(move || form.with(|f| get(f).clone()));
    let on_change = Callback::new(move |next: String| form.update(|f| set(f, next)));
    (value, on_change)
}

/// Wire a form signal to the card proxy.
///
/// Returns the "submitting" flag for the submit button and the `on:submit`
/// handler for the `<form>`.
pub(crate) fn use_form_submit<F>(form: RwSignal<F>) -> (Signal<bool>, impl Fn(SubmitEvent) + Clone + 'static)
where
    F: SupportForm + Send + Sync + 'static,
{
    let toast = expect_context::<RwSignal<ToastState>>();
    let phase = RwSignal::new(SubmitPhase::Editing);

    #[cfg(feature = "hydrate")]
    let inflight = {
        let slot = std::sync::Arc::new(std::sync::Mutex::new(None::<futures::future::AbortHandle>));
        let on_unmount = std::sync::Arc::clone(&slot);
        on_cleanup(move || {
            if let Some(handle) = on_unmount.lock().ok().and_then(|mut s| s.take()) {
                handle.abort();
            }
        });
        slot
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if phase.get_untracked().is_submitting() {
            return;
        }

        let submitted_at = crate::util::clock::local_timestamp();
        let request = match form.with_untracked(|f| f.card_request(&submitted_at)) {
            Ok(request) => request,
            Err(message) => {
                notify(toast, Toast::error(message));
                return;
            }
        };
        if !phase.try_update(SubmitPhase::begin).unwrap_or(false) {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let idempotency_key = uuid::Uuid::new_v4();
            let (task, handle) = futures::future::abortable(async move {
                crate::net::api::create_card(&request, idempotency_key).await
            });
            if let Ok(mut slot) = inflight.lock() {
                *slot = Some(handle);
            }
            let inflight = std::sync::Arc::clone(&inflight);
            leptos::task::spawn_local(async move {
                let Ok(result) = task.await else {
                    log::info!("{} submission aborted on unmount", F::LIST.as_str());
                    return;
                };
                if let Ok(mut slot) = inflight.lock() {
                    slot.take();
                }
                if let Err(e) = &result {
                    log::warn!("{} submission failed: {e}", F::LIST.as_str());
                }
                let next = form.try_update(|f| f.settle(result.as_ref().map_err(String::as_str)));
                phase.try_update(SubmitPhase::finish);
                if let Some(next) = next {
                    notify(toast, next);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    };

    let submitting = Signal::derive(move || phase.get().is_submitting());
    (submitting, on_submit)
}
