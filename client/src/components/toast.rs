//! Toast overlay and the `notify` entry point used by forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! One overlay is mounted by the shell. Anything that wants to tell the user
//! something calls [`notify`], which overwrites the single slot and arms a
//! dismiss timer bound to the returned generation.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState};
#[cfg(feature = "hydrate")]
use crate::state::toast::TOAST_DISMISS_AFTER;

/// Show `next`, replacing any visible toast, and schedule its dismissal.
pub fn notify(toast: RwSignal<ToastState>, next: Toast) {
    let generation = toast.try_update(|t| t.show(next.message, next.kind));

    #[cfg(feature = "hydrate")]
    {
        if let Some(generation) = generation {
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(TOAST_DISMISS_AFTER).await;
                toast.try_update(|t| t.expire(generation));
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = generation;
    }
}

/// Fixed top-right notification with a close button.
#[component]
pub fn ToastOverlay() -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();

    view! {
        <Show when=move || toast.with(|t| t.visible)>
            <div class=move || toast.with(|t| t.kind.class()) role="status" aria-live="polite">
                <span class="toast__icon" aria-hidden="true">{move || toast.with(|t| t.kind.icon())}</span>
                <span class="toast__message">{move || toast.with(|t| t.message.clone())}</span>
                <button class="toast__close" title="Fechar" on:click=move |_| toast.update(ToastState::hide)>
                    "✕"
                </button>
            </div>
        </Show>
    }
}
