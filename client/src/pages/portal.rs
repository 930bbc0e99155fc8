//! Portal shell: header, the active view, the toast overlay.
//!
//! SYSTEM CONTEXT
//! ==============
//! The single route of the app. The view cursor lives in `ViewState`; the
//! body is re-rendered only when `current` changes, so toggling the mobile
//! menu does not remount (and reset) an open form.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::toast::ToastOverlay;
use crate::pages::content_request::ContentRequestPage;
use crate::pages::home::HomePage;
use crate::pages::problem_report::ProblemReportPage;
use crate::pages::suggestions::SuggestionsPage;
use crate::state::view::{ViewId, ViewState};

/// Component for a view id. Mounting a form creates its state afresh.
pub fn render_view(id: ViewId) -> AnyView {
    match id {
        ViewId::Home => view! { <HomePage/> }.into_any(),
        ViewId::ContentRequest => view! { <ContentRequestPage/> }.into_any(),
        ViewId::ProblemReport => view! { <ProblemReportPage/> }.into_any(),
        ViewId::Suggestions => view! { <SuggestionsPage/> }.into_any(),
    }
}

#[component]
pub fn PortalPage() -> impl IntoView {
    let view_state = expect_context::<RwSignal<ViewState>>();
    let current = Memo::new(move |_| view_state.with(|v| v.current));

    view! {
        <div class="portal">
            <Header/>
            <main class="portal__main" data-view=move || current.get().as_str()>
                {move || render_view(current.get())}
            </main>
            <ToastOverlay/>
        </div>
    }
}
