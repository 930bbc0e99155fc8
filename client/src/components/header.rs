//! Portal header: brand, wide navigation bar, narrow-layout dropdown.
//!
//! Both navigation lists render the same `ViewId::ALL` items and switch views
//! through the shared `ViewState`. Picking an item from the dropdown also
//! closes it. CSS decides which list is visible for the viewport width.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;

use crate::state::view::{ViewId, ViewState};

fn nav_item_class(base: &str, active: bool) -> String {
    if active { format!("{base} {base}--active") } else { base.to_owned() }
}

fn menu_toggle_glyph(open: bool) -> &'static str {
    if open { "✕" } else { "☰" }
}

#[component]
pub fn Header() -> impl IntoView {
    let view_state = expect_context::<RwSignal<ViewState>>();
    let current = move || view_state.with(|v| v.current);
    let menu_open = move || view_state.with(|v| v.menu_open);

    view! {
        <header class="portal-header">
            <div class="portal-header__inner">
                <div class="portal-header__bar">
                    <div class="portal-header__brand">
                        <span class="portal-header__logo" aria-hidden="true">"📺"</span>
                        <div>
                            <h1 class="portal-header__title">"Suporte IPTV"</h1>
                            <p class="portal-header__subtitle">"Sistema de Atendimento"</p>
                        </div>
                    </div>

                    <nav class="portal-nav portal-nav--wide">
                        {ViewId::ALL
                            .into_iter()
                            .map(|id| {
                                view! {
                                    <button
                                        class=move || nav_item_class("portal-nav__item", current() == id)
                                        on:click=move |_| view_state.update(|v| v.set_view(id))
                                    >
                                        <span aria-hidden="true">{id.icon()}</span>
                                        <span>{id.label()}</span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </nav>

                    <button
                        class="portal-header__menu-toggle"
                        aria-label="Menu"
                        on:click=move |_| view_state.update(ViewState::toggle_menu)
                    >
                        {move || menu_toggle_glyph(menu_open())}
                    </button>
                </div>

                <Show when=menu_open>
                    <nav class="portal-nav portal-nav--dropdown">
                        {ViewId::ALL
                            .into_iter()
                            .map(|id| {
                                view! {
                                    <button
                                        class=move || nav_item_class("portal-nav__row", current() == id)
                                        on:click=move |_| view_state.update(|v| v.choose_from_menu(id))
                                    >
                                        <span aria-hidden="true">{id.icon()}</span>
                                        <span>{id.label()}</span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </nav>
                </Show>
            </div>
        </header>
    }
}
