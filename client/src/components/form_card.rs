//! Building blocks shared by the three submission forms.

use leptos::prelude::*;

use crate::forms::SelectOption;
use crate::state::view::ViewState;

fn field_label(label: &str, required: bool) -> String {
    if required { format!("{label} *") } else { label.to_owned() }
}

/// Card frame with a back button that returns to the home view.
#[component]
pub fn FormCard(
    title: &'static str,
    subtitle: &'static str,
    /// Accent modifier (`content`, `problem`, `suggestion`).
    accent: &'static str,
    children: Children,
) -> impl IntoView {
    let view_state = expect_context::<RwSignal<ViewState>>();

    view! {
        <div class="form-page">
            <div class=format!("form-card form-card--{accent}")>
                <div class="form-card__header">
                    <button
                        class="form-card__back"
                        type="button"
                        title="Voltar"
                        on:click=move |_| view_state.update(ViewState::back)
                    >
                        "←"
                    </button>
                    <div>
                        <h2 class="form-card__title">{title}</h2>
                        <p class="form-card__subtitle">{subtitle}</p>
                    </div>
                </div>
                {children()}
            </div>
        </div>
    }
}

/// Labeled `<select>`. An empty `placeholder` omits the blank option.
#[component]
pub fn SelectField(
    label: &'static str,
    options: &'static [SelectOption],
    value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{field_label(label, required)}</span>
            <select
                class="form-field__control"
                aria-required=if required { "true" } else { "false" }
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {(!placeholder.is_empty()).then(|| view! { <option value="">{placeholder}</option> })}
                {options
                    .iter()
                    .map(|opt| view! { <option value=opt.value>{opt.label}</option> })
                    .collect_view()}
            </select>
        </label>
    }
}

/// Labeled `<input>` or, with `multiline`, `<textarea>`.
#[component]
pub fn TextField(
    label: &'static str,
    value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
    #[prop(optional)] multiline: bool,
    #[prop(default = 4)] rows: u32,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    let control = if multiline {
        view! {
            <textarea
                class="form-field__control form-field__control--area"
                rows=rows
                placeholder=placeholder
                aria-required=if required { "true" } else { "false" }
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                class="form-field__control"
                type=input_type
                placeholder=placeholder
                aria-required=if required { "true" } else { "false" }
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
        }
        .into_any()
    };

    view! {
        <label class="form-field">
            <span class="form-field__label">{field_label(label, required)}</span>
            {control}
        </label>
    }
}

/// Submit button that disables itself and shows a spinner while in flight.
#[component]
pub fn SubmitButton(submitting: Signal<bool>, icon: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <button class="form-card__submit" type="submit" disabled=move || submitting.get()>
            <Show
                when=move || submitting.get()
                fallback=move || {
                    view! {
                        <span aria-hidden="true">{icon}</span>
                        <span>{label}</span>
                    }
                }
            >
                <span class="spinner" role="progressbar" aria-label="Enviando"></span>
            </Show>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_label_marks_required() {
        assert_eq!(field_label("Sua Sugestão", true), "Sua Sugestão *");
        assert_eq!(field_label("Categoria da Sugestão", false), "Categoria da Sugestão");
    }
}
