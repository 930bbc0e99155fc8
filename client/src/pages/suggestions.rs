//! Suggestion screen.

use leptos::prelude::*;

use crate::components::form_card::{FormCard, SelectField, SubmitButton, TextField};
use crate::forms::suggestion::{CATEGORIES, SuggestionForm};
use crate::pages::form_submit::{field, use_form_submit};

#[component]
pub fn SuggestionsPage() -> impl IntoView {
    let form = RwSignal::new(SuggestionForm::default());
    let (submitting, on_submit) = use_form_submit(form);

    let (category, set_category) = field(form, |f| &f.category, |f, v| f.category = v);
    let (suggestion, set_suggestion) = field(form, |f| &f.suggestion, |f, v| f.suggestion = v);
    let (contact, set_contact) = field(form, |f| &f.contact, |f, v| f.contact = v);

    view! {
        <FormCard title="Enviar Sugestão" subtitle="Ajude-nos a melhorar nosso serviço" accent="suggestion">
            <form class="form-card__form" novalidate="novalidate" on:submit=on_submit>
                <SelectField
                    label="Categoria da Sugestão"
                    placeholder="Selecione uma categoria"
                    options=CATEGORIES
                    value=category
                    on_change=set_category
                />
                <TextField
                    label="Sua Sugestão"
                    required=true
                    multiline=true
                    rows=5
                    placeholder="Descreva sua sugestão detalhadamente. Como podemos melhorar nosso serviço?"
                    value=suggestion
                    on_change=set_suggestion
                />
                <TextField
                    label="Seu WhatsApp (Opcional)"
                    input_type="tel"
                    placeholder="(XX) XXXXX-XXXX"
                    value=contact
                    on_change=set_contact
                />
                <SubmitButton submitting icon="💡" label="Enviar Sugestão"/>
            </form>
        </FormCard>
    }
}
