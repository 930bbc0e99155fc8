//! Content request screen.

use leptos::prelude::*;

use crate::components::form_card::{FormCard, SelectField, SubmitButton, TextField};
use crate::forms::content_request::{CONTENT_TYPES, ContentRequestForm, PRIORITIES};
use crate::pages::form_submit::{field, use_form_submit};

#[component]
pub fn ContentRequestPage() -> impl IntoView {
    let form = RwSignal::new(ContentRequestForm::default());
    let (submitting, on_submit) = use_form_submit(form);

    let (content_type, set_content_type) = field(form, |f| &f.content_type, |f, v| f.content_type = v);
    let (priority, set_priority) = field(form, |f| &f.priority, |f, v| f.priority = v);
    let (title, set_title) = field(form, |f| &f.title, |f, v| f.title = v);
    let (details, set_details) = field(form, |f| &f.details, |f, v| f.details = v);

    view! {
        <FormCard
            title="Solicitar Conteúdo"
            subtitle="Envie sua solicitação de filmes, séries ou canais"
            accent="content"
        >
            <form class="form-card__form" novalidate="novalidate" on:submit=on_submit>
                <div class="form-card__grid">
                    <SelectField
                        label="Tipo de Conteúdo"
                        required=true
                        placeholder="Selecione um tipo"
                        options=CONTENT_TYPES
                        value=content_type
                        on_change=set_content_type
                    />
                    <SelectField label="Prioridade" options=PRIORITIES value=priority on_change=set_priority/>
                </div>
                <TextField
                    label="Título do Conteúdo"
                    required=true
                    placeholder="Ex: Vingadores Ultimato, Breaking Bad, CNN Brasil..."
                    value=title
                    on_change=set_title
                />
                <TextField
                    label="Detalhes Adicionais"
                    multiline=true
                    rows=4
                    placeholder="Ex: Preciso da 5ª temporada completa, episódios em HD, dublado em português..."
                    value=details
                    on_change=set_details
                />
                <SubmitButton submitting icon="➤" label="Enviar Solicitação"/>
            </form>
        </FormCard>
    }
}
