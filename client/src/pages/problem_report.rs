//! Problem report screen.

use leptos::prelude::*;

use crate::components::form_card::{FormCard, SelectField, SubmitButton, TextField};
use crate::forms::problem_report::{PROBLEM_TYPES, ProblemReportForm, URGENCIES};
use crate::pages::form_submit::{field, use_form_submit};

#[component]
pub fn ProblemReportPage() -> impl IntoView {
    let form = RwSignal::new(ProblemReportForm::default());
    let (submitting, on_submit) = use_form_submit(form);

    let (problem_type, set_problem_type) = field(form, |f| &f.problem_type, |f, v| f.problem_type = v);
    let (urgency, set_urgency) = field(form, |f| &f.urgency, |f, v| f.urgency = v);
    let (title, set_title) = field(form, |f| &f.title, |f, v| f.title = v);
    let (description, set_description) = field(form, |f| &f.description, |f, v| f.description = v);
    let (contact, set_contact) = field(form, |f| &f.contact, |f, v| f.contact = v);

    view! {
        <FormCard title="Relatar Problema" subtitle="Descreva o problema que está enfrentando" accent="problem">
            <form class="form-card__form" novalidate="novalidate" on:submit=on_submit>
                <div class="form-card__grid">
                    <SelectField
                        label="Onde está o problema?"
                        required=true
                        placeholder="Selecione uma opção"
                        options=PROBLEM_TYPES
                        value=problem_type
                        on_change=set_problem_type
                    />
                    <SelectField label="Urgência" options=URGENCIES value=urgency on_change=set_urgency/>
                </div>
                <TextField
                    label="Título do Problema"
                    placeholder="Ex: Canal SBT não funciona, Filme trava no meio..."
                    value=title
                    on_change=set_title
                />
                <TextField
                    label="Descreva o Problema"
                    required=true
                    multiline=true
                    rows=4
                    placeholder="Descreva detalhadamente o que está acontecendo, quando começou, em quais dispositivos..."
                    value=description
                    on_change=set_description
                />
                <TextField
                    label="Seu WhatsApp para Contato"
                    required=true
                    input_type="tel"
                    placeholder="(XX) XXXXX-XXXX"
                    value=contact
                    on_change=set_contact
                />
                <SubmitButton submitting icon="🐞" label="Relatar Problema"/>
            </form>
        </FormCard>
    }
}
