use super::*;
use crate::net::types::CardCreated;
use crate::state::toast::ToastKind;

const STAMP: &str = "19/10/2026, 14:03:05";
const MISSING: &str = "Por favor, preencha todos os campos obrigatórios.";

fn filled() -> ProblemReportForm {
    ProblemReportForm {
        problem_type: "Canais Ao Vivo".to_owned(),
        description: "SBT não abre desde ontem".to_owned(),
        contact: "(41) 99999-0000".to_owned(),
        ..ProblemReportForm::default()
    }
}

#[test]
fn default_has_normal_urgency() {
    let form = ProblemReportForm::default();
    assert_eq!(form.urgency, "normal");
    assert!(form.contact.is_empty());
}

#[test]
fn missing_contact_yields_no_request() {
    let form = ProblemReportForm { contact: String::new(), ..filled() };
    assert_eq!(form.card_request(STAMP), Err(MISSING));
}

#[test]
fn each_required_field_is_enforced() {
    let cases = [
        ProblemReportForm { problem_type: String::new(), ..filled() },
        ProblemReportForm { description: " ".to_owned(), ..filled() },
        ProblemReportForm { contact: "\t".to_owned(), ..filled() },
    ];
    for form in cases {
        assert_eq!(form.validate(), Err(MISSING));
    }
    assert_eq!(filled().validate(), Ok(()));
}

#[test]
fn title_truncates_long_contact_to_twenty_chars_without_ellipsis() {
    let form = ProblemReportForm { contact: "joao.silva@example.com.br".to_owned(), ..filled() };
    let title = form.card_title();
    assert_eq!(title, "[PROBLEMA] Canais Ao Vivo - joao.silva@example.c");
    assert!(!title.ends_with("..."));
    let contact_part = title.rsplit(" - ").next().unwrap();
    assert_eq!(contact_part.chars().count(), 20);
}

#[test]
fn title_keeps_short_contact_whole() {
    assert_eq!(filled().card_title(), "[PROBLEMA] Canais Ao Vivo - (41) 99999-0000");
}

#[test]
fn description_uses_placeholder_for_missing_title() {
    let req = filled().card_request(STAMP).unwrap();
    assert_eq!(req.list, TargetList::Problems);
    assert_eq!(
        req.description,
        "**Tipo de Problema:** Canais Ao Vivo\n\
         **Título:** Não informado\n\
         **Descrição:** SBT não abre desde ontem\n\
         **Urgência:** normal\n\
         **Contato:** (41) 99999-0000\n\
         **Data do Relato:** 19/10/2026, 14:03:05"
    );
}

#[test]
fn description_carries_full_contact() {
    let form = ProblemReportForm { contact: "joao.silva@example.com.br".to_owned(), ..filled() };
    assert!(form.card_description(STAMP).contains("**Contato:** joao.silva@example.com.br"));
}

#[test]
fn success_resets_every_field() {
    let mut form = ProblemReportForm { title: "Trava".to_owned(), urgency: "critica".to_owned(), ..filled() };
    let toast = form.settle(Ok(&CardCreated { id: "c2".to_owned() }));
    assert_eq!(form, ProblemReportForm::default());
    assert_eq!(toast.kind, ToastKind::Success);
    assert_eq!(toast.message, "Problema relatado com sucesso! Nossa equipe entrará em contato.");
}

#[test]
fn rejection_keeps_fields_and_surfaces_message() {
    let mut form = filled();
    let before = form.clone();
    let toast = form.settle(Err("Unauthorized"));
    assert_eq!(form, before);
    assert_eq!(toast.kind, ToastKind::Error);
    assert!(toast.message.contains("Unauthorized"));
    assert!(toast.message.starts_with("Erro ao relatar problema: "));
}
