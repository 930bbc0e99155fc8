//! Problem report form.

#[cfg(test)]
#[path = "problem_report_test.rs"]
mod problem_report_test;

use super::{SelectOption, SupportForm, is_blank, labeled_block, or_placeholder, prefix_chars};
use crate::net::types::TargetList;

pub const PROBLEM_TYPES: &[SelectOption] = &[
    SelectOption { value: "Canais Ao Vivo", label: "📡 Canais Ao Vivo" },
    SelectOption { value: "Filmes", label: "🎬 Filmes (VOD)" },
    SelectOption { value: "Séries", label: "📺 Séries" },
    SelectOption { value: "Aplicativo", label: "📱 Aplicativo" },
    SelectOption { value: "Conexão", label: "🌐 Conexão/Internet" },
];

pub const URGENCIES: &[SelectOption] = &[
    SelectOption { value: "baixa", label: "🟢 Baixa - Pode aguardar" },
    SelectOption { value: "normal", label: "🟡 Normal" },
    SelectOption { value: "alta", label: "🟠 Alta - Preciso de ajuda" },
    SelectOption { value: "critica", label: "🔴 Crítica - Serviço parado" },
];

pub const DEFAULT_URGENCY: &str = "normal";

/// Contact prefix length kept in the card title. No ellipsis is added.
const TITLE_CONTACT_CHARS: usize = 20;

const NO_TITLE: &str = "Não informado";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProblemReportForm {
    pub problem_type: String,
    pub title: String,
    pub description: String,
    pub contact: String,
    pub urgency: String,
}

impl Default for ProblemReportForm {
    fn default() -> Self {
        Self {
            problem_type: String::new(),
            title: String::new(),
            description: String::new(),
            contact: String::new(),
            urgency: DEFAULT_URGENCY.to_owned(),
        }
    }
}

impl SupportForm for ProblemReportForm {
    const LIST: TargetList = TargetList::Problems;
    const SUCCESS_MESSAGE: &'static str = "Problema relatado com sucesso! Nossa equipe entrará em contato.";
    const FAILURE_PREFIX: &'static str = "Erro ao relatar problema: ";

    fn validate(&self) -> Result<(), &'static str> {
        if is_blank(&self.problem_type) || is_blank(&self.description) || is_blank(&self.contact) {
            return Err("Por favor, preencha todos os campos obrigatórios.");
        }
        Ok(())
    }

    fn card_title(&self) -> String {
        format!("[PROBLEMA] {} - {}", self.problem_type, prefix_chars(&self.contact, TITLE_CONTACT_CHARS))
    }

    fn card_description(&self, submitted_at: &str) -> String {
        labeled_block(&[
            ("Tipo de Problema", self.problem_type.as_str()),
            ("Título", or_placeholder(&self.title, NO_TITLE)),
            ("Descrição", self.description.as_str()),
            ("Urgência", self.urgency.as_str()),
            ("Contato", self.contact.as_str()),
            ("Data do Relato", submitted_at),
        ])
    }
}
