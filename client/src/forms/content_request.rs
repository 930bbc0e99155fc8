//! Content request form: movies, series, live channels, documentaries.

#[cfg(test)]
#[path = "content_request_test.rs"]
mod content_request_test;

use super::{SelectOption, SupportForm, is_blank, labeled_block, or_placeholder};
use crate::net::types::TargetList;

pub const CONTENT_TYPES: &[SelectOption] = &[
    SelectOption { value: "Filme", label: "🎬 Filme" },
    SelectOption { value: "Série", label: "📺 Série" },
    SelectOption { value: "Canal", label: "📡 Canal Ao Vivo" },
    SelectOption { value: "Documentário", label: "📖 Documentário" },
];

pub const PRIORITIES: &[SelectOption] = &[
    SelectOption { value: "baixa", label: "🟢 Baixa" },
    SelectOption { value: "normal", label: "🟡 Normal" },
    SelectOption { value: "alta", label: "🟠 Alta" },
    SelectOption { value: "urgente", label: "🔴 Urgente" },
];

pub const DEFAULT_PRIORITY: &str = "normal";

const NO_DETAILS: &str = "Nenhum detalhe adicional fornecido.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentRequestForm {
    pub content_type: String,
    pub title: String,
    pub details: String,
    pub priority: String,
}

impl Default for ContentRequestForm {
    fn default() -> Self {
        Self {
            content_type: String::new(),
            title: String::new(),
            details: String::new(),
            priority: DEFAULT_PRIORITY.to_owned(),
        }
    }
}

impl SupportForm for ContentRequestForm {
    const LIST: TargetList = TargetList::Requests;
    const SUCCESS_MESSAGE: &'static str = "Solicitação enviada com sucesso! Entraremos em contato em breve.";
    const FAILURE_PREFIX: &'static str = "Erro ao enviar solicitação: ";

    fn validate(&self) -> Result<(), &'static str> {
        if is_blank(&self.content_type) || is_blank(&self.title) {
            return Err("Por favor, preencha o tipo de conteúdo e o título.");
        }
        Ok(())
    }

    fn card_title(&self) -> String {
        format!("[{}] {}", self.content_type, self.title)
    }

    fn card_description(&self, submitted_at: &str) -> String {
        labeled_block(&[
            ("Tipo", self.content_type.as_str()),
            ("Título", self.title.as_str()),
            ("Prioridade", self.priority.as_str()),
            ("Detalhes", or_placeholder(&self.details, NO_DETAILS)),
            ("Data da Solicitação", submitted_at),
        ])
    }
}
