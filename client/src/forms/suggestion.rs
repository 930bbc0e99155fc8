//! Suggestion form.

#[cfg(test)]
#[path = "suggestion_test.rs"]
mod suggestion_test;

use super::{SelectOption, SupportForm, is_blank, labeled_block, or_placeholder, prefix_chars};
use crate::net::types::TargetList;

pub const CATEGORIES: &[SelectOption] = &[
    SelectOption { value: "Conteúdo", label: "📺 Conteúdo" },
    SelectOption { value: "Interface", label: "🎨 Interface do App" },
    SelectOption { value: "Performance", label: "⚡ Performance" },
    SelectOption { value: "Atendimento", label: "🤝 Atendimento" },
    SelectOption { value: "Recursos", label: "✨ Novos Recursos" },
    SelectOption { value: "Outros", label: "💡 Outros" },
];

/// Suggestion prefix length kept in the card title.
const TITLE_SUGGESTION_CHARS: usize = 50;

const DEFAULT_CATEGORY: &str = "Geral";
const NO_CONTACT: &str = "Não fornecido";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SuggestionForm {
    pub category: String,
    pub suggestion: String,
    pub contact: String,
}

impl SupportForm for SuggestionForm {
    const LIST: TargetList = TargetList::Suggestions;
    const SUCCESS_MESSAGE: &'static str = "Sugestão enviada com sucesso! Agradecemos seu feedback.";
    const FAILURE_PREFIX: &'static str = "Erro ao enviar sugestão: ";

    fn validate(&self) -> Result<(), &'static str> {
        if is_blank(&self.suggestion) {
            return Err("Por favor, digite sua sugestão.");
        }
        Ok(())
    }

    fn card_title(&self) -> String {
        let head = prefix_chars(&self.suggestion, TITLE_SUGGESTION_CHARS);
        let ellipsis = if head.len() < self.suggestion.len() { "..." } else { "" };
        format!("[SUGESTÃO] {head}{ellipsis}")
    }

    fn card_description(&self, submitted_at: &str) -> String {
        labeled_block(&[
            ("Categoria", or_placeholder(&self.category, DEFAULT_CATEGORY)),
            ("Sugestão", self.suggestion.as_str()),
            ("Contato", or_placeholder(&self.contact, NO_CONTACT)),
            ("Data da Sugestão", submitted_at),
        ])
    }
}
