//! Home screen: hero with direct WhatsApp contact, form shortcuts, info.

use leptos::prelude::*;

use crate::state::view::{ViewId, ViewState};
use crate::util::contact::whatsapp_link;

struct Feature {
    view: ViewId,
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    accent: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        view: ViewId::ContentRequest,
        title: "Solicitar Conteúdo",
        description: "Peça filmes, séries ou canais que gostaria de ver disponíveis",
        icon: "🎬",
        accent: "content",
    },
    Feature {
        view: ViewId::ProblemReport,
        title: "Relatar Problema",
        description: "Informe problemas técnicos ou dificuldades que está enfrentando",
        icon: "🐞",
        accent: "problem",
    },
    Feature {
        view: ViewId::Suggestions,
        title: "Enviar Sugestão",
        description: "Compartilhe ideias para melhorar nosso serviço",
        icon: "💡",
        accent: "suggestion",
    },
];

/// Heading of the how-it-works section.
const INFO_TITLE: &str = "Como funciona?";

const INFO: &[(&str, &str)] = &[
    ("📝 Envie sua solicitação", "Preencha um dos formulários com suas informações e aguarde nosso retorno."),
    ("⏰ Tempo de resposta", "Respondemos em até 24 horas úteis, problemas urgentes têm prioridade."),
    ("🚀 Suporte Ágil", "Nossa equipe está pronta para resolver seus problemas com agilidade e eficiência."),
    (
        "📞 Canais de Contato",
        "Além dos formulários, você pode nos contatar diretamente via WhatsApp para um atendimento rápido.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let view_state = expect_context::<RwSignal<ViewState>>();

    view! {
        <div class="home">
            <section class="home__hero">
                <h1 class="home__hero-title">"Central de Suporte IPTV"</h1>
                <p class="home__hero-text">
                    "Estamos aqui para ajudar! Escolha uma das opções abaixo ou entre em contato diretamente conosco."
                </p>
                <a class="home__whatsapp" href=whatsapp_link() target="_blank" rel="noopener noreferrer">
                    <span aria-hidden="true">"📞"</span>
                    "Falar no WhatsApp"
                </a>
            </section>

            <section class="home__features">
                {FEATURES
                    .iter()
                    .map(|feature| {
                        view! {
                            <button
                                class=format!("feature-card feature-card--{}", feature.accent)
                                type="button"
                                on:click=move |_| view_state.update(|v| v.set_view(feature.view))
                            >
                                <span class="feature-card__icon" aria-hidden="true">{feature.icon}</span>
                                <h3 class="feature-card__title">{feature.title}</h3>
                                <p class="feature-card__text">{feature.description}</p>
                            </button>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="home__info">
                <h2 class="home__info-title">{INFO_TITLE}</h2>
                {INFO
                    .iter()
                    .map(|(title, text)| {
                        view! {
                            <div class="home__info-item">
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
