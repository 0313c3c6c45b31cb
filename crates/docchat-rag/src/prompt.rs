//! Grounded answer prompt

/// The answer the model is instructed to give when the context does not
/// contain the information.
pub const OUT_OF_CONTEXT_ANSWER: &str =
    "Não tenho informações necessárias para responder sua pergunta.";

/// Fixed prompt template. `{contexto}` receives the concatenated retrieved
/// chunks, `{pergunta}` the verbatim user question.
pub const ANSWER_TEMPLATE: &str = r#"CONTEXTO:
{contexto}

REGRAS:
- Responda somente com base no CONTEXTO.
- Se a informação não estiver explicitamente no CONTEXTO, responda:
  "Não tenho informações necessárias para responder sua pergunta."
- Nunca invente ou use conhecimento externo.
- Nunca produza opiniões ou interpretações além do que está escrito.

EXEMPLOS DE PERGUNTAS FORA DO CONTEXTO:
Pergunta: "Qual é a capital da França?"
Resposta: "Não tenho informações necessárias para responder sua pergunta."

Pergunta: "Quantos clientes temos em 2024?"
Resposta: "Não tenho informações necessárias para responder sua pergunta."

Pergunta: "Você acha isso bom ou ruim?"
Resposta: "Não tenho informações necessárias para responder sua pergunta."

PERGUNTA DO USUÁRIO:
{pergunta}

RESPONDA A "PERGUNTA DO USUÁRIO"
"#;

/// Render the template. Both slots are substituted verbatim; an empty
/// context renders an empty CONTEXTO block rather than failing.
pub fn render_prompt(context: &str, question: &str) -> String {
    ANSWER_TEMPLATE
        .replace("{contexto}", context)
        .replace("{pergunta}", question)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendered_prompt_contains_context_and_verbatim_question() {
        let prompt = render_prompt("O céu é azul.", "Qual é a cor do céu?");

        assert!(prompt.contains("CONTEXTO:\nO céu é azul."));
        assert!(prompt.contains("PERGUNTA DO USUÁRIO:\nQual é a cor do céu?"));
    }

    #[test]
    fn rendered_prompt_instructs_the_exact_refusal_answer() {
        let prompt = render_prompt("conteúdo qualquer", "pergunta qualquer");
        assert!(prompt.contains(OUT_OF_CONTEXT_ANSWER));
    }

    #[test]
    fn empty_context_still_renders() {
        let prompt = render_prompt("", "Qual é a cor do céu?");

        assert!(prompt.starts_with("CONTEXTO:\n\n"));
        assert!(prompt.contains("Qual é a cor do céu?"));
        assert!(!prompt.contains("{contexto}"));
        assert!(!prompt.contains("{pergunta}"));
    }
}
