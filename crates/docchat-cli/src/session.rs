//! Interactive chat session

use colored::*;

use docchat_core::Result;
use docchat_rag::AnswerPipeline;

use crate::ui::{Input, clear_screen, display_banner, read_input};

/// Control commands recognized by the session loop
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Exit,
    Clear,
    Empty,
    Question(String),
}

impl SessionCommand {
    /// Parse user input. Control tokens are case-insensitive; anything else
    /// is a question, passed on verbatim (trimmed).
    pub fn parse(input: &str) -> SessionCommand {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return SessionCommand::Empty;
        }

        match trimmed.to_lowercase().as_str() {
            "sair" | "exit" | "quit" => SessionCommand::Exit,
            "limpar" | "clear" => SessionCommand::Clear,
            _ => SessionCommand::Question(trimmed.to_string()),
        }
    }
}

/// Single-threaded read-process-print loop over an answer pipeline.
///
/// Errors while answering a question are reported and the loop continues;
/// only Ctrl+C and the exit tokens end the session.
pub struct ChatSession {
    pipeline: AnswerPipeline,
    history: Vec<String>,
}

impl ChatSession {
    pub fn new(pipeline: AnswerPipeline) -> Self {
        Self {
            pipeline,
            history: Vec::new(),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        display_banner();
        println!("{}", "✓ Sistema iniciado com sucesso!".green());
        println!();

        loop {
            let input = match read_input(&mut self.history)? {
                Input::Line(line) => line,
                Input::Interrupted | Input::Eof => {
                    Self::farewell();
                    return Ok(());
                }
            };

            match SessionCommand::parse(&input) {
                SessionCommand::Exit => {
                    Self::farewell();
                    return Ok(());
                }
                SessionCommand::Clear => {
                    clear_screen()?;
                    display_banner();
                }
                SessionCommand::Empty => {}
                SessionCommand::Question(question) => {
                    println!();
                    println!("{}", "🔍 Buscando informações...".dimmed());

                    match self.pipeline.answer(&question).await {
                        Ok(answer) => {
                            println!();
                            println!("{} {}", "RESPOSTA:".green().bold(), answer);
                            println!();
                            println!("{}", "-".repeat(60).dimmed());
                        }
                        Err(e) => {
                            println!();
                            println!("{} {}", "❌ Erro ao processar pergunta:".red().bold(), e);
                            println!("{}", "Tente novamente ou digite 'sair' para encerrar.".dimmed());
                        }
                    }
                }
            }
        }
    }

    fn farewell() {
        println!();
        println!("{}", "👋 Encerrando chat. Até logo!".green());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_tokens_are_case_insensitive() {
        for token in ["sair", "exit", "quit", "SAIR", "Exit", "QUIT"] {
            assert_eq!(SessionCommand::parse(token), SessionCommand::Exit);
        }
    }

    #[test]
    fn clear_tokens_are_case_insensitive() {
        for token in ["limpar", "clear", "LIMPAR", "Clear"] {
            assert_eq!(SessionCommand::parse(token), SessionCommand::Clear);
        }
    }

    #[test]
    fn blank_input_is_empty() {
        assert_eq!(SessionCommand::parse(""), SessionCommand::Empty);
        assert_eq!(SessionCommand::parse("   "), SessionCommand::Empty);
        assert_eq!(SessionCommand::parse("\t\n"), SessionCommand::Empty);
    }

    #[test]
    fn anything_else_is_a_question_preserved_verbatim() {
        assert_eq!(
            SessionCommand::parse("Qual é a capital da França?"),
            SessionCommand::Question("Qual é a capital da França?".to_string())
        );

        // A question that merely contains a control token is still a question
        assert_eq!(
            SessionCommand::parse("how do I exit vim"),
            SessionCommand::Question("how do I exit vim".to_string())
        );
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(
            SessionCommand::parse("  exit  "),
            SessionCommand::Exit
        );
        assert_eq!(
            SessionCommand::parse("  qual o faturamento?  "),
            SessionCommand::Question("qual o faturamento?".to_string())
        );
    }
}
