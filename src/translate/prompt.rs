use thiserror::Error;

use crate::config_manager::TranslationConfig;
use crate::translate::difficulty::Difficulty;
use crate::translate::interface::TranslationRequest;

/// System and user prompts sent to the completion provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    pub system_prompt: String,
    pub user_prompt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Campo(s) obrigatório(s) ausente(s): {}", .0.join(", "))]
    MissingField(Vec<&'static str>),
}

/// Renders prompt pairs for a fixed language pair
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    source_language: String,
    target_language: String,
}

impl PromptBuilder {
    pub fn new(config: &TranslationConfig) -> Self {
        Self {
            source_language: config.source_language.clone(),
            target_language: config.target_language.clone(),
        }
    }

    /// Validate the request and render its prompts.
    ///
    /// `text` must be non-blank and `difficulty` non-empty. An unrecognized
    /// difficulty uses the medium instruction. The text is embedded verbatim.
    pub fn build(&self, request: &TranslationRequest) -> Result<PromptPair, ValidationError> {
        let text = request.text.as_deref().filter(|t| !t.trim().is_empty());
        let difficulty = request.difficulty.as_deref().filter(|d| !d.is_empty());

        let (text, difficulty) = match (text, difficulty) {
            (Some(text), Some(difficulty)) => (text, difficulty),
            (text, difficulty) => {
                let mut missing = Vec::new();
                if text.is_none() {
                    missing.push("text");
                }
                if difficulty.is_none() {
                    missing.push("difficulty");
                }
                return Err(ValidationError::MissingField(missing));
            }
        };

        let instruction = Difficulty::resolve(difficulty).instruction();

        Ok(PromptPair {
            system_prompt: self.system_prompt(instruction),
            user_prompt: user_prompt(text),
        })
    }

    fn system_prompt(&self, instruction: &str) -> String {
        format!(
            "Você é um tradutor literário profissional. Sua tarefa é traduzir o texto a seguir \
             do {} para o {}. Mantenha o contexto e o tom da obra original. Além disso, você deve \
             ajustar a complexidade da linguagem de acordo com a seguinte instrução: \"{}\"",
            self.source_language, self.target_language, instruction
        )
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new(&TranslationConfig::default())
    }
}

fn user_prompt(text: &str) -> String {
    format!("Traduza o seguinte texto: \n\n\"\"\"\n{}\n\"\"\"", text)
}
