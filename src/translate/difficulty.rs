/// Vocabulary level requested by the reader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

const EASY_INSTRUCTION: &str = "Use uma linguagem muito simples, frases curtas e vocabulário básico. \
O objetivo é que uma criança ou um iniciante em português consiga entender.";

const MEDIUM_INSTRUCTION: &str = "Use uma linguagem padrão, mantendo a riqueza do texto original, \
mas garantindo clareza. O vocabulário deve ser acessível, mas não simplificado demais.";

const HARD_INSTRUCTION: &str = "Use uma linguagem formal, vocabulário avançado, e mantenha todas as \
nuances e complexidades gramaticais do texto original. O objetivo é uma tradução literária e sofisticada.";

/// Accepted keys. The Portuguese keys are canonical, the English ones are aliases.
const DIFFICULTY_KEYS: [(&str, Difficulty); 6] = [
    ("facil", Difficulty::Easy),
    ("medio", Difficulty::Medium),
    ("dificil", Difficulty::Hard),
    ("easy", Difficulty::Easy),
    ("medium", Difficulty::Medium),
    ("hard", Difficulty::Hard),
];

impl Difficulty {
    /// Exact, case-sensitive lookup
    pub fn from_key(key: &str) -> Option<Self> {
        DIFFICULTY_KEYS
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, difficulty)| *difficulty)
    }

    /// Like [`Difficulty::from_key`] but unknown keys fall back to `Medium`
    pub fn resolve(key: &str) -> Self {
        Self::from_key(key).unwrap_or(Self::Medium)
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Easy => "facil",
            Self::Medium => "medio",
            Self::Hard => "dificil",
        }
    }

    pub fn instruction(&self) -> &'static str {
        match self {
            Self::Easy => EASY_INSTRUCTION,
            Self::Medium => MEDIUM_INSTRUCTION,
            Self::Hard => HARD_INSTRUCTION,
        }
    }
}
