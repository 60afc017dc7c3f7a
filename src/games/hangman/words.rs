use crate::core::config::ConfigError;

/// Built-in secret words
pub const DEFAULT_WORDS: &[&str] = &[
    "DESENVOLVEDOR", "JAVASCRIPT", "COMPUTADOR", "TECLADO", "MONITOR",
    "CELULAR", "APLICATIVO", "BIBLIOTECA", "FRAMEWORK", "ALGORITMO",
    "ESTRUTURA", "VARIAVEL", "CONSTANTE", "FUNCAO", "OBJETO", "CLASSE",
    "HERANCA", "POLIMORFISMO", "ENCAPSULAMENTO", "INTERFACE", "PROGRAMACAO",
    "SISTEMA", "OPERACIONAL", "HARDWARE", "SOFTWARE", "INTERNET", "NAVEGADOR",
    "SERVIDOR", "CLIENTE", "PROTOCOLO", "REQUISICAO", "RESPOSTA", "BANCO",
    "DADOS", "CONSULTA", "CODIGO", "FONTE", "REACT", "NATIVE", "EXPO",
    "COMPONENT", "ESTADO", "PROPS", "FUNCIONAL", "ANDROID", "IOS", "MOBILE",
    "DESIGN", "HOOKS", "ASYNC", "PROMISE", "ARRAY", "SIMULADOR", "REINICIAR",
    "VITORIA", "DERROTA", "TENTATIVAS", "SVG", "ESTILOS", "LAYOUT", "USUARIO",
    "PORTUGUES", "BRASIL", "PERNAMBUCO", "PORTO", "DIGITAL", "GITHUB",
];

/// A non-empty list of uppercase A-Z words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Normalizes every entry to uppercase and rejects anything that could
    /// not be a secret word.
    pub fn new<I, S>(words: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| normalize(w.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        if words.is_empty() {
            return Err(ConfigError::EmptyWordList);
        }

        Ok(Self { words })
    }

    pub fn builtin() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

fn normalize(raw: &str) -> Result<String, ConfigError> {
    let word = raw.trim().to_ascii_uppercase();
    if word.is_empty() || !word.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(ConfigError::InvalidWord { word: raw.to_string() });
    }
    Ok(word)
}
