//! Erros do console VGA.

/// Erros de configuração do console.
///
/// O caminho de escrita nunca falha; apenas construção e instalação
/// retornam erro.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayError {
    /// Endereço base nulo para o buffer de texto.
    NullAddress,
    /// Já existe um console compartilhado instalado.
    AlreadyInstalled,
}

impl DisplayError {
    /// Descrição curta para logs.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NullAddress => "endereco base nulo",
            Self::AlreadyInstalled => "console ja instalado",
        }
    }
}
