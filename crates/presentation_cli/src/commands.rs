//! Interactive line commands

use domain::{FieldRole, Provider};

/// One parsed line of the interactive session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the text of a field
    Type { role: FieldRole, text: String },
    /// Pick the candidate at a 1-based position
    Choose { role: FieldRole, position: usize },
    /// Activation key on a field
    Enter(FieldRole),
    /// Clear a field
    Clear(FieldRole),
    /// Switch provider
    App(Provider),
    Generate,
    Copy,
    Share,
    Help,
    Quit,
}

/// Why a line could not be understood
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Linha vazia")]
    Empty,

    #[error("Comando desconhecido: {0}. Digite 'ajuda'.")]
    Unknown(String),

    #[error("Campo inválido: {0}. Use origem ou destino.")]
    Field(String),

    #[error("Posição inválida: {0}. Use o número mostrado na lista.")]
    Position(String),

    #[error("Aplicativo inválido: {0}. Use 99 ou uber.")]
    Provider(String),

    #[error("Uso: {0}")]
    Usage(&'static str),
}

fn field(name: &str) -> Result<FieldRole, CommandError> {
    FieldRole::from_name(name).ok_or_else(|| CommandError::Field(name.to_string()))
}

/// Parse one input line
pub fn parse(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(CommandError::Empty);
    }

    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

    match verb.to_lowercase().as_str() {
        "o" | "origem" => Ok(Command::Type {
            role: FieldRole::Origin,
            text: rest.to_string(),
        }),
        "d" | "destino" => Ok(Command::Type {
            role: FieldRole::Destination,
            text: rest.to_string(),
        }),
        "escolher" => {
            let mut args = rest.split_whitespace();
            let (Some(name), Some(position), None) = (args.next(), args.next(), args.next())
            else {
                return Err(CommandError::Usage("escolher <origem|destino> <n>"));
            };
            let role = field(name)?;
            let position = position
                .parse::<usize>()
                .ok()
                .filter(|n| *n >= 1)
                .ok_or_else(|| CommandError::Position(position.to_string()))?;
            Ok(Command::Choose { role, position })
        },
        "enter" => single_field(rest, "enter <origem|destino>").map(Command::Enter),
        "limpar" => single_field(rest, "limpar <origem|destino>").map(Command::Clear),
        "app" => {
            if rest.is_empty() {
                return Err(CommandError::Usage("app <99|uber>"));
            }
            Provider::from_config(rest)
                .map(Command::App)
                .ok_or_else(|| CommandError::Provider(rest.to_string()))
        },
        "gerar" => Ok(Command::Generate),
        "copiar" => Ok(Command::Copy),
        "whatsapp" | "compartilhar" => Ok(Command::Share),
        "ajuda" | "?" => Ok(Command::Help),
        "sair" | "q" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn single_field(rest: &str, usage: &'static str) -> Result<FieldRole, CommandError> {
    let mut args = rest.split_whitespace();
    match (args.next(), args.next()) {
        (Some(name), None) => field(name),
        _ => Err(CommandError::Usage(usage)),
    }
}
