// errors.rs
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
  /// Uno o más campos no cumplen las reglas; contiene todos los mensajes.
  #[error("Error de validación: {}", .0.join("; "))]
  Validation(Vec<String>),
  #[error("Error de serialización: {0}")]
  Serialization(String),
}

impl DomainError {
  /// Mensajes individuales de validación (vacío para otros errores).
  pub fn messages(&self) -> &[String] {
    match self {
      Self::Validation(msgs) => msgs,
      Self::Serialization(_) => &[],
    }
  }
}

impl From<serde_json::Error> for DomainError {
  fn from(e: serde_json::Error) -> Self {
    Self::Serialization(e.to_string())
  }
}
