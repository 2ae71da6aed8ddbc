// Archivo: errors.rs
// Propósito: errores del servicio y el alias Result<T> de sus APIs.
use student_domain::StudentId;
use thiserror::Error;

/// Errores visibles para el llamador. Son terminales: no se reintentan.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
  /// No existe un estudiante con ese id.
  #[error("Estudiante con ID {0} no encontrado")]
  NotFound(StudentId),
  /// Otro estudiante ya usa ese correo (sin distinguir mayúsculas).
  #[error("Ya existe un estudiante con el correo: {0}")]
  DuplicateKey(String),
}

/// Alias de resultado usado por las APIs del crate.
pub type Result<T> = std::result::Result<T, ServiceError>;
