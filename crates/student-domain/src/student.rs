// student.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identificador opaco asignado por el almacén.
pub type StudentId = i64;

/// Registro de estudiante tal como lo guarda el almacén.
///
/// `id` es `None` sólo antes del primer `save`; una vez asignado no cambia.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
  pub id: Option<StudentId>,
  pub nombre: String,
  pub correo: String,
  pub numero_telefono: String,
  pub idioma: String,
}

/// Carga completa de campos mutables (alta y reemplazo).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentFields {
  pub nombre: String,
  pub correo: String,
  pub numero_telefono: String,
  pub idioma: String,
}

/// Carga parcial: sólo los atributos `Some` se aplican.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentPatch {
  pub nombre: Option<String>,
  pub correo: Option<String>,
  pub numero_telefono: Option<String>,
  pub idioma: Option<String>,
}

/// Forma de intercambio (JSON). Todos los campos son opcionales en la
/// entrada; `id` se ignora al recibir.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentDto {
  pub id: Option<StudentId>,
  pub nombre: Option<String>,
  pub correo: Option<String>,
  pub numero_telefono: Option<String>,
  pub idioma: Option<String>,
}

impl Student {
  /// Construye un estudiante nuevo, todavía sin `id`.
  pub fn new(fields: StudentFields) -> Self {
    Self { id: None,
           nombre: fields.nombre,
           correo: fields.correo,
           numero_telefono: fields.numero_telefono,
           idioma: fields.idioma }
  }

  /// Sobrescribe todos los campos mutables; `id` se conserva.
  pub fn replace_fields(&mut self, fields: StudentFields) {
    self.nombre = fields.nombre;
    self.correo = fields.correo;
    self.numero_telefono = fields.numero_telefono;
    self.idioma = fields.idioma;
  }

  /// Aplica sólo los atributos presentes en `patch`.
  pub fn apply_patch(&mut self, patch: StudentPatch) {
    if let Some(nombre) = patch.nombre {
      self.nombre = nombre;
    }
    if let Some(correo) = patch.correo {
      self.correo = correo;
    }
    if let Some(tel) = patch.numero_telefono {
      self.numero_telefono = tel;
    }
    if let Some(idioma) = patch.idioma {
      self.idioma = idioma;
    }
  }

  /// Compara el correo sin distinguir mayúsculas de minúsculas.
  pub fn has_correo(&self, correo: &str) -> bool {
    self.correo.to_lowercase() == correo.to_lowercase()
  }
}

impl fmt::Display for Student {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let id = self.id.map(|i| i.to_string()).unwrap_or_else(|| "-".into());
    write!(f,
           "Student(id: {}, nombre: {}, correo: {}, idioma: {})",
           id, self.nombre, self.correo, self.idioma)
  }
}

impl StudentPatch {
  /// `true` cuando ningún atributo está presente.
  pub fn is_empty(&self) -> bool {
    self.nombre.is_none() && self.correo.is_none() && self.numero_telefono.is_none() && self.idioma.is_none()
  }
}

impl From<StudentDto> for StudentFields {
  // Los campos ausentes quedan en blanco: semántica de reemplazo total.
  fn from(dto: StudentDto) -> Self {
    Self { nombre: dto.nombre.unwrap_or_default(),
           correo: dto.correo.unwrap_or_default(),
           numero_telefono: dto.numero_telefono.unwrap_or_default(),
           idioma: dto.idioma.unwrap_or_default() }
  }
}

impl From<StudentDto> for StudentPatch {
  fn from(dto: StudentDto) -> Self {
    Self { nombre: dto.nombre,
           correo: dto.correo,
           numero_telefono: dto.numero_telefono,
           idioma: dto.idioma }
  }
}

impl From<&Student> for StudentDto {
  fn from(s: &Student) -> Self {
    Self { id: s.id,
           nombre: Some(s.nombre.clone()),
           correo: Some(s.correo.clone()),
           numero_telefono: Some(s.numero_telefono.clone()),
           idioma: Some(s.idioma.clone()) }
  }
}
