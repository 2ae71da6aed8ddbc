// validation.rs
//
// Reglas de formato de la capa externa. El núcleo (almacén + servicio) no
// las aplica: recibe valores ya validados.
use crate::{DomainError, StudentFields, StudentPatch};
use once_cell::sync::Lazy;
use regex::Regex;

/// Idiomas aceptados para el campo `idioma`.
pub const IDIOMAS_PERMITIDOS: [&str; 3] = ["inglés", "español", "francés"];

const NOMBRE_MAX: usize = 255;

static CORREO_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*$").expect("regex de correo"));
static TELEFONO_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{10}$").expect("regex de teléfono"));

/// Valida una carga completa (alta o reemplazo). Reúne todos los errores.
pub fn validate_fields(fields: &StudentFields) -> Result<(), DomainError> {
  let mut errores = Vec::new();
  check_nombre(&fields.nombre, &mut errores);
  check_correo(&fields.correo, &mut errores);
  check_telefono(&fields.numero_telefono, &mut errores);
  check_idioma(&fields.idioma, &mut errores);
  finish(errores)
}

/// Valida sólo los atributos presentes en un parche.
pub fn validate_patch(patch: &StudentPatch) -> Result<(), DomainError> {
  let mut errores = Vec::new();
  if let Some(n) = &patch.nombre {
    check_nombre(n, &mut errores);
  }
  if let Some(c) = &patch.correo {
    check_correo(c, &mut errores);
  }
  if let Some(t) = &patch.numero_telefono {
    check_telefono(t, &mut errores);
  }
  if let Some(i) = &patch.idioma {
    check_idioma(i, &mut errores);
  }
  finish(errores)
}

fn finish(errores: Vec<String>) -> Result<(), DomainError> {
  if errores.is_empty() {
    Ok(())
  } else {
    Err(DomainError::Validation(errores))
  }
}

fn check_nombre(nombre: &str, errores: &mut Vec<String>) {
  if nombre.trim().is_empty() {
    errores.push("El nombre es obligatorio".into());
  } else if nombre.chars().count() > NOMBRE_MAX {
    errores.push(format!("El nombre no puede exceder los {} caracteres", NOMBRE_MAX));
  }
}

fn check_correo(correo: &str, errores: &mut Vec<String>) {
  if correo.trim().is_empty() {
    errores.push("El correo es obligatorio".into());
  } else if !CORREO_RE.is_match(correo) {
    errores.push("El correo debe tener un formato válido".into());
  }
}

fn check_telefono(tel: &str, errores: &mut Vec<String>) {
  if tel.trim().is_empty() {
    errores.push("El número de teléfono es obligatorio".into());
  } else if !TELEFONO_RE.is_match(tel) {
    errores.push("El número de teléfono debe contener exactamente 10 dígitos".into());
  }
}

fn check_idioma(idioma: &str, errores: &mut Vec<String>) {
  if idioma.trim().is_empty() {
    errores.push("El idioma es obligatorio".into());
  } else if !IDIOMAS_PERMITIDOS.contains(&idioma) {
    errores.push(format!("El idioma debe ser: {}", IDIOMAS_PERMITIDOS.join(", ")));
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn valid() -> StudentFields {
    StudentFields { nombre: "María García".into(),
                    correo: "maria@example.com".into(),
                    numero_telefono: "9876543210".into(),
                    idioma: "inglés".into() }
  }

  #[test]
  fn accepts_valid_payload() {
    assert!(validate_fields(&valid()).is_ok());
  }

  #[test]
  fn rejects_blank_nombre() {
    let f = StudentFields { nombre: "   ".into(), ..valid() };
    let err = validate_fields(&f).unwrap_err();
    assert_eq!(err.messages(), ["El nombre es obligatorio".to_string()]);
  }

  #[test]
  fn rejects_long_nombre() {
    let f = StudentFields { nombre: "a".repeat(256), ..valid() };
    assert!(validate_fields(&f).is_err());
    let f = StudentFields { nombre: "á".repeat(255), ..valid() };
    assert!(validate_fields(&f).is_ok());
  }

  #[test]
  fn rejects_bad_phone_and_language_together() {
    let f = StudentFields { numero_telefono: "123".into(), idioma: "alemán".into(), ..valid() };
    let err = validate_fields(&f).unwrap_err();
    assert_eq!(err.messages().len(), 2);
  }

  #[test]
  fn rejects_malformed_correo() {
    for bad in ["correo-invalido", "a b@x.com", "@x.com", "a@"] {
      let f = StudentFields { correo: bad.into(), ..valid() };
      assert!(validate_fields(&f).is_err(), "{} debería fallar", bad);
    }
  }

  #[test]
  fn missing_fields_fail_full_validation() {
    let err = validate_fields(&StudentFields::default()).unwrap_err();
    assert_eq!(err.messages().len(), 4);
  }

  #[test]
  fn patch_validates_only_present_fields() {
    assert!(validate_patch(&StudentPatch::default()).is_ok());
    let p = StudentPatch { nombre: Some("Ana2".into()), ..Default::default() };
    assert!(validate_patch(&p).is_ok());
    let p = StudentPatch { idioma: Some("alemán".into()), ..Default::default() };
    assert!(validate_patch(&p).is_err());
  }
}
