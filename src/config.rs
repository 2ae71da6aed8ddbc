// Archivo: config.rs
// Propósito: leer la configuración del proceso desde el entorno (y `.env`).
use student_domain::StudentId;
use thiserror::Error;

const DEFAULT_LOG: &str = "info";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
  #[error("Valor inválido para {var}: '{value}' ({reason})")]
  Invalid { var: &'static str, value: String, reason: &'static str },
}

/// Configuración del binario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
  /// Primer id emitido y valor al que vuelve tras un reinicio.
  pub id_start: StudentId,
  /// Directiva de filtro para el subscriber cuando no hay `RUST_LOG`.
  pub log_filter: String,
  /// Precarga dos estudiantes de demostración al arrancar.
  pub seed_demo: bool,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self { id_start: student_store::DEFAULT_ID_START, log_filter: DEFAULT_LOG.into(), seed_demo: false }
  }
}

impl AppConfig {
  /// Carga `.env` si existe y lee `STUDENT_ID_START`, `STUDENT_LOG` y
  /// `STUDENT_SEED_DEMO`.
  pub fn from_env() -> Result<Self, ConfigError> {
    dotenvy::dotenv().ok();
    Self::from_lookup(|k| std::env::var(k).ok())
  }

  pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where F: Fn(&str) -> Option<String>
  {
    let mut cfg = Self::default();
    if let Some(raw) = lookup("STUDENT_ID_START") {
      let id = raw.trim().parse::<StudentId>().map_err(|_| ConfigError::Invalid { var: "STUDENT_ID_START",
                                                                                 value: raw.clone(),
                                                                                 reason: "no es un entero" })?;
      if id < 1 {
        return Err(ConfigError::Invalid { var: "STUDENT_ID_START", value: raw, reason: "debe ser positivo" });
      }
      cfg.id_start = id;
    }
    if let Some(raw) = lookup("STUDENT_LOG") {
      if !raw.trim().is_empty() {
        cfg.log_filter = raw.trim().to_string();
      }
    }
    if let Some(raw) = lookup("STUDENT_SEED_DEMO") {
      cfg.seed_demo = match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "si" | "sí" => true,
        "" | "0" | "false" | "no" => false,
        _ => {
          return Err(ConfigError::Invalid { var: "STUDENT_SEED_DEMO", value: raw, reason: "se esperaba true/false" })
        }
      };
    }
    Ok(cfg)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |k| map.get(k).cloned()
  }

  #[test]
  fn defaults_when_unset() {
    let cfg = AppConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, AppConfig::default());
    assert_eq!(cfg.id_start, 1);
  }

  #[test]
  fn reads_all_values() {
    let cfg = AppConfig::from_lookup(lookup(&[("STUDENT_ID_START", "500"),
                                              ("STUDENT_LOG", "debug"),
                                              ("STUDENT_SEED_DEMO", "true")])).unwrap();
    assert_eq!(cfg.id_start, 500);
    assert_eq!(cfg.log_filter, "debug");
    assert!(cfg.seed_demo);
  }

  #[test]
  fn rejects_bad_id_start() {
    assert!(AppConfig::from_lookup(lookup(&[("STUDENT_ID_START", "abc")])).is_err());
    assert!(AppConfig::from_lookup(lookup(&[("STUDENT_ID_START", "0")])).is_err());
  }

  #[test]
  fn rejects_bad_seed_flag() {
    let err = AppConfig::from_lookup(lookup(&[("STUDENT_SEED_DEMO", "quizá")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "STUDENT_SEED_DEMO", .. }));
  }
}
