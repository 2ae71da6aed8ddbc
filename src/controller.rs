// Archivo: controller.rs
// Propósito: capa externa sin transporte. Recibe cuerpos JSON, valida,
// llama al servicio y traduce el resultado a un código de estado HTTP y un
// cuerpo JSON. Un servidor HTTP sólo tendría que delegar aquí.
use serde_json::{json, Value as JsonValue};
use std::sync::Arc;
use student_domain::{validate_fields, validate_patch, DomainError, StudentDto, StudentFields, StudentId, StudentPatch};
use student_service::{ServiceError, StudentService};
use student_store::StudentRepository;
use thiserror::Error;

/// Respuesta lista para serializar.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
  pub status: u16,
  pub body: JsonValue,
}

impl ApiResponse {
  fn ok(body: JsonValue) -> Self {
    Self { status: 200, body }
  }

  fn created(body: JsonValue) -> Self {
    Self { status: 201, body }
  }
}

/// Errores de la capa externa: de entrada (400) o del servicio (404/409).
#[derive(Error, Debug)]
pub enum ControllerError {
  #[error(transparent)]
  Domain(#[from] DomainError),
  #[error(transparent)]
  Service(#[from] ServiceError),
}

impl ControllerError {
  pub fn status(&self) -> u16 {
    match self {
      Self::Domain(_) => 400,
      Self::Service(ServiceError::NotFound(_)) => 404,
      Self::Service(ServiceError::DuplicateKey(_)) => 409,
    }
  }

  fn reason(&self) -> &'static str {
    match self.status() {
      400 => "Bad Request",
      404 => "Not Found",
      _ => "Conflict",
    }
  }

  fn into_response(self) -> ApiResponse {
    let status = self.status();
    let mut body = json!({ "status": status, "error": self.reason(), "mensaje": self.to_string() });
    if let Self::Domain(DomainError::Validation(errores)) = &self {
      body["errores"] = json!(errores);
    }
    ApiResponse { status, body }
  }
}

/// Controlador de estudiantes sobre un almacén compartido.
pub struct StudentController<R> where R: StudentRepository
{
  service: StudentService<R>,
}

impl<R> StudentController<R> where R: StudentRepository
{
  pub fn new(repo: Arc<R>) -> Self {
    Self { service: StudentService::new(repo) }
  }

  /// GET /api/students
  pub fn list(&self) -> ApiResponse {
    let dtos: Vec<StudentDto> = self.service.list_all().iter().map(StudentDto::from).collect();
    ApiResponse::ok(json!(dtos))
  }

  /// GET /api/students/{id}
  pub fn get(&self, id: StudentId) -> ApiResponse {
    respond(self.service.get_by_id(id).map_err(ControllerError::from).map(|s| to_json(&s)), ApiResponse::ok)
  }

  /// POST /api/students
  pub fn create(&self, body: &str) -> ApiResponse {
    let result = parse_dto(body).map(StudentFields::from)
                                .and_then(|f| {
                                  validate_fields(&f)?;
                                  Ok(self.service.create(f)?)
                                })
                                .map(|s| to_json(&s));
    respond(result, ApiResponse::created)
  }

  /// PUT /api/students/{id}
  pub fn replace(&self, id: StudentId, body: &str) -> ApiResponse {
    let result = parse_dto(body).map(StudentFields::from)
                                .and_then(|f| {
                                  validate_fields(&f)?;
                                  Ok(self.service.replace(id, f)?)
                                })
                                .map(|s| to_json(&s));
    respond(result, ApiResponse::ok)
  }

  /// PATCH /api/students/{id}
  pub fn patch(&self, id: StudentId, body: &str) -> ApiResponse {
    let result = parse_dto(body).map(StudentPatch::from)
                                .and_then(|p| {
                                  validate_patch(&p)?;
                                  Ok(self.service.merge(id, p)?)
                                })
                                .map(|s| to_json(&s));
    respond(result, ApiResponse::ok)
  }

  /// DELETE /api/students/{id}
  pub fn delete(&self, id: StudentId) -> ApiResponse {
    let result = self.service
                     .delete(id)
                     .map(|_| json!({ "mensaje": format!("Estudiante con ID {} eliminado correctamente", id) }))
                     .map_err(ControllerError::from);
    respond(result, ApiResponse::ok)
  }

  /// Operación administrativa: vacía el almacén y reinicia los ids. No forma
  /// parte del flujo normal de peticiones.
  pub fn reset(&self) -> ApiResponse {
    let repo = self.service.repository();
    let removed = repo.count();
    repo.delete_all();
    log::info!("almacén reiniciado; {} estudiantes eliminados", removed);
    ApiResponse::ok(json!({ "mensaje": "Almacén reiniciado", "eliminados": removed }))
  }
}

fn parse_dto(body: &str) -> Result<StudentDto, ControllerError> {
  let dto: StudentDto = serde_json::from_str(body).map_err(DomainError::from)?;
  Ok(dto)
}

fn to_json(s: &student_domain::Student) -> JsonValue {
  json!(StudentDto::from(s))
}

fn respond(result: Result<JsonValue, ControllerError>, on_ok: fn(JsonValue) -> ApiResponse) -> ApiResponse {
  match result {
    Ok(body) => on_ok(body),
    Err(e) => e.into_response(),
  }
}
