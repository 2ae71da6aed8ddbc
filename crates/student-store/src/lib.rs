//! Crate `student-store` — almacén de estudiantes en memoria
//!
//! Define el contrato `StudentRepository` y su implementación concurrente
//! `InMemoryStudentRepository`, junto con el generador de identificadores
//! `IdGenerator`.
//!
//! Diseño resumido:
//! - Cada operación individual es atómica y segura entre hilos.
//! - No hay operaciones compuestas "comprobar + escribir": esa composición
//!   la hace el servicio y no es atómica.
//! - `delete_all` es administrativo: vacía el mapa y reinicia los ids.
//!
//! Ejemplo rápido:
//! ```rust
//! use student_store::{InMemoryStudentRepository, StudentRepository};
//! let repo = InMemoryStudentRepository::new();
//! assert!(repo.find_all().is_empty());
//! ```
pub mod id_generator;
pub mod in_memory;
pub mod repository;

pub use id_generator::*;
pub use in_memory::*;
pub use repository::*;
