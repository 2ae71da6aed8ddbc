//! Crate `student-service` — reglas de negocio sobre el almacén
//!
//! `StudentService` aplica la unicidad del correo (sin distinguir
//! mayúsculas), las comprobaciones de existencia y la diferencia entre
//! reemplazo total (`replace`) y mezcla parcial (`merge`).
//!
//! La secuencia "comprobar + escribir" no es atómica: dos escrituras
//! concurrentes con el mismo correo pueden colarse entre la comprobación y la
//! escritura. Quien necesite unicidad estricta debe serializar las escrituras.
pub mod errors;
pub mod service;

pub use errors::*;
pub use service::*;
