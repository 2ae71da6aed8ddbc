// Archivo: repository.rs
// Propósito: definir el trait `StudentRepository`, el contrato que deben
// implementar los almacenes de estudiantes.
use student_domain::{Student, StudentId};

/// Contrato del almacén de estudiantes.
///
/// Las operaciones son infalibles y cada una es atómica por sí sola. Las
/// comparaciones de `correo` no distinguen mayúsculas de minúsculas.
pub trait StudentRepository: Send + Sync {
    /// Copia de todos los registros actuales, en orden no especificado.
    fn find_all(&self) -> Vec<Student>;

    /// Búsqueda exacta por id.
    fn find_by_id(&self, id: StudentId) -> Option<Student>;

    /// Algún registro cuyo correo coincida. Si por una carrera hubiese más
    /// de uno, devuelve cualquiera de ellos.
    fn find_by_correo(&self, correo: &str) -> Option<Student>;

    /// Si `student.id` es `None` obtiene el siguiente id del generador y lo
    /// asigna; después inserta (o sobrescribe) la entrada. No comprueba
    /// duplicados.
    fn save(&self, student: Student) -> Student;

    /// Reemplaza incondicionalmente la entrada en `student.id`. El llamador
    /// debe haber comprobado la existencia con `find_by_id`.
    fn update(&self, student: Student) -> Student;

    /// Elimina el registro y devuelve si existía.
    fn delete_by_id(&self, id: StudentId) -> bool;

    fn exists_by_correo(&self, correo: &str) -> bool;

    /// Igual que `exists_by_correo` pero ignorando el registro `exclude_id`.
    fn exists_by_correo_excluding_id(&self, correo: &str, exclude_id: StudentId) -> bool;

    /// Número de registros vivos.
    fn count(&self) -> usize;

    /// Operación administrativa y destructiva: borra todos los registros y
    /// reinicia el generador de ids a su valor inicial.
    fn delete_all(&self);
}
