// Archivo: service.rs
// Propósito: implementar `StudentService`, la capa que traduce cargas
// externas en operaciones del almacén aplicando las reglas de negocio.
use crate::errors::{Result, ServiceError};
use log::{info, warn};
use std::sync::Arc;
use student_domain::{Student, StudentFields, StudentId, StudentPatch};
use student_store::StudentRepository;

/// Servicio de alto nivel sobre estudiantes.
///
/// Recibe valores ya validados por la capa externa. Toda operación que
/// muta o aplica por completo o falla sin tocar el almacén.
pub struct StudentService<R> where R: StudentRepository
{
    repo: Arc<R>,
}

impl<R> Clone for StudentService<R> where R: StudentRepository
{
    fn clone(&self) -> Self {
        Self { repo: self.repo.clone() }
    }
}

impl<R> StudentService<R> where R: StudentRepository
{
    /// Crea el servicio inyectando el almacén.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Acceso al almacén subyacente (para operaciones administrativas).
    pub fn repository(&self) -> &Arc<R> {
        &self.repo
    }

    pub fn list_all(&self) -> Vec<Student> {
        self.repo.find_all()
    }

    pub fn get_by_id(&self, id: StudentId) -> Result<Student> {
        self.find_existing(id)
    }

    /// Alta: falla con `DuplicateKey` si el correo ya está en uso.
    pub fn create(&self, fields: StudentFields) -> Result<Student> {
        if self.repo.exists_by_correo(&fields.correo) {
            warn!("alta rechazada, correo duplicado: {}", fields.correo);
            return Err(ServiceError::DuplicateKey(fields.correo));
        }
        let saved = self.repo.save(Student::new(fields));
        info!("estudiante creado: {}", saved);
        Ok(saved)
    }

    /// Reemplazo total: todos los campos mutables se sobrescriben, incluidos
    /// los que llegan en blanco.
    pub fn replace(&self, id: StudentId, fields: StudentFields) -> Result<Student> {
        let mut existing = self.find_existing(id)?;
        self.ensure_correo_free(&fields.correo, id)?;
        existing.replace_fields(fields);
        Ok(self.repo.update(existing))
    }

    /// Mezcla parcial: sólo se aplican los atributos presentes. Si viene
    /// `correo`, se comprueba antes de modificar nada.
    pub fn merge(&self, id: StudentId, patch: StudentPatch) -> Result<Student> {
        let mut existing = self.find_existing(id)?;
        if let Some(correo) = &patch.correo {
            self.ensure_correo_free(correo, id)?;
        }
        existing.apply_patch(patch);
        Ok(self.repo.update(existing))
    }

    pub fn delete(&self, id: StudentId) -> Result<()> {
        if !self.repo.delete_by_id(id) {
            warn!("borrado de estudiante inexistente {}", id);
            return Err(ServiceError::NotFound(id));
        }
        info!("estudiante {} eliminado", id);
        Ok(())
    }

    fn find_existing(&self, id: StudentId) -> Result<Student> {
        self.repo.find_by_id(id).ok_or_else(|| {
                                    warn!("estudiante {} no encontrado", id);
                                    ServiceError::NotFound(id)
                                })
    }

    // Ningún otro registro (distinto de `own_id`) puede tener ese correo.
    fn ensure_correo_free(&self, correo: &str, own_id: StudentId) -> Result<()> {
        if self.repo.exists_by_correo_excluding_id(correo, own_id) {
            warn!("correo {} ya usado por otro estudiante; rechazado para id {}", correo, own_id);
            return Err(ServiceError::DuplicateKey(correo.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use student_store::InMemoryStudentRepository;

    fn fields(nombre: &str, correo: &str) -> StudentFields {
        StudentFields { nombre: nombre.into(),
                        correo: correo.into(),
                        numero_telefono: "1234567890".into(),
                        idioma: "español".into() }
    }

    fn service() -> StudentService<InMemoryStudentRepository> {
        StudentService::new(Arc::new(InMemoryStudentRepository::new()))
    }

    #[test]
    fn get_by_id_missing_is_not_found() {
        let svc = service();
        assert_eq!(svc.get_by_id(999), Err(ServiceError::NotFound(999)));
    }

    #[test]
    fn create_then_get() {
        let svc = service();
        let s = svc.create(fields("Juan Pérez", "juan@example.com")).unwrap();
        assert_eq!(s.id, Some(1));
        assert_eq!(svc.get_by_id(1).unwrap().nombre, "Juan Pérez");
        assert_eq!(svc.list_all().len(), 1);
    }

    #[test]
    fn replace_keeps_own_correo() {
        let svc = service();
        svc.create(fields("Juan", "juan@example.com")).unwrap();
        // el mismo correo con otras mayúsculas pertenece al propio registro
        let r = svc.replace(1, fields("Juan Actualizado", "JUAN@example.com")).unwrap();
        assert_eq!(r.correo, "JUAN@example.com");
        assert_eq!(r.id, Some(1));
    }

    #[test]
    fn empty_patch_keeps_record() {
        let svc = service();
        let before = svc.create(fields("Ana", "ana@x.com")).unwrap();
        let after = svc.merge(1, StudentPatch::default()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn clones_share_the_store() {
        let svc = service();
        let other = svc.clone();
        svc.create(fields("Ana", "ana@x.com")).unwrap();
        assert_eq!(other.list_all().len(), 1);
        assert_eq!(other.repository().count(), 1);
    }
}
