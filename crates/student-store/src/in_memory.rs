// Archivo: in_memory.rs
// Propósito: implementación en memoria de `StudentRepository`.
//
// El mapa es un `DashMap` (bloqueo por fragmentos) y los ids salen de un
// `IdGenerator` atómico. No es durable: vive lo que viva el proceso.
use crate::id_generator::IdGenerator;
use crate::repository::StudentRepository;
use dashmap::DashMap;
use log::debug;
use student_domain::{Student, StudentId};

/// Almacén concurrente de estudiantes indexado por id.
#[derive(Debug)]
pub struct InMemoryStudentRepository {
    /// Registros vivos indexados por `id`.
    students: DashMap<StudentId, Student>,
    ids: IdGenerator,
}

impl InMemoryStudentRepository {
    /// Crea un almacén vacío cuyo primer id es 1.
    pub fn new() -> Self {
        Self::with_id_start(crate::id_generator::DEFAULT_ID_START)
    }

    /// Crea un almacén vacío cuyo primer id (y valor de reinicio) es `start`.
    pub fn with_id_start(start: StudentId) -> Self {
        Self { students: DashMap::new(), ids: IdGenerator::new(start) }
    }

    /// Id que recibirá el próximo registro nuevo.
    pub fn next_id(&self) -> StudentId {
        self.ids.peek()
    }
}

impl Default for InMemoryStudentRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl StudentRepository for InMemoryStudentRepository {
    fn find_all(&self) -> Vec<Student> {
        self.students.iter().map(|e| e.value().clone()).collect()
    }

    fn find_by_id(&self, id: StudentId) -> Option<Student> {
        self.students.get(&id).map(|e| e.value().clone())
    }

    fn find_by_correo(&self, correo: &str) -> Option<Student> {
        self.students
            .iter()
            .find(|e| e.value().has_correo(correo))
            .map(|e| e.value().clone())
    }

    fn save(&self, mut student: Student) -> Student {
        let id = match student.id {
            Some(id) => id,
            None => {
                let id = self.ids.next_id();
                debug!("id {} asignado a {}", id, student.correo);
                student.id = Some(id);
                id
            }
        };
        self.students.insert(id, student.clone());
        student
    }

    fn update(&self, student: Student) -> Student {
        match student.id {
            Some(id) => {
                debug!("reemplazando estudiante {}", id);
                self.students.insert(id, student.clone());
                student
            }
            // Sin id no hay entrada que reemplazar: se trata como alta.
            None => self.save(student),
        }
    }

    fn delete_by_id(&self, id: StudentId) -> bool {
        let removed = self.students.remove(&id).is_some();
        if removed {
            debug!("estudiante {} eliminado", id);
        }
        removed
    }

    fn exists_by_correo(&self, correo: &str) -> bool {
        self.students.iter().any(|e| e.value().has_correo(correo))
    }

    fn exists_by_correo_excluding_id(&self, correo: &str, exclude_id: StudentId) -> bool {
        self.students
            .iter()
            .any(|e| *e.key() != exclude_id && e.value().has_correo(correo))
    }

    fn count(&self) -> usize {
        self.students.len()
    }

    fn delete_all(&self) {
        self.students.clear();
        self.ids.reset();
        debug!("almacén vaciado; próximo id {}", self.ids.peek());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use student_domain::StudentFields;

    fn student(nombre: &str, correo: &str) -> Student {
        Student::new(StudentFields { nombre: nombre.into(),
                                     correo: correo.into(),
                                     numero_telefono: "5555555555".into(),
                                     idioma: "español".into() })
    }

    #[test]
    fn save_assigns_sequential_ids() {
        let repo = InMemoryStudentRepository::new();
        let a = repo.save(student("Roberto Medrano", "roberto@gmail.com"));
        let b = repo.save(student("Sofía", "sofia@gmail.com"));
        assert_eq!(a.id, Some(1));
        assert_eq!(b.id, Some(2));
        assert_eq!(a.nombre, "Roberto Medrano");
        assert_eq!(repo.next_id(), 3);
    }

    #[test]
    fn save_with_explicit_id_overwrites_without_new_id() {
        let repo = InMemoryStudentRepository::new();
        let mut a = repo.save(student("Pedro", "pedro@gmail.com"));
        a.nombre = "Pedro Actualizado".into();
        let again = repo.save(a);
        assert_eq!(again.id, Some(1));
        assert_eq!(repo.count(), 1);
        assert_eq!(repo.next_id(), 2);
        assert_eq!(repo.find_by_id(1).unwrap().nombre, "Pedro Actualizado");
    }

    #[test]
    fn update_without_id_falls_back_to_save() {
        let repo = InMemoryStudentRepository::new();
        let s = repo.update(student("Lucía", "lucia@gmail.com"));
        assert_eq!(s.id, Some(1));
        assert!(repo.find_by_id(1).is_some());
    }

    #[test]
    fn custom_id_start_is_used_and_restored() {
        let repo = InMemoryStudentRepository::with_id_start(1000);
        assert_eq!(repo.save(student("A", "a@x.com")).id, Some(1000));
        assert_eq!(repo.save(student("B", "b@x.com")).id, Some(1001));
        repo.delete_all();
        assert_eq!(repo.save(student("C", "c@x.com")).id, Some(1000));
    }

    #[test]
    fn excluding_id_ignores_own_record() {
        let repo = InMemoryStudentRepository::new();
        let s1 = repo.save(student("Diego", "diego@gmail.com"));
        repo.save(student("Elena", "elena@gmail.com"));
        let id1 = s1.id.unwrap();
        assert!(!repo.exists_by_correo_excluding_id("DIEGO@gmail.com", id1));
        assert!(repo.exists_by_correo_excluding_id("elena@gmail.com", id1));
    }
}
