//! Generador atómico de identificadores.

use std::sync::atomic::{AtomicI64, Ordering};
use student_domain::StudentId;

/// Primer id emitido por defecto.
pub const DEFAULT_ID_START: StudentId = 1;

/// Contador monótono compartido por todos los llamadores.
///
/// `next_id` es un único `fetch_add`, así que dos llamadas concurrentes nunca
/// obtienen el mismo valor. Sólo `reset` lo hace retroceder.
#[derive(Debug)]
pub struct IdGenerator {
    start: StudentId,
    next: AtomicI64,
}

impl IdGenerator {
    pub fn new(start: StudentId) -> Self {
        Self { start, next: AtomicI64::new(start) }
    }

    /// Devuelve el siguiente id e incrementa el contador.
    pub fn next_id(&self) -> StudentId {
        self.next.fetch_add(1, Ordering::SeqCst)
    }

    /// Id que emitirá la próxima llamada a `next_id`.
    pub fn peek(&self) -> StudentId {
        self.next.load(Ordering::SeqCst)
    }

    pub fn start(&self) -> StudentId {
        self.start
    }

    /// Vuelve al valor inicial.
    pub fn reset(&self) {
        self.next.store(self.start, Ordering::SeqCst);
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_ID_START)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_monotonic() {
        let g = IdGenerator::default();
        assert_eq!(g.next_id(), 1);
        assert_eq!(g.next_id(), 2);
        assert_eq!(g.peek(), 3);
    }

    #[test]
    fn reset_returns_to_start() {
        let g = IdGenerator::new(100);
        g.next_id();
        g.next_id();
        g.reset();
        assert_eq!(g.next_id(), 100);
        assert_eq!(g.start(), 100);
    }

    #[test]
    fn concurrent_ids_are_distinct() {
        use std::collections::HashSet;
        use std::sync::Arc;
        use std::thread;

        let g = Arc::new(IdGenerator::default());
        let handles: Vec<_> = (0..8).map(|_| {
                                        let g = g.clone();
                                        thread::spawn(move || (0..250).map(|_| g.next_id()).collect::<Vec<_>>())
                                    })
                                    .collect();
        let mut all = HashSet::new();
        for h in handles {
            for id in h.join().unwrap() {
                assert!(all.insert(id), "id repetido: {}", id);
            }
        }
        assert_eq!(all.len(), 2000);
    }
}
