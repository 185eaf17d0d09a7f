//! Utilitários internos.

pub mod test_framework;
