//! Data models for the Biblioteca server
//!
//! Field names are the database column names, which are also the JSON
//! wire names; the API exposes its columns verbatim.

pub mod aluno;
pub mod emprestimo;
pub mod livro;
pub mod usuario;

// Re-export commonly used types
pub use aluno::Aluno;
pub use emprestimo::{Emprestimo, EmprestimoDetalhes};
pub use livro::Livro;
pub use usuario::Usuario;
