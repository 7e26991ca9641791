//! Repository pattern para acesso ao banco.
//!
//! Separa a lógica de acesso a dados dos handlers de rota.
//! Todos os repositories usam o padrão de static methods.

pub mod datasets;
pub mod research_data;

pub use datasets::DatasetRepository;
pub use research_data::ResearchDataRepository;
