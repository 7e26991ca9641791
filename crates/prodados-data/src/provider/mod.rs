//! Clientes de APIs externas e substitutos sintéticos.

pub mod fgv;
pub mod ibge_agregados;
pub mod inep;
pub mod sidra;

pub use ibge_agregados::AgregadosClient;
pub use sidra::SidraClient;
