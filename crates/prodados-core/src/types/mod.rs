//! Tipos de domínio dos serviços de dados.

pub mod data_point;
pub mod dataset;
pub mod indicator;

pub use data_point::{DataOrigin, DataPoint, PointMetadata};
pub use dataset::{CacheEntry, DatasetDescriptor, ResearchCategory};
pub use indicator::{IndicatorRecord, Trend, TrendPolarity};
