//! Domain entities - the records flowing through the enrichment pipeline

mod enriched_entity;
mod input_record;
mod resolved_entity;
mod summary_row;

pub use enriched_entity::EnrichedEntity;
pub use input_record::InputRecord;
pub use resolved_entity::{EntityAttributes, ResolvedEntity};
pub use summary_row::SummaryRow;
