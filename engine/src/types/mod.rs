//! Type chart and effectiveness profiles

mod effectiveness;
mod type_chart;

pub use effectiveness::EffectivenessProfile;
pub use type_chart::{TypeChart, TypeRelations};
