pub mod aggregates;
pub mod iso_codes;

pub use aggregates::{default_aggregates, Aggregate, EU_ID, EU_MEMBERS, EU_NAME};
pub use iso_codes::{alpha3_table, numeric_table, ISO_3166_1};
