pub mod aggregate_resolver;
pub mod color_scale;
pub mod interaction;
pub mod map_logic;
pub mod normalizer;
pub mod render;
pub mod score_index;

pub use aggregate_resolver::{AggregateResolver, Resolution};
pub use color_scale::{color_for, format_score, legend};
pub use interaction::{InteractionController, Navigator};
pub use map_logic::MapLogic;
pub use normalizer::{
    classify, feature_identifier, feature_name, normalize, normalize_any, CodeKind,
};
pub use render::{render_features, ChoroplethRenderer};
pub use score_index::CountryScoreIndex;
