pub mod console_logger;
#[cfg(target_arch = "wasm32")]
mod js_navigator;
mod performance;

#[cfg(target_arch = "wasm32")]
pub use js_navigator::JsNavigator;
pub use performance::{measure, performance_now};
