pub mod food;
pub mod goal;
pub mod log;
pub mod meal;
pub mod nutrients;

pub use food::FoodItem;
pub use goal::Goal;
pub use log::DailyLog;
pub use meal::Meal;
pub use nutrients::{Aggregatable, NutrientValue};
