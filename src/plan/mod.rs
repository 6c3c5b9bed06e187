pub mod editor;
pub mod summary;

pub use editor::MealPlan;
pub use summary::{summarize_plan, DaySummary, PlanSummary};
