use thiserror::Error;

use crate::models::{MealType, Weekday};

#[derive(Debug, Error)]
pub enum SaveSmartError {
    #[error("No {meal_type} planned for {day}")]
    MealNotFound { day: Weekday, meal_type: MealType },

    #[error("Unresolved recipe references: {}", .0.join(", "))]
    UnresolvedRecipes(Vec<String>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, SaveSmartError>;
