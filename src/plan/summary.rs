use serde::Serialize;

use crate::models::{MealPlanDay, Weekday};

/// Totals for one planned day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    pub day: Weekday,
    pub meal_count: usize,
    pub estimated_calories: f64,
    pub estimated_cost: f64,
}

/// Overview of a whole plan from the meals' own estimates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    /// In plan order.
    pub days: Vec<DaySummary>,
    pub total_estimated_calories: f64,
    pub total_estimated_cost: f64,
    pub recipe_meals: usize,
    pub custom_meals: usize,
}

impl PlanSummary {
    /// Mean estimated calories per planned day, zero for an empty plan.
    pub fn average_daily_calories(&self) -> f64 {
        if self.days.is_empty() {
            0.0
        } else {
            self.total_estimated_calories / self.days.len() as f64
        }
    }
}

/// Summarize the estimated calories and cost of a plan.
pub fn summarize_plan(days: &[MealPlanDay]) -> PlanSummary {
    let mut recipe_meals = 0;
    let mut custom_meals = 0;

    let summaries: Vec<DaySummary> = days
        .iter()
        .map(|d| {
            for meal in &d.meals {
                if meal.is_custom() {
                    custom_meals += 1;
                } else {
                    recipe_meals += 1;
                }
            }

            DaySummary {
                day: d.day,
                meal_count: d.meals.len(),
                estimated_calories: d.meals.iter().map(|m| m.estimated_calories).sum(),
                estimated_cost: d.meals.iter().map(|m| m.estimated_cost).sum(),
            }
        })
        .collect();

    PlanSummary {
        total_estimated_calories: summaries.iter().map(|d| d.estimated_calories).sum(),
        total_estimated_cost: summaries.iter().map(|d| d.estimated_cost).sum(),
        days: summaries,
        recipe_meals,
        custom_meals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Meal, MealType};

    fn meal(meal_type: MealType, recipe_id: Option<&str>, cal: f64, cost: f64) -> Meal {
        Meal {
            meal_type,
            name: "meal".to_string(),
            description: String::new(),
            recipe_id: recipe_id.map(str::to_string),
            estimated_calories: cal,
            estimated_cost: cost,
        }
    }

    #[test]
    fn test_summarize_plan() {
        let days = vec![
            MealPlanDay {
                day: Weekday::Monday,
                meals: vec![
                    meal(MealType::Breakfast, None, 400.0, 2.5),
                    meal(MealType::Dinner, Some("r1"), 800.0, 9.0),
                ],
            },
            MealPlanDay {
                day: Weekday::Tuesday,
                meals: vec![meal(MealType::Lunch, Some("r2"), 600.0, 5.5)],
            },
        ];

        let summary = summarize_plan(&days);
        assert_eq!(summary.days.len(), 2);
        assert_eq!(summary.days[0].meal_count, 2);
        assert!((summary.days[0].estimated_cost - 11.5).abs() < 0.001);
        assert!((summary.total_estimated_calories - 1800.0).abs() < 0.001);
        assert!((summary.total_estimated_cost - 17.0).abs() < 0.001);
        assert_eq!(summary.recipe_meals, 2);
        assert_eq!(summary.custom_meals, 1);
        assert!((summary.average_daily_calories() - 900.0).abs() < 0.001);
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize_plan(&[]);
        assert!(summary.days.is_empty());
        assert_eq!(summary.total_estimated_cost, 0.0);
        assert_eq!(summary.average_daily_calories(), 0.0);
    }
}
