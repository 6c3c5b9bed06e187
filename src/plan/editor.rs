use tracing::debug;

use crate::error::{Result, SaveSmartError};
use crate::models::{Meal, MealPlanDay, MealType, Recipe, ShoppingList, Weekday};
use crate::shopping::generate_shopping_list;

/// A weekly plan: each (day, meal type) slot holds at most one meal.
///
/// Every edit leaves the shopping list to be regenerated from scratch via
/// [`MealPlan::shopping_list`]; nothing is patched incrementally. On disk a
/// plan is just its array of days.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MealPlan {
    pub days: Vec<MealPlanDay>,
}

impl MealPlan {
    pub fn new(days: Vec<MealPlanDay>) -> Self {
        Self { days }
    }

    /// Place a meal into its slot, returning whatever it replaced.
    ///
    /// A missing day is created in weekday order.
    pub fn add_meal(&mut self, day: Weekday, meal: Meal) -> Option<Meal> {
        let plan_day = self.day_mut_or_insert(day);

        match plan_day.meals.iter().position(|m| m.meal_type == meal.meal_type) {
            Some(pos) => {
                debug!(%day, meal = %meal.meal_type, "replacing meal");
                Some(std::mem::replace(&mut plan_day.meals[pos], meal))
            }
            None => {
                debug!(%day, meal = %meal.meal_type, "adding meal");
                plan_day.meals.push(meal);
                None
            }
        }
    }

    /// Clear a slot.
    pub fn remove_meal(&mut self, day: Weekday, meal_type: MealType) -> Result<Meal> {
        let not_found = || SaveSmartError::MealNotFound { day, meal_type };

        let plan_day = self
            .days
            .iter_mut()
            .find(|d| d.day == day)
            .ok_or_else(not_found)?;

        let pos = plan_day
            .meals
            .iter()
            .position(|m| m.meal_type == meal_type)
            .ok_or_else(not_found)?;

        debug!(%day, meal = %meal_type, "removing meal");
        Ok(plan_day.meals.remove(pos))
    }

    pub fn day(&self, day: Weekday) -> Option<&MealPlanDay> {
        self.days.iter().find(|d| d.day == day)
    }

    /// The meal occupying a slot, if any.
    pub fn meal(&self, day: Weekday, meal_type: MealType) -> Option<&Meal> {
        self.day(day).and_then(|d| d.meal(meal_type))
    }

    /// Total number of planned meals.
    pub fn meal_count(&self) -> usize {
        self.days.iter().map(|d| d.meals.len()).sum()
    }

    /// Regenerate the shopping list for the current plan.
    pub fn shopping_list(&self, recipes: &[Recipe]) -> ShoppingList {
        generate_shopping_list(&self.days, recipes)
    }

    fn day_mut_or_insert(&mut self, day: Weekday) -> &mut MealPlanDay {
        let pos = match self.days.iter().position(|d| d.day == day) {
            Some(pos) => pos,
            None => {
                let pos = self
                    .days
                    .iter()
                    .position(|d| d.day > day)
                    .unwrap_or(self.days.len());
                self.days.insert(pos, MealPlanDay::new(day));
                pos
            }
        };
        &mut self.days[pos]
    }
}
