//! Application state (Model)

use crate::models::Row;

/// Immutable snapshot of the calorie counter. Each dispatch produces a new one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Model {
    pub eats_input: String,
    pub calories_input: String,
    /// Append-only, in insertion order.
    pub rows: Vec<Row>,
    pub focus: Focus,
}

/// The control that receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Meal,
    Calories,
    Add,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Meal => Focus::Calories,
            Focus::Calories => Focus::Add,
            Focus::Add => Focus::Meal,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Meal => Focus::Add,
            Focus::Calories => Focus::Meal,
            Focus::Add => Focus::Calories,
        }
    }
}

impl Model {
    /// Empty inputs, no rows, meal input focused.
    pub fn new() -> Self {
        Self::default()
    }
}
