//! Messages
//!
//! Every state change of the calorie counter is one of these.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Append the current meal and calorie inputs as a new row.
    AddRow,
    /// The meal input now holds this text.
    UpdateMealInput(String),
    /// The calorie input now holds this text.
    UpdateCaloriesInput(String),

    FocusNext,
    FocusPrev,
}
