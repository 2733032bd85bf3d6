//! Update
//!
//! Pure transition function of the calorie counter.

use super::actions::Msg;
use super::state::Model;
use crate::models::Row;

/// Computes the model that follows `model` after `msg`.
pub fn update(msg: Msg, model: &Model) -> Model {
    match msg {
        Msg::AddRow => add_row(model),
        Msg::UpdateMealInput(text) => Model {
            eats_input: text,
            ..model.clone()
        },
        Msg::UpdateCaloriesInput(text) => Model {
            calories_input: text,
            ..model.clone()
        },
        Msg::FocusNext => Model {
            focus: model.focus.next(),
            ..model.clone()
        },
        Msg::FocusPrev => Model {
            focus: model.focus.prev(),
            ..model.clone()
        },
    }
}

/// Appends the inputs as a row when both are filled in. The inputs are kept as they are.
fn add_row(model: &Model) -> Model {
    if model.eats_input.is_empty() || model.calories_input.is_empty() {
        return model.clone();
    }

    let mut rows = model.rows.clone();
    rows.push(Row::new(&model.eats_input, &model.calories_input));
    Model {
        rows,
        ..model.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::state::Focus;

    fn filled(meal: &str, calories: &str) -> Model {
        Model {
            eats_input: meal.to_string(),
            calories_input: calories.to_string(),
            ..Model::new()
        }
    }

    #[test]
    fn add_row_appends_both_inputs() {
        let model = Model {
            rows: vec![Row::new("Toast", "120")],
            ..filled("Egg", "70")
        };

        let next = update(Msg::AddRow, &model);
        assert_eq!(next.rows.len(), model.rows.len() + 1);
        assert_eq!(next.rows.last(), Some(&Row::new("Egg", "70")));
        assert_eq!(next.rows[0], Row::new("Toast", "120"));
        assert_eq!(next.eats_input, "Egg");
        assert_eq!(next.calories_input, "70");
    }

    #[test]
    fn add_row_with_an_empty_input_changes_nothing() {
        for model in [filled("", ""), filled("Egg", ""), filled("", "70")] {
            assert_eq!(update(Msg::AddRow, &model), model);
        }
    }

    #[test]
    fn add_row_keeps_non_numeric_calories() {
        let next = update(Msg::AddRow, &filled("Cake", "lots"));
        assert_eq!(next.rows, vec![Row::new("Cake", "lots")]);
    }

    #[test]
    fn repeated_add_appends_once_per_dispatch() {
        let model = filled("Tea", "2");
        let once = update(Msg::AddRow, &model);
        let twice = update(Msg::AddRow, &once);

        assert_eq!(once.rows.len(), 1);
        assert_eq!(twice.rows, vec![Row::new("Tea", "2"), Row::new("Tea", "2")]);
        // same input, same output
        assert_eq!(update(Msg::AddRow, &model), once);
    }

    #[test]
    fn input_messages_replace_buffers() {
        let model = update(Msg::UpdateMealInput("Egg".into()), &Model::new());
        let model = update(Msg::UpdateCaloriesInput("70".into()), &model);
        assert_eq!(model, filled("Egg", "70"));

        let model = update(Msg::UpdateMealInput(String::new()), &model);
        assert_eq!(model.eats_input, "");
    }

    #[test]
    fn focus_cycles_through_controls() {
        let mut model = Model::new();
        let mut seen = Vec::new();
        for _ in 0..3 {
            model = update(Msg::FocusNext, &model);
            seen.push(model.focus);
        }
        assert_eq!(seen, vec![Focus::Calories, Focus::Add, Focus::Meal]);

        let back = update(Msg::FocusPrev, &Model::new());
        assert_eq!(back.focus, Focus::Add);
    }

    #[test]
    fn update_leaves_its_input_untouched() {
        let model = filled("Egg", "70");
        let before = model.clone();
        let _ = update(Msg::AddRow, &model);
        let _ = update(Msg::FocusNext, &model);
        assert_eq!(model, before);
    }
}
