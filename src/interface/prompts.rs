use dialoguer::{Confirm, Select};
use strsim::jaro_winkler;

use crate::error::{NutriError, Result};
use crate::models::{FoodGroupId, MAX_AGE, MIN_AGE};

/// Minimum similarity for a group name suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Ask for the child's age.
pub fn prompt_age() -> Result<u32> {
    let ages: Vec<u32> = (MIN_AGE..=MAX_AGE).collect();
    let options: Vec<String> = ages.iter().map(|a| format!("{} años", a)).collect();

    let selection = Select::new()
        .with_prompt("Selecciona la edad de tu peque")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(ages[selection])
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Groups whose key or display name resembles `input`, best first.
pub fn suggest_groups(input: &str) -> Vec<(FoodGroupId, f64)> {
    let needle = input.trim().to_lowercase();
    let mut candidates: Vec<(FoodGroupId, f64)> = FoodGroupId::ALL
        .into_iter()
        .map(|id| {
            let by_key = jaro_winkler(id.key(), &needle);
            let by_name = jaro_winkler(&id.display_name().to_lowercase(), &needle);
            (id, by_key.max(by_name))
        })
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.total_cmp(&a.1));
    candidates
}

/// Turn user input into a group, asking the user to pick on a fuzzy match.
pub fn resolve_group(input: &str) -> Result<FoodGroupId> {
    if let Ok(id) = input.parse::<FoodGroupId>() {
        return Ok(id);
    }

    let candidates = suggest_groups(input);
    match candidates.as_slice() {
        [] => Err(NutriError::UnknownFoodGroup(input.to_string())),
        [(id, _)] => {
            let confirm = prompt_yes_no(&format!("¿Quisiste decir '{}'?", id.display_name()), true)?;
            if confirm {
                Ok(*id)
            } else {
                Err(NutriError::UnknownFoodGroup(input.to_string()))
            }
        }
        _ => {
            let mut options: Vec<&str> = candidates.iter().map(|(id, _)| id.display_name()).collect();
            options.push("Ninguno");

            let selection = Select::new()
                .with_prompt("¿Cuál grupo?")
                .items(&options)
                .default(0)
                .interact()?;

            candidates
                .get(selection)
                .map(|(id, _)| *id)
                .ok_or_else(|| NutriError::UnknownFoodGroup(input.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typo_suggests_group() {
        let suggestions = suggest_groups("verdura");
        assert_eq!(suggestions.first().map(|s| s.0), Some(FoodGroupId::Verduras));
    }

    #[test]
    fn test_display_name_matches() {
        let suggestions = suggest_groups("vasos de agu");
        assert_eq!(suggestions.first().map(|s| s.0), Some(FoodGroupId::Agua));
    }

    #[test]
    fn test_nonsense_has_no_suggestions() {
        assert!(suggest_groups("xyzzy").is_empty());
    }

    #[test]
    fn test_exact_key_resolves_without_prompt() {
        assert_eq!(resolve_group("Cereales").unwrap(), FoodGroupId::Cereales);
    }
}
