use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::catalog::Catalog;
use crate::error::{MenuError, Result};
use crate::interface::render::display_item_details;
use crate::models::MenuItem;

/// Minimum similarity for a "did you mean" suggestion.
const FUZZY_THRESHOLD: f64 = 0.7;

/// How the user wants to browse a restaurant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseMode {
    ByCategory,
    Search,
    FullMenu,
}

/// Pick one entry from a list.
pub fn prompt_choice(prompt: &str, options: &[&str]) -> Result<usize> {
    if options.is_empty() {
        return Err(MenuError::InvalidInput("nothing to choose from".to_string()));
    }
    let labels: Vec<&str> = options
        .iter()
        .map(|o| if o.is_empty() { "(uncategorized)" } else { *o })
        .collect();

    Ok(Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?)
}

pub fn prompt_browse_mode(restaurant: &str) -> Result<BrowseMode> {
    let options = [
        "View menu by category",
        "Search and build a meal",
        "View full menu",
    ];
    let selection = Select::new()
        .with_prompt(format!("Options for {}", restaurant))
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => BrowseMode::ByCategory,
        1 => BrowseMode::Search,
        _ => BrowseMode::FullMenu,
    })
}

/// Items whose name resembles `query`, best match first.
pub fn fuzzy_matches<'a>(
    rows: &[(usize, &'a MenuItem)],
    query: &str,
) -> Vec<(usize, &'a MenuItem, f64)> {
    let query = query.trim().to_lowercase();
    let mut candidates: Vec<(usize, &MenuItem, f64)> = rows
        .iter()
        .map(|&(row, item)| (row, item, jaro_winkler(&item.key(), &query)))
        .filter(|(_, _, score)| *score > FUZZY_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(std::cmp::Ordering::Equal));
    candidates
}

/// Repeatedly search a restaurant's menu, collecting matching rows.
pub fn prompt_search(catalog: &Catalog, restaurant: &str) -> Result<Vec<usize>> {
    let mut collected = Vec::new();

    loop {
        let query: String = Input::new()
            .with_prompt("Enter the name or id of the item to search for")
            .allow_empty(true)
            .interact_text()?;

        let results = catalog.search_in(restaurant, &query);
        if results.is_empty() {
            let menu = catalog.menu(restaurant);
            let suggestions = fuzzy_matches(&menu, &query);
            if suggestions.is_empty() {
                println!("No items found for your search.");
            } else {
                let mut options: Vec<String> = suggestions
                    .iter()
                    .take(5)
                    .map(|(_, item, _)| item.display_name())
                    .collect();
                options.push("None of these".to_string());

                let choice = Select::new()
                    .with_prompt("No exact match. Did you mean")
                    .items(&options)
                    .default(0)
                    .interact()?;

                if let Some((row, item, _)) = suggestions.get(choice).filter(|_| choice < 5) {
                    display_item_details(item);
                    collected.push(*row);
                }
            }
        } else {
            for (row, item) in results {
                display_item_details(item);
                collected.push(row);
            }
        }

        if !prompt_yes_no("Search for another item?", false)? {
            break;
        }
    }

    Ok(collected)
}

/// Parse `1, 5, 8` into zero-based positions within a list of `len` entries.
pub fn parse_selection(input: &str, len: usize) -> Result<Vec<usize>> {
    let mut picks = Vec::new();
    for part in input.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let number: usize = part
            .parse()
            .map_err(|_| MenuError::InvalidInput(format!("'{}' is not a number", part)))?;
        if number == 0 || number > len {
            return Err(MenuError::InvalidInput(format!(
                "{} is not between 1 and {}",
                number, len
            )));
        }
        picks.push(number - 1);
    }
    Ok(picks)
}

/// Ask which displayed entries go into the meal.
pub fn prompt_meal_selection(len: usize) -> Result<Vec<usize>> {
    let input: String = Input::new()
        .with_prompt("Enter the numbers of the items in your meal, separated by commas (e.g. 1, 5, 8)")
        .interact_text()?;
    parse_selection(&input, len)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("1, 3,3", 3).unwrap(), vec![0, 2, 2]);
        assert_eq!(parse_selection(" 2 ,", 2).unwrap(), vec![1]);
        assert!(parse_selection("", 2).unwrap().is_empty());
    }

    #[test]
    fn test_parse_selection_rejects_bad_input() {
        assert!(matches!(parse_selection("0", 3), Err(MenuError::InvalidInput(_))));
        assert!(matches!(parse_selection("4", 3), Err(MenuError::InvalidInput(_))));
        assert!(matches!(parse_selection("one", 3), Err(MenuError::InvalidInput(_))));
    }

    #[test]
    fn test_fuzzy_matches_ranks_closest_first() {
        let items = [
            MenuItem::new("Acme", "", "Chicken Sandwich"),
            MenuItem::new("Acme", "", "Waffle Fries"),
            MenuItem::new("Acme", "", "Chicken Sandwch Deluxe"),
        ];
        let rows: Vec<(usize, &MenuItem)> = items.iter().enumerate().collect();

        let matches = fuzzy_matches(&rows, "chiken sandwich");
        assert!(!matches.is_empty());
        assert_eq!(matches[0].0, 0);
        assert!(matches.iter().all(|(row, _, _)| *row != 1));
    }
}
