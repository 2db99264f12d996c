use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use strsim::jaro_winkler;
use tracing::{info, warn};

use crate::error::{PlannerError, Result};
use crate::models::MealRecord;

/// Columns every catalog must carry. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "Meal Name",
    "Category",
    "Calories",
    "Ingredients",
    "Weight (g)",
    "Protein (g)",
    "Carbohydrates (g)",
    "Fat (g)",
    "Meal Type",
];

/// Minimum Jaro-Winkler similarity for a header to be offered as a suggestion.
const HEADER_SUGGESTION_THRESHOLD: f64 = 0.8;

/// Load the meal catalog from a CSV file.
///
/// Fails with `CatalogUnavailable` when the file cannot be read and with
/// `CatalogMalformed` when a required column is missing or a row cannot be
/// decoded. Rows with negative or non-finite numbers are skipped.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<MealRecord>> {
    let path = path.as_ref();
    let content = fs::read(path).map_err(|source| PlannerError::CatalogUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let meals = load_catalog_from_reader(content.as_slice())?;
    info!(path = %path.display(), meals = meals.len(), "loaded meal catalog");
    Ok(meals)
}

/// Load the meal catalog from any CSV reader.
pub fn load_catalog_from_reader<R: Read>(reader: R) -> Result<Vec<MealRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::Headers)
        .from_reader(reader);

    let headers: StringRecord = rdr
        .headers()
        .map_err(|e| PlannerError::CatalogMalformed(format!("unreadable header: {}", e)))?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim())
        .collect();

    check_required_columns(&headers)?;
    rdr.set_headers(headers);

    let mut meals = Vec::new();
    for result in rdr.deserialize::<MealRecord>() {
        let meal = result.map_err(|e| PlannerError::CatalogMalformed(e.to_string()))?;

        if !meal.is_valid() {
            warn!(meal = %meal.debug_string(), "skipping catalog row with invalid numbers");
            continue;
        }

        meals.push(meal);
    }

    Ok(meals)
}

fn check_required_columns(headers: &StringRecord) -> Result<()> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| match closest_header(headers, col) {
            Some(found) => format!("'{}' (did you mean '{}'?)", col, found),
            None => format!("'{}'", col),
        })
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    Err(PlannerError::CatalogMalformed(format!(
        "missing required column(s): {}",
        missing.join(", ")
    )))
}

fn closest_header<'a>(headers: &'a StringRecord, wanted: &str) -> Option<&'a str> {
    headers
        .iter()
        .map(|h| (h, jaro_winkler(&h.to_lowercase(), &wanted.to_lowercase())))
        .filter(|(_, score)| *score > HEADER_SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(h, _)| h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str =
        "Meal Name,Category,Calories,Ingredients,Weight (g),Protein (g),Carbohydrates (g),Fat (g),Meal Type";

    #[test]
    fn test_load_from_file() {
        let csv = format!(
            "{}\nOatmeal,Breakfast,300,oats and milk,250,10,50,6,vegetarian\n",
            HEADER
        );
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(csv.as_bytes()).unwrap();

        let meals = load_catalog(file.path()).unwrap();
        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].name, "Oatmeal");
        assert_eq!(meals[0].calories, 300.0);
        assert_eq!(meals[0].meal_type, "vegetarian");
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let err = load_catalog("/definitely/not/here/food.csv").unwrap_err();
        assert!(matches!(err, PlannerError::CatalogUnavailable { .. }));
    }

    #[test]
    fn test_bom_and_padded_headers() {
        let csv = format!(
            "\u{feff}{}\nSalad,Lunch,200,greens,150,5,10,8,vegan\n",
            HEADER.replace(",Calories,", ", Calories ,")
        );
        let meals = load_catalog_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].calories, 200.0);
    }

    #[test]
    fn test_missing_column_suggests_close_header() {
        let csv = HEADER.replace("Calories", "Calorie");
        let err = load_catalog_from_reader(csv.as_bytes()).unwrap_err();
        match err {
            PlannerError::CatalogMalformed(msg) => {
                assert!(msg.contains("'Calories'"), "{}", msg);
                assert!(msg.contains("did you mean 'Calorie'"), "{}", msg);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_calories_is_malformed() {
        let csv = format!("{}\nSoup,Dinner,lots,water,300,2,5,1,\n", HEADER);
        let err = load_catalog_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, PlannerError::CatalogMalformed(_)));
    }

    #[test]
    fn test_invalid_rows_are_skipped() {
        let csv = format!(
            "{}\nBad,Lunch,-10,x,100,1,1,1,\nGood,Lunch,10,x,100,1,1,1,\n",
            HEADER
        );
        let meals = load_catalog_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].name, "Good");
    }
}
