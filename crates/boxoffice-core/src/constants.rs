/// Service version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// --- Feature schema ---
//
// Column names and order must match the feature set the revenue model was
// fit on. The genre column is `genres`; request field `genre` maps onto it.

pub const YEAR_COLUMN: &str = "year";
pub const RATING_COLUMN: &str = "rating";
pub const GENRE_COLUMN: &str = "genres";
pub const RUN_TIME_COLUMN: &str = "run_time_minutes";
pub const BUDGET_COLUMN: &str = "budget";

/// Trained feature columns, in training order.
pub const FEATURE_COLUMNS: [&str; 5] = [
    YEAR_COLUMN,
    RATING_COLUMN,
    GENRE_COLUMN,
    RUN_TIME_COLUMN,
    BUDGET_COLUMN,
];

/// Categorical columns. Everything else in `FEATURE_COLUMNS` is numeric.
pub const CATEGORICAL_COLUMNS: [&str; 1] = [GENRE_COLUMN];

// --- Request fields ---

pub const YEAR_FIELD: &str = "year";
pub const RATING_FIELD: &str = "rating";
pub const GENRE_FIELD: &str = "genre";
pub const RUN_TIME_FIELD: &str = "run_time";
pub const BUDGET_FIELD: &str = "budget";

/// Request field → trained column, in column order.
pub const FIELD_TO_COLUMN: [(&str, &str); 5] = [
    (YEAR_FIELD, YEAR_COLUMN),
    (RATING_FIELD, RATING_COLUMN),
    (GENRE_FIELD, GENRE_COLUMN),
    (RUN_TIME_FIELD, RUN_TIME_COLUMN),
    (BUDGET_FIELD, BUDGET_COLUMN),
];

/// Budget assumed when the request omits it.
pub const DEFAULT_BUDGET: f64 = 0.0;

/// Whether `column` is categorical.
pub fn is_categorical(column: &str) -> bool {
    CATEGORICAL_COLUMNS.contains(&column)
}
