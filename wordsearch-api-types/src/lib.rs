pub mod search;

/// Path of the search endpoint on the backend.
pub const API_PATH: &str = "/api";
/// Query parameter carrying the user's search phrase.
pub const SEARCH_PARAM: &str = "search";
