//! Constants shared by the content-search request and response models.

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_ROWS: u64 = 50;
pub const MAX_ROWS: u64 = 1000;

pub const EMPHASIS_START_TAG: &str = "<em>";
pub const EMPHASIS_END_TAG: &str = "</em>";

pub const SEARCH_2_CONTEXT: &str = "http://iiif.io/api/search/2/context.json";
pub const SEARCH_1_CONTEXT: &str = "http://iiif.io/api/search/1/context.json";
pub const PRESENTATION_2_CONTEXT: &str = "http://iiif.io/api/presentation/2/context.json";
