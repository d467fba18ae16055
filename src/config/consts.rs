// src/config/consts.rs

// Net config
pub const HOST: &str = "guidedquill.com";
pub const PREFIX: &str = "/assets/data/";
pub const DATA_FILE: &str = "DBGuidedQuill-Books.csv";

// Local cache
pub const STORE_DIR: &str = ".store";
pub const CATALOG_CACHE: &str = "catalog.csv";
pub const LOG_FILE: &str = "quillshelf.log";

// Header fields the card renderer consumes. Any other header names
// pass through as additional record keys without special handling.
pub const FIELD_TITLE: &str = "TITLE";
pub const FIELD_DESCRIPTION: &str = "DESCRIPTION";
pub const FIELD_CATEGORY: &str = "CATEGORY";
pub const FIELD_COVER: &str = "COVER_LINK";
pub const FIELD_AMAZON: &str = "AMAZON_LINK";

// Grouping + card fallbacks
pub const DEFAULT_CATEGORY: &str = "Uncategorized";
pub const UNTITLED: &str = "Untitled Book";
pub const NO_DESCRIPTION: &str = "No description available";
pub const PLACEHOLDER_IMAGE: &str = "assets/images/placeholder-book.jpg";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "catalog";
