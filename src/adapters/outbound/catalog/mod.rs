/// Catalog fixture decoding and the embedded default catalog
mod builtin_catalog_reader;
mod catalog_document;

pub use builtin_catalog_reader::BuiltinCatalogReader;
pub use catalog_document::parse_catalog;
