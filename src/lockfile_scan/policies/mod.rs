mod metadata_selection;

pub use metadata_selection::MetadataSelection;
