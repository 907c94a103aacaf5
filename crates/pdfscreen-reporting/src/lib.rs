pub mod export;

pub use export::{
    ExportFormat, NO_TEXT_LAYER_MESSAGE, export_json, export_markdown, export_to_file, render,
};
