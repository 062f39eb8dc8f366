use crate::commands::{load_movies, CmdMessage, CmdResult};
use crate::error::{MovieError, Result};
use crate::store::RecordStore;
use crate::website::{render, DEFAULT_TEMPLATE};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Render the collection into `output`, using `template` or the built-in one.
/// The store is only read.
pub fn run<S: RecordStore + ?Sized>(
    store: &S,
    template: Option<&Path>,
    output: &Path,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let movies = load_movies(store, &mut result)?;

    let template_text = match template {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            MovieError::Api(format!(
                "Could not read template {}: {}",
                path.display(),
                e
            ))
        })?,
        None => DEFAULT_TEMPLATE.to_string(),
    };

    let html = render(&movies, &template_text);

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(MovieError::Io)?;
        }
    }
    fs::write(output, html).map_err(MovieError::Io)?;
    debug!(output = %output.display(), movies = movies.len(), "website generated");

    result.add_message(CmdMessage::success(format!(
        "Website was generated successfully: {}",
        output.display()
    )));
    result.output_path = Some(output.to_path_buf());
    Ok(result.with_listed_movies(movies))
}
