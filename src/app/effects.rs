use std::path::Path;

use tracing::warn;

use crate::app::Model;
use crate::storage;

/// Carry out the I/O requested by the last update.
pub(super) fn handle_side_effects(model: &mut Model) {
    if model.save_requested {
        model.save_requested = false;
        save(model);
    }
}

fn save(model: &mut Model) {
    let Some(path) = model.document.filename().map(Path::to_path_buf) else {
        return;
    };
    let bytes = model.document.to_bytes();
    match storage::save_atomic(&path, &bytes) {
        Ok(written) => {
            model.document.mark_clean();
            model.set_status(format!("{written} bytes written to disk"));
        }
        Err(err) => {
            warn!(path = %path.display(), %err, "save failed");
            model.set_status(format!("Can't save! I/O error: {err}"));
        }
    }
}
