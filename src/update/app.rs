//! App message handlers (file operations, terminal events)

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::AppModel;

/// Handle app messages (file operations, terminal events)
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Resize { cols, rows } => {
            model.resize(cols, rows);
            Some(Cmd::Redraw)
        }

        AppMsg::SaveFile => {
            if model.readonly {
                return None;
            }
            match model.document.file_path.clone() {
                Some(path) => Some(Cmd::SaveFile {
                    path,
                    content: model.document.to_bytes(),
                }),
                None => Some(Cmd::PromptSaveAs),
            }
        }

        AppMsg::SaveAs(path) => {
            if model.readonly {
                return None;
            }
            Some(Cmd::SaveFile {
                path,
                content: model.document.to_bytes(),
            })
        }

        AppMsg::SaveCancelled => {
            model.set_status("Save cancelled");
            Some(Cmd::Redraw)
        }

        AppMsg::SaveCompleted { path, result } => {
            match result {
                Ok(bytes) => {
                    tracing::info!("Saved {} ({} bytes)", path.display(), bytes);
                    model.document.file_path = Some(path);
                    model.document.is_modified = false;
                    model.quit_confirm = false;
                    model.set_status(format!("{} bytes written to disk", bytes));
                }
                Err(e) => {
                    tracing::warn!("Save to {} failed: {}", path.display(), e);
                    model.set_status(e);
                }
            }
            Some(Cmd::Redraw)
        }

        AppMsg::OpenFile => Some(Cmd::PromptOpenFile),

        AppMsg::OpenPath(path) => Some(Cmd::LoadFile { path }),

        AppMsg::OpenCancelled => {
            model.set_status("Open cancelled");
            Some(Cmd::Redraw)
        }

        AppMsg::FileLoaded { path, result } => {
            match result {
                Ok(mut document) => {
                    tracing::info!(
                        "Opened {} ({} lines)",
                        path.display(),
                        document.line_count()
                    );
                    document.file_path = Some(path);
                    document.is_modified = false;
                    model.open_document(document);
                }
                Err(e) => {
                    tracing::warn!("Failed to open {}: {}", path.display(), e);
                    model.set_status(format!("Failed to open file {}", path.display()));
                }
            }
            Some(Cmd::Redraw)
        }

        AppMsg::Find => Some(Cmd::Find),

        AppMsg::Quit => {
            if model.document.is_modified && !model.quit_confirm {
                model.quit_confirm = true;
                let message = model.unsaved_changes_message();
                model.set_status(message);
                Some(Cmd::Redraw)
            } else {
                Some(Cmd::Quit)
            }
        }

        AppMsg::Help => {
            tracing::debug!("help requested; no help screen");
            None
        }
    }
}
