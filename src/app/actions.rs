//! External actions
//!
//! Opening links and images and copying contact values. Commands come from
//! the config and are spawned in the background so GUI apps and browsers
//! never block the TUI.

use crate::App;
use folio::select_layout;
use std::io::Write;
use std::process::{Command, Stdio};

impl App {
    /// Open the selected contact link with `open_command`
    pub(crate) fn open_selected_contact(&mut self) {
        let Some(link) = self.model.selected_contact() else {
            return;
        };
        self.spawn_open(&link.href);
    }

    /// Open the primary image of the project under the probe line
    pub(crate) fn open_project_image(&mut self) {
        let Some(index) = self.project_at_probe() else {
            self.model
                .show_toast("Error: scroll to a project first".to_string());
            return;
        };
        let Some(project) = self.model.portfolio.projects.get(index) else {
            return;
        };

        let target = match select_layout(&project.images, index) {
            Ok(plan) => plan
                .primary_image
                .or_else(|| plan.secondary_images.first())
                .cloned(),
            Err(e) => {
                tracing::warn!(project = project.id, error = %e, "project has no layout");
                None
            }
        };

        if let Some(path) = target {
            self.spawn_open(&path.display().to_string());
        }
    }

    /// Send the selected contact value to `clipboard_command` via stdin
    pub(crate) fn copy_selected_contact(&mut self) {
        let Some(link) = self.model.selected_contact() else {
            return;
        };

        let Some(ref clipboard_cmd) = self.clipboard_command else {
            tracing::debug!("no clipboard_command configured");
            self.model
                .show_toast("Error: clipboard_command not configured".to_string());
            return;
        };

        // Email copies the bare address; everything else copies the URL
        let text = match link.kind {
            folio::logic::contact::ContactKind::Email => link.value.clone(),
            _ => link.href.clone(),
        };

        let result = Command::new(clipboard_cmd)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .and_then(|mut child| {
                if let Some(mut stdin) = child.stdin.take() {
                    stdin.write_all(text.as_bytes())?;
                    // Close stdin to signal EOF
                    drop(stdin);
                }
                Ok(())
            });

        match result {
            Ok(()) => {
                tracing::debug!(command = %clipboard_cmd, %text, "copied to clipboard");
                self.model.show_toast(format!("Copied to clipboard: {}", text));
            }
            Err(e) => {
                tracing::warn!(command = %clipboard_cmd, error = %e, "clipboard command failed");
                let toast_msg = format!("Error: Failed to copy with '{}'", clipboard_cmd);
                self.model.show_toast(toast_msg);
            }
        }
    }

    fn spawn_open(&mut self, target: &str) {
        let Some(ref open_cmd) = self.open_command else {
            self.model
                .show_toast("Error: open_command not configured".to_string());
            return;
        };

        let result = Command::new(open_cmd)
            .arg(target)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match result {
            Ok(_child) => {
                tracing::debug!(command = %open_cmd, target, "open_command spawned");
                self.model.show_toast(format!("Opened: {}", target));
            }
            Err(e) => {
                tracing::warn!(command = %open_cmd, error = %e, "failed to execute open_command");
                let toast_msg = format!("Error: Failed to open with '{}'", open_cmd);
                self.model.show_toast(toast_msg);
            }
        }
    }
}
