use std::path::PathBuf;

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

/// Blocking user dialogs the session depends on. The native implementation
/// suspends the event loop while a dialog is open; tests substitute a
/// scripted fake so session logic runs without a GUI.
pub trait DialogService {
    /// Save-file prompt. `None` means the user cancelled.
    fn prompt_save_path(&mut self) -> Option<PathBuf>;

    /// Yes/no question; `true` on yes.
    fn confirm(&mut self, title: &str, message: &str) -> bool;

    fn show_info(&mut self, title: &str, message: &str);

    fn show_error(&mut self, title: &str, message: &str);
}

/// Native dialogs backed by rfd.
#[derive(Debug, Default)]
pub struct NativeDialogs;

impl DialogService for NativeDialogs {
    fn prompt_save_path(&mut self) -> Option<PathBuf> {
        FileDialog::new()
            .add_filter("PNG files", &["png"])
            .add_filter("All files", &["*"])
            .set_file_name("drawing.png")
            .save_file()
    }

    fn confirm(&mut self, title: &str, message: &str) -> bool {
        let answer = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::YesNo)
            .show();
        matches!(answer, MessageDialogResult::Yes)
    }

    fn show_info(&mut self, title: &str, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }

    fn show_error(&mut self, title: &str, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
