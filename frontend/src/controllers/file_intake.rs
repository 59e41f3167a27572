//! File selection, drag state and upload result handling.

use docqa_shared::protocol::UPLOAD_REQUEST_FAILED;
use docqa_shared::{ApiError, UploadOutcome, UploadResponse};

/// Tracks at most one file for upload plus the drop zone and preview state.
///
/// Generic over the file handle so it works with `web_sys::File` in the browser
/// and with plain values in tests.
#[derive(Debug)]
pub struct FileIntakeController<F> {
    selected: Option<F>,
    preview: Option<String>,
    drag_over: bool,
}

impl<F> Default for FileIntakeController<F> {
    fn default() -> Self {
        Self {
            selected: None,
            preview: None,
            drag_over: false,
        }
    }
}

impl<F: Clone> FileIntakeController<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the first of `files` and returns it for upload.
    /// An empty list clears the selection.
    pub fn select<I>(&mut self, files: I) -> Option<F>
    where
        I: IntoIterator<Item = F>,
    {
        self.selected = files.into_iter().next();
        self.submit()
    }

    /// Returns whether the highlight changed
    pub fn drag_over(&mut self) -> bool {
        !std::mem::replace(&mut self.drag_over, true)
    }

    /// Returns whether the highlight changed
    pub fn drag_leave(&mut self) -> bool {
        std::mem::replace(&mut self.drag_over, false)
    }

    pub fn drop<I>(&mut self, files: I) -> Option<F>
    where
        I: IntoIterator<Item = F>,
    {
        self.drag_over = false;
        self.select(files)
    }

    /// Clears the selection and hides the preview. No server contact.
    pub fn remove(&mut self) {
        self.selected = None;
        self.preview = None;
    }

    /// The file a submit would send right now
    pub fn submit(&self) -> Option<F> {
        self.selected.clone()
    }

    /// Applies an upload result. Returns the alert text when the user must be told.
    pub fn finish_upload(
        &mut self,
        file_name: String,
        result: Result<UploadResponse, ApiError>,
    ) -> Option<String> {
        match result {
            Ok(response) => match response.outcome() {
                UploadOutcome::Accepted => {
                    self.preview = Some(file_name);
                    None
                }
                UploadOutcome::Rejected(message) => Some(message),
            },
            Err(e) => {
                log::error!("Upload of {} failed: {}", file_name, e);
                Some(UPLOAD_REQUEST_FAILED.to_string())
            }
        }
    }

    pub fn pending(&self) -> Option<&F> {
        self.selected.as_ref()
    }

    /// Name shown in the preview, `None` while the preview is hidden
    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn is_drag_over(&self) -> bool {
        self.drag_over
    }
}
