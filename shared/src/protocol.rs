/// Multipart field carrying the uploaded file.
pub const FILE_FIELD: &str = "file";

/// URL-encoded form field carrying the question text.
pub const QUESTION_FIELD: &str = "question";

/// Content type of the question request body.
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Shown when the upload endpoint answered without `message` or `error`.
pub const UPLOAD_FAILED: &str = "File upload failed.";

/// Shown when the upload request itself failed.
pub const UPLOAD_REQUEST_FAILED: &str = "Error uploading file.";

/// Bot entry text when the question endpoint answered without `answer` or `error`.
pub const NO_ANSWER: &str = "No answer.";

/// Shown when the question request itself failed.
pub const ASK_REQUEST_FAILED: &str = "Error asking question.";
