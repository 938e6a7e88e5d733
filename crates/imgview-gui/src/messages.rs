use std::path::PathBuf;

use imgview_core::image_data::ImageData;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Decode an image file.
    LoadFile { path: PathBuf },

    /// Decode whatever image the system clipboard holds.
    PasteClipboard,
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    /// A complete decoded image, handed over in one piece.
    ImageLoaded { image: Box<ImageData> },

    /// The file dialog returned a path; the UI opens it like any other.
    FilePicked { path: PathBuf },

    Error { message: String },

    Log { message: String },
}
