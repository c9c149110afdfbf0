//! Reusable UI components shared by the modal overlays.
//!
//! - `DialogFrame` - Centered dialog overlay with rounded borders and a close button

mod dialog_frame;

pub use dialog_frame::{render_dialog_frame, DialogFrameConfig};
