//! Platform-independent core of the box-shadow editor: property stores for
//! the preview subjects, the shadow layer list and its CSS/code projections.

pub mod clipboard;
pub mod config;
pub mod error;
pub mod property;
pub mod render;
pub mod shadow;

pub use clipboard::CopyStatus;
pub use config::{AppSection, ClipboardSection, ControlsSection, EditorConfig};
pub use error::ShadowError;
pub use property::{
    DisplayKind, DisplaySink, DisplaySlots, InlineStyle, PropertyStore, PropertyValue,
    StyleTarget, Subject,
};
pub use render::{CodeLine, box_shadow_style, code_lines, code_text};
pub use shadow::{EditValue, Field, InsetValue, LayerId, ShadowLayer, ShadowList, ShadowProperty};
