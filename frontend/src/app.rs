//! ShadowForgeApp - editor domains wired together.

use crate::clipboard::CopyCode;
use crate::config::load_editor_config;
use crate::dataflow::Atom;
use crate::shadow_layers::ShadowLayers;
use crate::subjects::SubjectProperties;
use shared::{EditorConfig, PropertyStore};
use zoon::*;

#[derive(Clone)]
pub struct ShadowForgeApp {
    pub config: EditorConfig,

    /// Preview box: size and background
    pub box_properties: SubjectProperties,
    /// Area around the box
    pub canvas_properties: SubjectProperties,

    pub shadow_layers: ShadowLayers,
    pub copy_code: CopyCode,

    // === UI STATE ===
    pub shadow_list_expanded: Atom<bool>,
}

impl ShadowForgeApp {
    pub fn new() -> Self {
        let config = load_editor_config();

        let box_properties = SubjectProperties::new(PropertyStore::box_subject());
        let canvas_properties = SubjectProperties::new(PropertyStore::canvas_subject());
        let shadow_layers = ShadowLayers::new();
        let copy_code = CopyCode::new(
            shadow_layers.code_text_signal(),
            config.clipboard.confirmation_ms,
        );

        Self {
            config,
            box_properties,
            canvas_properties,
            shadow_layers,
            copy_code,
            shadow_list_expanded: Atom::new(true),
        }
    }

    pub fn root(&self) -> impl Element {
        crate::views::root(self.clone())
    }
}
