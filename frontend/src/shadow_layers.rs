//! Shadow layer list domain.

use crate::dataflow::{Actor, ActorVec, Relay, relay};
use futures::{StreamExt, select_biased};
use shared::{
    CodeLine, EditValue, Field, LayerId, PropertyValue, ShadowError, ShadowList, ShadowProperty,
    box_shadow_style, code_lines, code_text,
};
use zoon::*;

/// One control writing into one field of one layer.
#[derive(Clone, Debug, PartialEq)]
pub struct ShadowEdit {
    pub id: LayerId,
    pub property: ShadowProperty,
    pub field: Field,
    pub value: EditValue,
}

#[derive(Clone)]
pub struct ShadowLayers {
    pub list: Actor<ShadowList>,
    /// Ids in list order; drives the per-layer panels.
    pub layer_ids: ActorVec<LayerId>,
    /// Failure of the most recent edit, cleared by the next successful one.
    pub last_edit_error: Actor<Option<ShadowError>>,

    pub add_shadow_button_pressed_relay: Relay,
    pub shadow_property_changed_relay: Relay<ShadowEdit>,
    pub delete_shadow_button_pressed_relay: Relay<LayerId>,
}

impl ShadowLayers {
    pub fn new() -> Self {
        let (add_shadow_button_pressed_relay, mut add_shadow_button_pressed_stream) = relay();
        let (shadow_property_changed_relay, mut shadow_property_changed_stream) =
            relay::<ShadowEdit>();
        let (delete_shadow_button_pressed_relay, mut delete_shadow_button_pressed_stream) =
            relay::<LayerId>();

        let (layer_added_relay, mut layer_added_stream) = relay::<LayerId>();
        let (layer_removed_relay, mut layer_removed_stream) = relay::<LayerId>();
        let (edit_finished_relay, mut edit_finished_stream) = relay::<Option<ShadowError>>();

        let list = Actor::new(ShadowList::new(), async move |state| {
            loop {
                // An add queued in the same tick as edits of the new layer goes first.
                select_biased! {
                    pressed = add_shadow_button_pressed_stream.next() => {
                        if let Some(()) = pressed {
                            let layer = state.lock_mut().add_layer();
                            zoon::println!("🌓 SHADOWS: Added {}", layer.title());
                            layer_added_relay.send(layer.id());
                        }
                    }
                    edit = shadow_property_changed_stream.next() => {
                        if let Some(ShadowEdit { id, property, field, value }) = edit {
                            let result = state.lock_mut().edit_property(id, property, field, value);
                            if let Err(error) = &result {
                                zoon::eprintln!("🌓 SHADOWS: Edit of {property} {field} failed: {error}");
                            }
                            edit_finished_relay.send(result.err());
                        }
                    }
                    pressed = delete_shadow_button_pressed_stream.next() => {
                        if let Some(id) = pressed {
                            if state.lock_mut().delete_layer(id) {
                                zoon::println!("🌓 SHADOWS: Deleted shadow {id}");
                                layer_removed_relay.send(id);
                            }
                        }
                    }
                }
            }
        });

        let layer_ids = ActorVec::new(Vec::new(), async move |ids| {
            loop {
                select_biased! {
                    added = layer_added_stream.next() => {
                        if let Some(id) = added {
                            ids.push_cloned(id);
                        }
                    }
                    removed = layer_removed_stream.next() => {
                        if let Some(id) = removed {
                            ids.retain(|kept| *kept != id);
                        }
                    }
                }
            }
        });

        let last_edit_error = Actor::new(None, async move |state| {
            while let Some(error) = edit_finished_stream.next().await {
                state.set_neq(error);
            }
        });

        Self {
            list,
            layer_ids,
            last_edit_error,
            add_shadow_button_pressed_relay,
            shadow_property_changed_relay,
            delete_shadow_button_pressed_relay,
        }
    }

    /// `box-shadow` value for the preview box.
    pub fn style_signal(&self) -> impl Signal<Item = String> + Unpin + use<> {
        self.list.signal_ref(|list| box_shadow_style(list.layers()))
    }

    pub fn code_lines_signal(&self) -> impl Signal<Item = Vec<CodeLine>> + Unpin + use<> {
        self.list.signal_ref(|list| code_lines(list.layers()))
    }

    pub fn code_text_signal(&self) -> impl Signal<Item = String> + Unpin + use<> {
        self.list.signal_ref(|list| code_text(list.layers()))
    }

    pub fn is_empty_signal(&self) -> impl Signal<Item = bool> + Unpin + use<> {
        self.list.signal_ref(ShadowList::is_empty)
    }

    pub fn title_signal(&self, id: LayerId) -> impl Signal<Item = Option<String>> + Unpin + use<> {
        self.list
            .signal_ref(move |list| list.get(id).map(|layer| layer.title()))
    }

    pub fn property_signal(
        &self,
        id: LayerId,
        property: ShadowProperty,
    ) -> impl Signal<Item = Option<PropertyValue>> + Unpin + use<> {
        self.list.signal_ref(move |list| {
            list.get(id)
                .and_then(|layer| layer.property(property))
                .cloned()
        })
    }

    pub fn inset_signal(&self, id: LayerId) -> impl Signal<Item = bool> + Unpin + use<> {
        self.list.signal_ref(move |list| {
            list.get(id)
                .map(|layer| layer.inset.value)
                .unwrap_or_default()
        })
    }

    pub fn edit(&self, id: LayerId, property: ShadowProperty, field: Field, value: EditValue) {
        self.shadow_property_changed_relay.send(ShadowEdit {
            id,
            property,
            field,
            value,
        });
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    async fn settle() {
        gloo_timers::future::TimeoutFuture::new(10).await;
    }

    #[wasm_bindgen_test]
    async fn add_edit_delete_flow_updates_projections() {
        let layers = ShadowLayers::new();

        layers.add_shadow_button_pressed_relay.send(());
        layers.add_shadow_button_pressed_relay.send(());
        settle().await;
        layers.edit(2, ShadowProperty::Inset, Field::Value, EditValue::Flag(true));
        settle().await;

        let style = layers.style_signal().to_stream().next().await;
        assert_eq!(
            style.as_deref(),
            Some("2px 2px 2px 0px #000000 ,2px 2px 2px 0px #000000 inset")
        );

        layers.delete_shadow_button_pressed_relay.send(1);
        settle().await;
        let ids = layers
            .layer_ids
            .signal_vec()
            .to_signal_cloned()
            .to_stream()
            .next()
            .await;
        assert_eq!(ids, Some(vec![2]));
    }

    #[wasm_bindgen_test]
    async fn edit_sent_with_add_in_same_tick_applies() {
        let layers = ShadowLayers::new();

        layers.edit(1, ShadowProperty::Blur, Field::Value, "9".into());
        layers.add_shadow_button_pressed_relay.send(());
        settle().await;

        let error = layers.last_edit_error.signal().to_stream().next().await;
        assert_eq!(error, Some(None));
        let blur = layers
            .property_signal(1, ShadowProperty::Blur)
            .to_stream()
            .next()
            .await;
        assert_eq!(blur.flatten().map(|blur| blur.css()).as_deref(), Some("9px"));
    }

    #[wasm_bindgen_test]
    async fn failed_edit_is_published_and_cleared() {
        let layers = ShadowLayers::new();

        layers.edit(7, ShadowProperty::X, Field::Value, "4".into());
        settle().await;
        let error = layers.last_edit_error.signal().to_stream().next().await;
        assert_eq!(error, Some(Some(ShadowError::LayerNotFound(7))));

        layers.add_shadow_button_pressed_relay.send(());
        settle().await;
        layers.edit(1, ShadowProperty::X, Field::Value, "4".into());
        settle().await;
        let error = layers.last_edit_error.signal().to_stream().next().await;
        assert_eq!(error, Some(None));
    }
}
