use crate::error::ShadowError;
use crate::property::PropertyValue;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type LayerId = u32;

// ===== LAYER SCHEMA =====

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShadowProperty {
    X,
    Y,
    Blur,
    Spread,
    Color,
    Inset,
}

impl ShadowProperty {
    /// Properties edited with a range, a number field and a unit select.
    pub const LENGTHS: [ShadowProperty; 4] = [
        ShadowProperty::X,
        ShadowProperty::Y,
        ShadowProperty::Blur,
        ShadowProperty::Spread,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShadowProperty::X => "x",
            ShadowProperty::Y => "y",
            ShadowProperty::Blur => "blur",
            ShadowProperty::Spread => "spread",
            ShadowProperty::Color => "color",
            ShadowProperty::Inset => "inset",
        }
    }
}

impl fmt::Display for ShadowProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Value,
    Unit,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Value => f.write_str("value"),
            Field::Unit => f.write_str("unit"),
        }
    }
}

/// New content for a layer field.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum EditValue {
    Text(String),
    Flag(bool),
    /// Clears a unit.
    Empty,
}

impl From<&str> for EditValue {
    fn from(text: &str) -> Self {
        EditValue::Text(text.to_string())
    }
}

impl From<String> for EditValue {
    fn from(text: String) -> Self {
        EditValue::Text(text)
    }
}

impl From<bool> for EditValue {
    fn from(flag: bool) -> Self {
        EditValue::Flag(flag)
    }
}

/// The boolean `inset` keyword, kept in the same value/unit shape as the
/// other layer fields.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct InsetValue {
    pub value: bool,
    pub unit: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ShadowLayer {
    id: LayerId,
    pub x: PropertyValue,
    pub y: PropertyValue,
    pub blur: PropertyValue,
    pub spread: PropertyValue,
    pub color: PropertyValue,
    pub inset: InsetValue,
}

impl ShadowLayer {
    fn with_defaults(id: LayerId) -> Self {
        Self {
            id,
            x: PropertyValue::new("2", Some("px")),
            y: PropertyValue::new("2", Some("px")),
            blur: PropertyValue::new("2", Some("px")),
            spread: PropertyValue::new("0", Some("px")),
            color: PropertyValue::unitless("#000000"),
            inset: InsetValue::default(),
        }
    }

    pub fn id(&self) -> LayerId {
        self.id
    }

    /// Title shown above the layer's controls.
    pub fn title(&self) -> String {
        format!("shadow {}", self.id)
    }

    /// The text-valued fields; `None` for `inset`.
    pub fn property(&self, property: ShadowProperty) -> Option<&PropertyValue> {
        match property {
            ShadowProperty::X => Some(&self.x),
            ShadowProperty::Y => Some(&self.y),
            ShadowProperty::Blur => Some(&self.blur),
            ShadowProperty::Spread => Some(&self.spread),
            ShadowProperty::Color => Some(&self.color),
            ShadowProperty::Inset => None,
        }
    }

    fn property_mut(&mut self, property: ShadowProperty) -> Option<&mut PropertyValue> {
        match property {
            ShadowProperty::X => Some(&mut self.x),
            ShadowProperty::Y => Some(&mut self.y),
            ShadowProperty::Blur => Some(&mut self.blur),
            ShadowProperty::Spread => Some(&mut self.spread),
            ShadowProperty::Color => Some(&mut self.color),
            ShadowProperty::Inset => None,
        }
    }

    fn apply(
        &mut self,
        property: ShadowProperty,
        field: Field,
        new_value: EditValue,
    ) -> Result<(), ShadowError> {
        let mismatch = ShadowError::ValueKindMismatch { property, field };
        match (field, new_value) {
            (Field::Unit, EditValue::Flag(_)) => Err(mismatch),
            (Field::Unit, unit) => {
                let unit = match unit {
                    EditValue::Text(text) => Some(text),
                    _ => None,
                };
                match self.property_mut(property) {
                    Some(target) => target.unit = unit,
                    None => self.inset.unit = unit,
                }
                Ok(())
            }
            (Field::Value, EditValue::Flag(flag)) if property == ShadowProperty::Inset => {
                self.inset.value = flag;
                Ok(())
            }
            (Field::Value, EditValue::Text(text)) => match self.property_mut(property) {
                Some(target) => {
                    target.value = text;
                    Ok(())
                }
                None => Err(mismatch),
            },
            (Field::Value, _) => Err(mismatch),
        }
    }
}

// ===== SHADOW LIST =====

/// Ordered shadow layers plus the id counter.
///
/// Ids start at 1 and are never handed out twice, even after the layer
/// holding one is deleted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ShadowList {
    layers: Vec<ShadowLayer>,
    next_id: LayerId,
}

impl Default for ShadowList {
    fn default() -> Self {
        Self {
            layers: Vec::new(),
            next_id: 1,
        }
    }
}

impl ShadowList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_layer(&mut self) -> ShadowLayer {
        let layer = ShadowLayer::with_defaults(self.next_id);
        self.next_id += 1;
        self.layers.push(layer.clone());
        layer
    }

    pub fn edit_property(
        &mut self,
        id: LayerId,
        property: ShadowProperty,
        field: Field,
        new_value: impl Into<EditValue>,
    ) -> Result<(), ShadowError> {
        let layer = self
            .layers
            .iter_mut()
            .find(|layer| layer.id == id)
            .ok_or(ShadowError::LayerNotFound(id))?;
        layer.apply(property, field, new_value.into())
    }

    /// Removes the layer with `id`; returns whether one existed.
    pub fn delete_layer(&mut self, id: LayerId) -> bool {
        let before = self.layers.len();
        self.layers.retain(|layer| layer.id != id);
        self.layers.len() != before
    }

    pub fn layers(&self) -> &[ShadowLayer] {
        &self.layers
    }

    pub fn get(&self, id: LayerId) -> Option<&ShadowLayer> {
        self.layers.iter().find(|layer| layer.id == id)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_increase_and_are_never_reused() {
        let mut list = ShadowList::new();
        let first = list.add_layer();
        let second = list.add_layer();
        assert_eq!((first.id(), second.id()), (1, 2));

        assert!(list.delete_layer(second.id()));
        assert!(list.delete_layer(first.id()));
        let third = list.add_layer();

        assert_eq!(third.id(), 3);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn new_layer_has_defaults() {
        let mut list = ShadowList::new();
        let layer = list.add_layer();

        assert_eq!(layer.x.css(), "2px");
        assert_eq!(layer.y.css(), "2px");
        assert_eq!(layer.blur.css(), "2px");
        assert_eq!(layer.spread.css(), "0px");
        assert_eq!(layer.color.css(), "#000000");
        assert!(!layer.inset.value);
        assert_eq!(layer.title(), "shadow 1");
        assert_eq!(list.layers(), &[layer]);
    }

    #[test]
    fn edit_value_changes_only_the_target_field() {
        let mut list = ShadowList::new();
        list.add_layer();
        let target = list.add_layer();
        list.add_layer();

        for property in ShadowProperty::LENGTHS {
            let mut expected = list.clone();
            list.edit_property(target.id(), property, Field::Value, "17")
                .unwrap();

            let edited = list.get(target.id()).unwrap();
            assert_eq!(edited.property(property).unwrap().value, "17");
            assert_eq!(list.layers().iter().filter(|l| l.id() == target.id()).count(), 1);

            // Every other field and layer is untouched.
            let layer = expected
                .layers
                .iter_mut()
                .find(|layer| layer.id() == target.id())
                .unwrap();
            layer.property_mut(property).unwrap().value = "17".to_string();
            assert_eq!(list, expected);
        }
    }

    #[test]
    fn edit_unit_color_and_inset() {
        let mut list = ShadowList::new();
        let id = list.add_layer().id();

        list.edit_property(id, ShadowProperty::Blur, Field::Unit, "rem").unwrap();
        list.edit_property(id, ShadowProperty::Color, Field::Value, "#ff0088").unwrap();
        list.edit_property(id, ShadowProperty::Inset, Field::Value, true).unwrap();
        list.edit_property(id, ShadowProperty::Spread, Field::Unit, EditValue::Empty)
            .unwrap();

        let layer = list.get(id).unwrap();
        assert_eq!(layer.blur.css(), "2rem");
        assert_eq!(layer.color.css(), "#ff0088");
        assert_eq!(layer.spread.css(), "0");
        assert!(layer.inset.value);
    }

    #[test]
    fn editing_a_missing_layer_is_an_error() {
        let mut list = ShadowList::new();
        let id = list.add_layer().id();
        list.delete_layer(id);

        let result = list.edit_property(id, ShadowProperty::X, Field::Value, "5");

        assert_eq!(result, Err(ShadowError::LayerNotFound(id)));
        assert!(list.is_empty());
    }

    #[test]
    fn mismatched_value_kinds_are_rejected() {
        let mut list = ShadowList::new();
        let id = list.add_layer().id();
        let before = list.clone();

        assert_eq!(
            list.edit_property(id, ShadowProperty::Inset, Field::Value, "inset"),
            Err(ShadowError::ValueKindMismatch {
                property: ShadowProperty::Inset,
                field: Field::Value,
            })
        );
        assert!(list.edit_property(id, ShadowProperty::X, Field::Value, true).is_err());
        assert!(list.edit_property(id, ShadowProperty::X, Field::Unit, false).is_err());
        assert_eq!(list, before);
    }

    #[test]
    fn delete_missing_layer_is_a_no_op() {
        let mut list = ShadowList::new();
        list.add_layer();
        list.add_layer();
        let before = list.clone();

        assert!(!list.delete_layer(42));
        assert_eq!(list, before);
    }

    #[test]
    fn delete_preserves_order_of_remaining_layers() {
        let mut list = ShadowList::new();
        for _ in 0..4 {
            list.add_layer();
        }

        assert!(list.delete_layer(2));

        let ids: Vec<_> = list.layers().iter().map(ShadowLayer::id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn layers_serialize_with_their_id() {
        let mut list = ShadowList::new();
        let layer = list.add_layer();

        let json = serde_json::to_value(&layer).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["x"]["value"], "2");
        assert_eq!(json["x"]["unit"], "px");
        assert_eq!(json["color"]["unit"], serde_json::Value::Null);
        assert_eq!(json["inset"]["value"], false);
    }
}
