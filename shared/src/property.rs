use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ===== PROPERTY VALUES =====

/// One styleable attribute: a raw value plus an optional unit suffix.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PropertyValue {
    pub value: String,
    pub unit: Option<String>,
}

impl PropertyValue {
    pub fn new(value: impl Into<String>, unit: Option<&str>) -> Self {
        Self {
            value: value.into(),
            unit: unit.map(str::to_string),
        }
    }

    pub fn unitless(value: impl Into<String>) -> Self {
        Self::new(value, None)
    }

    /// `"{value}{unit}"`, the unit omitted when absent.
    pub fn css(&self) -> String {
        format!("{}{}", self.value, self.unit.as_deref().unwrap_or(""))
    }
}

// ===== PROJECTION TARGETS =====

/// Anything inline style properties can be written into.
pub trait StyleTarget {
    fn set_style(&mut self, property: &str, value: &str);
}

/// Which half of a property a display slot shows.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayKind {
    Value,
    Unit,
}

/// Text surface showing literal property values next to the controls.
pub trait DisplaySink {
    fn set_text(&mut self, kind: DisplayKind, name: &str, text: &str);
}

/// Ordered inline style declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    declarations: IndexMap<String, String>,
}

impl InlineStyle {
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations.get(property).map(String::as_str)
    }
}

impl StyleTarget for InlineStyle {
    fn set_style(&mut self, property: &str, value: &str) {
        self.declarations
            .insert(property.to_string(), value.to_string());
    }
}

/// In-memory display slots keyed by `(kind, property name)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplaySlots {
    slots: IndexMap<(DisplayKind, String), String>,
}

impl DisplaySlots {
    pub fn text(&self, kind: DisplayKind, name: &str) -> Option<&str> {
        self.slots
            .get(&(kind, name.to_string()))
            .map(String::as_str)
    }
}

impl DisplaySink for DisplaySlots {
    fn set_text(&mut self, kind: DisplayKind, name: &str, text: &str) {
        self.slots.insert((kind, name.to_string()), text.to_string());
    }
}

// ===== PROPERTY STORE =====

/// Which singleton subject a store describes.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    Box,
    Canvas,
}

impl Subject {
    pub fn name(self) -> &'static str {
        match self {
            Subject::Box => "box",
            Subject::Canvas => "canvas",
        }
    }
}

/// Fixed set of style properties for one visual subject.
///
/// Keys are decided at construction; mutations only ever touch values and
/// units of existing keys. Names the store does not know are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PropertyStore {
    subject: Subject,
    properties: IndexMap<String, PropertyValue>,
}

impl PropertyStore {
    pub fn new(
        subject: Subject,
        properties: impl IntoIterator<Item = (&'static str, PropertyValue)>,
    ) -> Self {
        Self {
            subject,
            properties: properties
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        }
    }

    /// The sample element the shadows are previewed on.
    pub fn box_subject() -> Self {
        Self::new(
            Subject::Box,
            [
                ("height", PropertyValue::new("200", Some("px"))),
                ("width", PropertyValue::new("200", Some("px"))),
                ("background-color", PropertyValue::unitless("#000000")),
            ],
        )
    }

    /// The background area around the sample element.
    pub fn canvas_subject() -> Self {
        Self::new(
            Subject::Canvas,
            [
                ("height", PropertyValue::unitless("auto")),
                ("width", PropertyValue::unitless("auto")),
                ("background-color", PropertyValue::unitless("#FFFFFF")),
            ],
        )
    }

    pub fn subject(&self) -> Subject {
        self.subject
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    pub fn change_value(&mut self, name: &str, new_value: impl Into<String>) {
        if let Some(property) = self.properties.get_mut(name) {
            property.value = new_value.into();
        }
    }

    pub fn change_unit(&mut self, name: &str, new_unit: Option<String>) {
        if let Some(property) = self.properties.get_mut(name) {
            property.unit = new_unit;
        }
    }

    pub fn project_to_style_target(&self, target: &mut impl StyleTarget) {
        for (name, property) in &self.properties {
            target.set_style(name, &property.css());
        }
    }

    /// Shows `new_value` in the `(kind, name)` slot, `0` when it is empty.
    pub fn project_to_display_text(
        &self,
        name: &str,
        new_value: &str,
        kind: DisplayKind,
        sink: &mut impl DisplaySink,
    ) {
        let text = if new_value.is_empty() { "0" } else { new_value };
        sink.set_text(kind, name, text);
    }

    pub fn inline_style(&self) -> InlineStyle {
        let mut style = InlineStyle::default();
        self.project_to_style_target(&mut style);
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordedStyle(Vec<(String, String)>);

    impl StyleTarget for RecordedStyle {
        fn set_style(&mut self, property: &str, value: &str) {
            self.0.push((property.to_string(), value.to_string()));
        }
    }

    #[test]
    fn box_subject_projects_every_key_in_order() {
        let store = PropertyStore::box_subject();
        let mut style = RecordedStyle::default();

        store.project_to_style_target(&mut style);

        assert_eq!(
            style.0,
            [
                ("height".to_string(), "200px".to_string()),
                ("width".to_string(), "200px".to_string()),
                ("background-color".to_string(), "#000000".to_string()),
            ]
        );
    }

    #[test]
    fn inline_style_keeps_the_latest_projection() {
        let mut store = PropertyStore::box_subject();
        store.change_value("height", "");
        store.change_unit("height", Some("em".to_string()));

        let style = store.inline_style();

        assert_eq!(style.get("height"), Some("em"));
        assert_eq!(style.get("border-radius"), None);
    }

    #[test]
    fn subject_names_are_lowercase_labels() {
        assert_eq!(PropertyStore::box_subject().subject().name(), "box");
        assert_eq!(PropertyStore::canvas_subject().subject().name(), "canvas");
    }

    #[test]
    fn canvas_subject_has_no_unit_suffixes() {
        let style = PropertyStore::canvas_subject().inline_style();

        assert_eq!(style.get("height"), Some("auto"));
        assert_eq!(style.get("width"), Some("auto"));
        assert_eq!(style.get("background-color"), Some("#FFFFFF"));
    }

    #[test]
    fn change_value_and_unit_touch_only_their_field() {
        let mut store = PropertyStore::box_subject();

        store.change_value("height", "320");
        store.change_unit("width", Some("rem".to_string()));

        assert_eq!(store.get("height"), Some(&PropertyValue::new("320", Some("px"))));
        assert_eq!(store.get("width"), Some(&PropertyValue::new("200", Some("rem"))));
        assert_eq!(store.inline_style().get("width"), Some("200rem"));
    }

    #[test]
    fn unknown_names_are_ignored() {
        let mut store = PropertyStore::box_subject();
        let before = store.clone();

        store.change_value("border-radius", "4");
        store.change_unit("opacity", Some("%".to_string()));

        assert_eq!(store, before);
        assert_eq!(store.names().count(), 3);
        assert!(store.get("border-radius").is_none());
    }

    #[test]
    fn display_text_falls_back_to_zero() {
        let store = PropertyStore::box_subject();
        let mut slots = DisplaySlots::default();

        store.project_to_display_text("height", "", DisplayKind::Value, &mut slots);
        store.project_to_display_text("width", "em", DisplayKind::Unit, &mut slots);

        assert_eq!(slots.text(DisplayKind::Value, "height"), Some("0"));
        assert_eq!(slots.text(DisplayKind::Unit, "width"), Some("em"));
        assert_eq!(slots.text(DisplayKind::Value, "width"), None);
        // Display projection never writes back into the store.
        assert_eq!(store, PropertyStore::box_subject());
    }
}
