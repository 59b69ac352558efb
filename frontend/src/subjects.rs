//! Box and canvas property domains.

use crate::dataflow::{Actor, Relay, relay};
use futures::{StreamExt, select_biased};
use shared::{DisplayKind, DisplaySink, DisplaySlots, PropertyStore, Subject};
use zoon::*;

#[derive(Clone, Debug, PartialEq)]
pub struct DisplayTextChanged {
    pub kind: DisplayKind,
    pub name: String,
    pub text: String,
}

/// Forwards display projections of a store to the slots Actor.
struct DisplayRelaySink<'a>(&'a Relay<DisplayTextChanged>);

impl DisplaySink for DisplayRelaySink<'_> {
    fn set_text(&mut self, kind: DisplayKind, name: &str, text: &str) {
        self.0.send(DisplayTextChanged {
            kind,
            name: name.to_string(),
            text: text.to_string(),
        });
    }
}

/// Style properties of one preview subject plus the code text mirroring them.
#[derive(Clone)]
pub struct SubjectProperties {
    pub subject: Subject,
    names: Vec<String>,
    pub store: Actor<PropertyStore>,
    pub display: Actor<DisplaySlots>,

    /// `(property name, new value)` from a slider, number field or color picker
    pub value_changed_relay: Relay<(String, String)>,
    /// `(property name, new unit)` from a unit select
    pub unit_changed_relay: Relay<(String, String)>,
}

impl SubjectProperties {
    pub fn new(initial: PropertyStore) -> Self {
        let subject = initial.subject();
        let names: Vec<String> = initial.names().map(str::to_string).collect();

        let (value_changed_relay, mut value_changed_stream) = relay::<(String, String)>();
        let (unit_changed_relay, mut unit_changed_stream) = relay::<(String, String)>();
        let (display_text_changed_relay, mut display_text_changed_stream) =
            relay::<DisplayTextChanged>();

        let mut initial_slots = DisplaySlots::default();
        for name in &names {
            if let Some(property) = initial.get(name) {
                initial_slots.set_text(DisplayKind::Value, name, &property.value);
                if let Some(unit) = &property.unit {
                    initial_slots.set_text(DisplayKind::Unit, name, unit);
                }
            }
        }

        let store = Actor::new(initial, async move |state| {
            let mut display_sink = DisplayRelaySink(&display_text_changed_relay);
            loop {
                select_biased! {
                    changed = value_changed_stream.next() => {
                        if let Some((name, value)) = changed {
                            let mut store = state.lock_mut();
                            store.change_value(&name, value.as_str());
                            store.project_to_display_text(
                                &name,
                                &value,
                                DisplayKind::Value,
                                &mut display_sink,
                            );
                        }
                    }
                    changed = unit_changed_stream.next() => {
                        if let Some((name, unit)) = changed {
                            let mut store = state.lock_mut();
                            store.change_unit(&name, Some(unit.clone()));
                            store.project_to_display_text(
                                &name,
                                &unit,
                                DisplayKind::Unit,
                                &mut display_sink,
                            );
                        }
                    }
                }
            }
        });

        let display = Actor::new(initial_slots, async move |state| {
            while let Some(changed) = display_text_changed_stream.next().await {
                state
                    .lock_mut()
                    .set_text(changed.kind, &changed.name, &changed.text);
            }
        });

        zoon::println!("🎨 SUBJECTS: {} tracks {}", subject.name(), names.join(", "));

        Self {
            subject,
            names,
            store,
            display,
            value_changed_relay,
            unit_changed_relay,
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Inline value of `name` as projected from the store.
    pub fn style_signal(&self, name: &str) -> impl Signal<Item = Option<String>> + Unpin + use<> {
        let name = name.to_string();
        self.store
            .signal_ref(move |store| store.inline_style().get(&name).map(str::to_string))
    }

    /// Raw value of `name` for the input controls.
    pub fn value_signal(&self, name: &str) -> impl Signal<Item = String> + Unpin + use<> {
        let name = name.to_string();
        self.store.signal_ref(move |store| {
            store
                .get(&name)
                .map(|property| property.value.clone())
                .unwrap_or_default()
        })
    }

    pub fn unit_signal(&self, name: &str) -> impl Signal<Item = String> + Unpin + use<> {
        let name = name.to_string();
        self.store.signal_ref(move |store| {
            store
                .get(&name)
                .and_then(|property| property.unit.clone())
                .unwrap_or_default()
        })
    }

    /// Code text of `name` as `"{value}{unit}"`, from the display slots.
    pub fn display_signal(&self, name: &str) -> impl Signal<Item = String> + Unpin + use<> {
        let name = name.to_string();
        self.display.signal_ref(move |slots| {
            format!(
                "{}{}",
                slots.text(DisplayKind::Value, &name).unwrap_or("0"),
                slots.text(DisplayKind::Unit, &name).unwrap_or(""),
            )
        })
    }

    /// Applies every store property to `raw_el` as an inline style.
    pub fn apply_style<R: RawEl>(&self, raw_el: R) -> R {
        self.names.iter().fold(raw_el, |raw_el, name| {
            raw_el.style_signal(name.clone(), self.style_signal(name))
        })
    }
}
