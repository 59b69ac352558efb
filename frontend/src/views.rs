//! Editor layout: property controls on the left, preview and code on the right.

use crate::app::ShadowForgeApp;
use crate::controls::{
    action_button, checkbox, color_input, icon_button, number_input, range_input, unit_select,
    zero_if_empty,
};
use crate::dataflow::Atom;
use crate::shadow_layers::ShadowLayers;
use crate::subjects::SubjectProperties;
use shared::{CodeLine, ControlsSection, EditValue, Field, LayerId, ShadowProperty};
use zoon::*;

const PANEL_BACKGROUND: &str = "oklch(98% 0.005 255)";
const PANEL_BORDER: &str = "oklch(88% 0.02 255)";
const HEADING_TEXT: &str = "oklch(25% 0.05 255)";
const MUTED_TEXT: &str = "oklch(50% 0.04 255)";
const CODE_BACKGROUND: &str = "oklch(22% 0.02 255)";
const CODE_TEXT: &str = "oklch(92% 0.03 160)";
const ERROR_TEXT: &str = "oklch(55% 0.22 25)";

pub fn root(app: ShadowForgeApp) -> impl Element {
    Row::new()
        .s(Width::fill())
        .s(Height::fill())
        .s(Padding::all(24))
        .s(Gap::new().x(24))
        .s(Font::new().family([FontFamily::new("Inter"), FontFamily::SansSerif]))
        .item(controls_column(app.clone()))
        .item(preview_column(app))
}

fn panel(title: &str) -> Column<column::EmptyFlagNotSet, RawHtmlEl> {
    Column::new()
        .s(Width::fill())
        .s(Padding::all(16))
        .s(Gap::new().y(12))
        .s(RoundedCorners::all(8))
        .s(Background::new().color(PANEL_BACKGROUND))
        .s(Borders::all(Border::new().width(1).color(PANEL_BORDER)))
        .item(heading(title))
}

fn heading(title: &str) -> impl Element + use<> {
    El::new()
        .s(Font::new().size(16).weight(FontWeight::SemiBold).color(HEADING_TEXT))
        .child(title.to_string())
}

// ===== PROPERTY CONTROLS =====

fn controls_column(app: ShadowForgeApp) -> impl Element {
    let controls = app.config.controls.clone();
    Column::new()
        .s(Width::exact(380))
        .s(Align::new().top())
        .s(Gap::new().y(16))
        .item(
            panel("box")
                .item(size_row(&app.box_properties, "height", &controls))
                .item(size_row(&app.box_properties, "width", &controls))
                .item(subject_color_row(&app.box_properties, "background-color")),
        )
        .item(panel("canvas").item(subject_color_row(&app.canvas_properties, "background-color")))
        .item(shadow_list_panel(
            app.shadow_layers,
            app.shadow_list_expanded,
            controls,
        ))
}

fn size_row(
    properties: &SubjectProperties,
    name: &'static str,
    controls: &ControlsSection,
) -> impl Element + use<> {
    let subject = properties.subject.name();
    let value_changed_relay = properties.value_changed_relay.clone();
    let on_value = move |value: String| value_changed_relay.send((name.to_string(), value));
    let on_value_for_number = on_value.clone();
    let unit_changed_relay = properties.unit_changed_relay.clone();

    Column::new()
        .s(Gap::new().y(4))
        .item(label_text(name))
        .item(range_input(
            &format!("{subject} {name} value"),
            0,
            controls.size_max,
            properties.value_signal(name),
            on_value,
        ))
        .item(
            Row::new()
                .s(Gap::new().x(8))
                .item(number_input(
                    &format!("{subject} {name} value"),
                    properties.value_signal(name),
                    on_value_for_number,
                ))
                .item(unit_select(
                    &format!("{subject} {name} unit"),
                    &controls.units,
                    properties.unit_signal(name),
                    move |unit| unit_changed_relay.send((name.to_string(), unit)),
                )),
        )
}

fn subject_color_row(properties: &SubjectProperties, name: &'static str) -> impl Element + use<> {
    let value_changed_relay = properties.value_changed_relay.clone();
    let subject = properties.subject.name();
    Row::new()
        .s(Gap::new().x(8))
        .item(label_text(name))
        .item(color_input(
            &format!("{subject} {name}"),
            properties.value_signal(name),
            move |color| value_changed_relay.send((name.to_string(), color)),
        ))
        .item(
            El::new()
                .s(Font::new().color(MUTED_TEXT).family([FontFamily::Monospace]))
                .child_signal(properties.display_signal(name)),
        )
}

fn label_text(text: &str) -> impl Element + use<> {
    El::new()
        .s(Font::new().size(13).color(MUTED_TEXT))
        .child(text.to_string())
}

// ===== SHADOW LIST =====

fn shadow_list_panel(
    shadow_layers: ShadowLayers,
    expanded: Atom<bool>,
    controls: ControlsSection,
) -> impl Element {
    let add_relay = shadow_layers.add_shadow_button_pressed_relay.clone();
    let expanded_for_toggle = expanded.clone();
    let layers_for_error = shadow_layers.clone();

    Column::new()
        .s(Width::fill())
        .s(Padding::all(16))
        .s(Gap::new().y(12))
        .s(RoundedCorners::all(8))
        .s(Background::new().color(PANEL_BACKGROUND))
        .s(Borders::all(Border::new().width(1).color(PANEL_BORDER)))
        .item(
            Row::new()
                .s(Gap::new().x(8))
                .item(El::new().s(Width::fill()).child(heading("shadows")))
                .item(icon_button("▾", "show shadow list", move || {
                    expanded_for_toggle.toggle()
                }))
                .item(icon_button("+", "add shadow", move || add_relay.send(()))),
        )
        .item_signal(
            layers_for_error
                .last_edit_error
                .signal()
                .map(|error| {
                    error.map(|error| {
                        El::new()
                            .s(Font::new().size(13).color(ERROR_TEXT))
                            .child(error.to_string())
                    })
                }),
        )
        .item_signal(expanded.signal().map(move |is_expanded| {
            is_expanded.then(|| {
                let shadow_layers = shadow_layers.clone();
                let controls = controls.clone();
                Column::new()
                    .s(Gap::new().y(8))
                    .item_signal(shadow_layers.is_empty_signal().map(|is_empty| {
                        is_empty.then(|| label_text("no shadows yet, press + to add one"))
                    }))
                    .items_signal_vec(shadow_layers.layer_ids.signal_vec().map(move |id| {
                        shadow_layer_panel(shadow_layers.clone(), id, controls.clone())
                    }))
            })
        }))
}

fn shadow_layer_panel(
    shadow_layers: ShadowLayers,
    id: LayerId,
    controls: ControlsSection,
) -> impl Element {
    let expanded = Atom::new(false);
    let expanded_for_toggle = expanded.clone();
    let delete_relay = shadow_layers.delete_shadow_button_pressed_relay.clone();

    Column::new()
        .s(Gap::new().y(8))
        .s(Padding::all(8))
        .s(RoundedCorners::all(6))
        .s(Borders::all(Border::new().width(1).color(PANEL_BORDER)))
        .item(
            Row::new()
                .s(Gap::new().x(8))
                .item(
                    El::new()
                        .s(Width::fill())
                        .s(Font::new().weight(FontWeight::Medium).color(HEADING_TEXT))
                        .child_signal(shadow_layers.title_signal(id)),
                )
                .item(icon_button("▾", "show shadow property list", move || {
                    expanded_for_toggle.toggle()
                }))
                .item(icon_button("−", "delete shadow", move || delete_relay.send(id))),
        )
        .item_signal(expanded.signal().map(move |is_expanded| {
            is_expanded.then(|| shadow_property_inputs(&shadow_layers, id, &controls))
        }))
}

fn shadow_property_inputs(
    shadow_layers: &ShadowLayers,
    id: LayerId,
    controls: &ControlsSection,
) -> impl Element + use<> {
    Column::new()
        .s(Gap::new().y(8))
        .items(
            ShadowProperty::LENGTHS
                .into_iter()
                .map(|property| length_inputs(shadow_layers, id, property, controls)),
        )
        .item(shadow_color_inputs(shadow_layers, id))
        .item(inset_input(shadow_layers, id))
}

fn length_inputs(
    shadow_layers: &ShadowLayers,
    id: LayerId,
    property: ShadowProperty,
    controls: &ControlsSection,
) -> impl Element + use<> {
    let value_signal = || {
        shadow_layers
            .property_signal(id, property)
            .map(|value| value.map(|value| value.value).unwrap_or_default())
    };
    let unit_signal = shadow_layers
        .property_signal(id, property)
        .map(|value| value.and_then(|value| value.unit).unwrap_or_default());
    let on_value = {
        let shadow_layers = shadow_layers.clone();
        move |value: String| {
            shadow_layers.edit(id, property, Field::Value, EditValue::Text(value))
        }
    };
    let on_value_for_number = {
        let on_value = on_value.clone();
        move |value: String| on_value(zero_if_empty(value))
    };
    let on_unit = {
        let shadow_layers = shadow_layers.clone();
        move |unit: String| shadow_layers.edit(id, property, Field::Unit, EditValue::Text(unit))
    };

    Column::new()
        .s(Gap::new().y(4))
        .item(label_text(property.name()))
        .item(range_input(
            &format!("box shadow {property} value"),
            controls.range_min,
            controls.range_max,
            value_signal(),
            on_value,
        ))
        .item(
            Row::new()
                .s(Gap::new().x(8))
                .item(number_input(
                    &format!("box shadow {property} value"),
                    value_signal(),
                    on_value_for_number,
                ))
                .item(unit_select(
                    &format!("box shadow {property} unit"),
                    &controls.units,
                    unit_signal,
                    on_unit,
                )),
        )
}

fn shadow_color_inputs(shadow_layers: &ShadowLayers, id: LayerId) -> impl Element + use<> {
    let color_signal = || {
        shadow_layers
            .property_signal(id, ShadowProperty::Color)
            .map(|value| value.map(|value| value.value).unwrap_or_default())
    };
    let on_color = {
        let shadow_layers = shadow_layers.clone();
        move |color: String| {
            shadow_layers.edit(id, ShadowProperty::Color, Field::Value, EditValue::Text(color))
        }
    };

    Row::new()
        .s(Gap::new().x(8))
        .item(label_text("color"))
        .item(color_input("box shadow color value", color_signal(), on_color))
        .item(
            El::new()
                .s(Font::new().color(MUTED_TEXT).family([FontFamily::Monospace]))
                .child_signal(color_signal()),
        )
}

fn inset_input(shadow_layers: &ShadowLayers, id: LayerId) -> impl Element + use<> {
    let shadow_layers_for_change = shadow_layers.clone();
    checkbox("inset", shadow_layers.inset_signal(id), move |checked| {
        shadow_layers_for_change.edit(id, ShadowProperty::Inset, Field::Value, EditValue::Flag(checked))
    })
}

// ===== PREVIEW AND CODE =====

fn preview_column(app: ShadowForgeApp) -> impl Element {
    let copy_relay = app.copy_code.copy_button_pressed_relay.clone();
    let clipboard_config = app.config.clipboard.clone();

    Column::new()
        .s(Width::fill())
        .s(Align::new().top())
        .s(Gap::new().y(16))
        .item(preview_canvas(
            app.canvas_properties.clone(),
            app.box_properties.clone(),
            app.shadow_layers.clone(),
        ))
        .item(box_code(&app.box_properties))
        .item(
            panel("code")
                .item(shadow_code(&app.shadow_layers))
                .item(action_button(
                    app.copy_code
                        .status
                        .signal()
                        .map(move |status| status.label(&clipboard_config).to_string()),
                    move || copy_relay.send(()),
                )),
        )
}

fn preview_canvas(
    canvas_properties: SubjectProperties,
    box_properties: SubjectProperties,
    shadow_layers: ShadowLayers,
) -> impl Element {
    El::new()
        .s(Padding::all(64))
        .s(RoundedCorners::all(8))
        .s(Borders::all(Border::new().width(1).color(PANEL_BORDER)))
        .update_raw_el(move |raw_el| canvas_properties.apply_style(raw_el))
        .child(
            El::new()
                .s(Align::center())
                .update_raw_el(move |raw_el| {
                    box_properties
                        .apply_style(raw_el)
                        .style_signal("box-shadow", shadow_layers.style_signal())
                }),
        )
}

/// CSS of the box subject, mirrored from the display slots.
fn box_code(box_properties: &SubjectProperties) -> impl Element + use<> {
    panel("box css").items(box_properties.names().iter().map(|name| {
        Row::new()
            .s(Font::new().family([FontFamily::Monospace]).color(HEADING_TEXT))
            .item(format!("{name}: "))
            .item(El::new().child_signal(box_properties.display_signal(name)))
            .item(";")
    }))
}

fn shadow_code(shadow_layers: &ShadowLayers) -> impl Element + use<> {
    Column::new()
        .s(Width::fill())
        .s(Padding::all(12))
        .s(Gap::new().y(4))
        .s(RoundedCorners::all(6))
        .s(Background::new().color(CODE_BACKGROUND))
        .s(Font::new().family([FontFamily::Monospace]).color(CODE_TEXT))
        .item("box-shadow:")
        .items_signal_vec(
            shadow_layers
                .code_lines_signal()
                .map(|lines| lines.into_iter().map(code_line).collect::<Vec<_>>())
                .to_signal_vec(),
        )
}

fn code_line(line: CodeLine) -> impl Element {
    Row::new()
        .s(Padding::new().left(16))
        .s(Gap::new().x(6))
        .items(line.tokens)
}
