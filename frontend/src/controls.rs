//! Native form controls wired to callbacks.
//!
//! Each control binds its displayed value to a state signal and reports the
//! raw control value on `input` (or `change` for selects and checkboxes).

use wasm_bindgen::JsCast;
use zoon::*;

const CONTROL_BORDER: &str = "oklch(75% 0.03 255)";
const CONTROL_TEXT: &str = "oklch(30% 0.07 255)";

fn event_input_value(event: &web_sys::Event) -> Option<String> {
    let target = event.target()?;
    if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
        return Some(input.value());
    }
    target
        .dyn_ref::<web_sys::HtmlSelectElement>()
        .map(|select| select.value())
}

fn event_checked(event: &web_sys::Event) -> Option<bool> {
    event
        .target()?
        .dyn_ref::<web_sys::HtmlInputElement>()
        .map(|input| input.checked())
}

/// Shadow offsets treat a cleared number field as `0`.
pub fn zero_if_empty(value: String) -> String {
    if value.is_empty() { "0".to_string() } else { value }
}

pub fn range_input<S, F>(label: &str, min: i32, max: i32, value: S, on_input: F) -> impl Element + use<S, F>
where
    S: Signal<Item = String> + Unpin + 'static,
    F: Fn(String) + 'static,
{
    RawHtmlEl::new("input")
        .attr("type", "range")
        .attr("min", &min.to_string())
        .attr("max", &max.to_string())
        .attr("aria-label", label)
        .style("width", "100%")
        .prop_signal("value", value)
        .event_handler(move |event: events::Input| {
            if let Some(value) = event_input_value(&event.raw_event) {
                on_input(value);
            }
        })
}

pub fn number_input<S, F>(label: &str, value: S, on_input: F) -> impl Element + use<S, F>
where
    S: Signal<Item = String> + Unpin + 'static,
    F: Fn(String) + 'static,
{
    RawHtmlEl::new("input")
        .attr("type", "number")
        .attr("aria-label", label)
        .style("width", "64px")
        .style("padding", "2px 4px")
        .style("color", CONTROL_TEXT)
        .style("border", &format!("1px solid {CONTROL_BORDER}"))
        .style("border-radius", "4px")
        .prop_signal("value", value)
        .event_handler(move |event: events::Input| {
            if let Some(value) = event_input_value(&event.raw_event) {
                on_input(value);
            }
        })
}

pub fn unit_select<S, F>(label: &str, units: &[String], value: S, on_change: F) -> impl Element + use<S, F>
where
    S: Signal<Item = String> + Unpin + 'static,
    F: Fn(String) + 'static,
{
    let options = units.iter().map(|unit| {
        RawHtmlEl::new("option")
            .attr("value", unit)
            .child(unit.clone())
    });
    RawHtmlEl::new("select")
        .attr("aria-label", label)
        .style("padding", "2px 4px")
        .style("color", CONTROL_TEXT)
        .style("border", &format!("1px solid {CONTROL_BORDER}"))
        .style("border-radius", "4px")
        .children(options)
        .prop_signal("value", value)
        .event_handler(move |event: events::Change| {
            if let Some(unit) = event_input_value(&event.raw_event) {
                on_change(unit);
            }
        })
}

pub fn color_input<S, F>(label: &str, value: S, on_input: F) -> impl Element + use<S, F>
where
    S: Signal<Item = String> + Unpin + 'static,
    F: Fn(String) + 'static,
{
    RawHtmlEl::new("input")
        .attr("type", "color")
        .attr("aria-label", label)
        .style("width", "40px")
        .style("height", "28px")
        .style("padding", "0")
        .style("border", "none")
        .style("background", "none")
        .prop_signal("value", value)
        .event_handler(move |event: events::Input| {
            if let Some(color) = event_input_value(&event.raw_event) {
                on_input(color);
            }
        })
}

pub fn checkbox<S, F>(label: &str, checked: S, on_change: F) -> impl Element + use<S, F>
where
    S: Signal<Item = bool> + Unpin + 'static,
    F: Fn(bool) + 'static,
{
    let label = label.to_string();
    Row::new()
        .s(Gap::new().x(6))
        .s(Font::new().color(CONTROL_TEXT))
        .item(
            RawHtmlEl::new("input")
                .attr("type", "checkbox")
                .attr("aria-label", &label)
                .attr_signal("checked", checked.map(|checked| checked.then_some("")))
                .event_handler(move |event: events::Change| {
                    if let Some(checked) = event_checked(&event.raw_event) {
                        on_change(checked);
                    }
                }),
        )
        .item(Text::new(label))
}

pub fn action_button(
    label: impl Signal<Item = String> + Unpin + 'static,
    on_press: impl FnMut() + 'static,
) -> impl Element {
    Button::new()
        .s(Padding::new().x(12).y(6))
        .s(RoundedCorners::all(4))
        .s(Font::new().color("oklch(98% 0 0)").weight(FontWeight::Medium))
        .s(Background::new().color("oklch(55% 0.22 250)"))
        .label_signal(label)
        .on_press(on_press)
}

/// Small square icon-like button (expand / delete).
pub fn icon_button<F>(symbol: &'static str, label: &str, on_press: F) -> impl Element + use<F>
where
    F: FnMut() + 'static,
{
    Button::new()
        .s(Width::exact(24))
        .s(Height::exact(24))
        .s(RoundedCorners::all(4))
        .s(Borders::all(Border::new().width(1).color(CONTROL_BORDER)))
        .s(Font::new().color(CONTROL_TEXT).center())
        .label(symbol)
        .update_raw_el({
            let label = label.to_string();
            move |raw_el| raw_el.attr("aria-label", &label)
        })
        .on_press(on_press)
}
