//! Projections of the shadow list into CSS and into the code panel text.

use crate::shadow::ShadowLayer;

/// Value of the `box-shadow` style property for the given layers.
///
/// A layer without `inset` still ends with the separating space before the
/// empty keyword. No layers clears the shadow.
pub fn box_shadow_style(layers: &[ShadowLayer]) -> String {
    layers
        .iter()
        .map(|layer| {
            format!(
                "{} {} {} {} {} {}",
                layer.x.css(),
                layer.y.css(),
                layer.blur.css(),
                layer.spread.css(),
                layer.color.value,
                if layer.inset.value { "inset" } else { "" },
            )
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// One rendered line of the code panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeLine {
    pub tokens: Vec<String>,
}

impl CodeLine {
    pub fn text(&self) -> String {
        self.tokens.join(" ")
    }
}

fn inset_token(layer: &ShadowLayer) -> String {
    let keyword = if layer.inset.value { "inset," } else { "," };
    format!("{keyword}{}", layer.inset.unit.as_deref().unwrap_or(""))
}

/// Code panel lines, one per layer.
///
/// Every line ends with the `inset` token carrying the separating comma. Only
/// the final token of the final line has it stripped, and a token left empty
/// by that is dropped.
pub fn code_lines(layers: &[ShadowLayer]) -> Vec<CodeLine> {
    let mut lines: Vec<CodeLine> = layers
        .iter()
        .map(|layer| CodeLine {
            tokens: vec![
                layer.x.css(),
                layer.y.css(),
                layer.blur.css(),
                layer.spread.css(),
                layer.color.css(),
                inset_token(layer),
            ],
        })
        .collect();

    if let Some(last_line) = lines.last_mut() {
        if let Some(last_token) = last_line.tokens.pop() {
            let trimmed = last_token.replacen(',', "", 1);
            if !trimmed.is_empty() {
                last_line.tokens.push(trimmed);
            }
        }
    }
    lines
}

/// Code panel text as copied to the clipboard.
pub fn code_text(layers: &[ShadowLayer]) -> String {
    code_lines(layers)
        .iter()
        .map(CodeLine::text)
        .collect::<Vec<_>>()
        .join("\n")
}
