//! Spacing and color constants for node bodies.

use nodeflex_core::StyleResolver;

/// Layout constants for node bodies.
///
/// Every field can be themed through a design token. Numeric tokens use
/// the `node-param-` prefix (`node-param-cell-min-width`, ...), except the
/// node frame itself (`node-header-height`, `node-width`).
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterLayoutStyle {
    /// Height of the node title bar
    pub header_height: f64,
    /// Width of an expanded node
    pub node_width: f64,
    /// Space between the header and the first element
    pub body_top_padding: f64,
    /// Horizontal inset of the body, and bottom padding
    pub grid_padding: f64,
    pub cell_min_width: f64,
    pub cell_height: f64,
    /// Gap between grid cells and between stacked rows
    pub gap: f64,
    pub group_header_height: f64,
    pub divider_height: f64,
    /// Space above and below a group divider
    pub divider_spacing: f64,
    pub knob_radius: f64,
    pub port_radius: f64,
    pub label_height: f64,
    pub slider_height: f64,
    pub slider_label_width: f64,
    pub slider_value_width: f64,
    pub slider_track_height: f64,
    pub slider_thumb_radius: f64,
    pub bezier_height: f64,
    pub handle_radius: f64,
    pub remap_height: f64,
    pub bar_height: f64,
    pub frequency_height: f64,
    pub text_color: String,
    pub muted_text_color: String,
    pub track_color: String,
    pub accent_color: String,
    pub divider_color: String,
    pub port_color: String,
}

impl Default for ParameterLayoutStyle {
    fn default() -> Self {
        Self {
            header_height: 28.0,
            node_width: 240.0,
            body_top_padding: 8.0,
            grid_padding: 12.0,
            cell_min_width: 64.0,
            cell_height: 72.0,
            gap: 8.0,
            group_header_height: 20.0,
            divider_height: 1.0,
            divider_spacing: 8.0,
            knob_radius: 16.0,
            port_radius: 4.0,
            label_height: 14.0,
            slider_height: 24.0,
            slider_label_width: 64.0,
            slider_value_width: 40.0,
            slider_track_height: 6.0,
            slider_thumb_radius: 6.0,
            bezier_height: 120.0,
            handle_radius: 5.0,
            remap_height: 64.0,
            bar_height: 10.0,
            frequency_height: 40.0,
            text_color: "#d4d4d8".to_string(),
            muted_text_color: "#8b8b93".to_string(),
            track_color: "#3f3f46".to_string(),
            accent_color: "#4f8cff".to_string(),
            divider_color: "#27272a".to_string(),
            port_color: "#a1a1aa".to_string(),
        }
    }
}

impl ParameterLayoutStyle {
    /// Defaults overridden by any matching tokens.
    pub fn from_tokens(tokens: &dyn StyleResolver) -> Self {
        let d = Self::default();
        let number = |name: &str, fallback: f64| tokens.number_token(&format!("node-param-{}", name), fallback);
        let color = |name: &str, fallback: &str| tokens.color_token(&format!("node-param-{}", name), fallback);

        Self {
            header_height: tokens.number_token("node-header-height", d.header_height),
            node_width: tokens.number_token("node-width", d.node_width),
            body_top_padding: number("body-top-padding", d.body_top_padding),
            grid_padding: number("grid-padding", d.grid_padding),
            cell_min_width: number("cell-min-width", d.cell_min_width),
            cell_height: number("cell-height", d.cell_height),
            gap: number("gap", d.gap),
            group_header_height: number("group-header-height", d.group_header_height),
            divider_height: number("divider-height", d.divider_height),
            divider_spacing: number("divider-spacing", d.divider_spacing),
            knob_radius: number("knob-radius", d.knob_radius),
            port_radius: number("port-radius", d.port_radius),
            label_height: number("label-height", d.label_height),
            slider_height: number("slider-height", d.slider_height),
            slider_label_width: number("slider-label-width", d.slider_label_width),
            slider_value_width: number("slider-value-width", d.slider_value_width),
            slider_track_height: number("slider-track-height", d.slider_track_height),
            slider_thumb_radius: number("slider-thumb-radius", d.slider_thumb_radius),
            bezier_height: number("bezier-height", d.bezier_height),
            handle_radius: number("handle-radius", d.handle_radius),
            remap_height: number("remap-height", d.remap_height),
            bar_height: number("bar-height", d.bar_height),
            frequency_height: number("frequency-height", d.frequency_height),
            text_color: color("text-color", &d.text_color),
            muted_text_color: color("muted-text-color", &d.muted_text_color),
            track_color: color("track-color", &d.track_color),
            accent_color: color("accent-color", &d.accent_color),
            divider_color: color("divider-color", &d.divider_color),
            port_color: color("port-color", &d.port_color),
        }
    }

    /// Horizontal space available to elements in a node of `node_width`.
    pub fn available_width(&self, node_width: f64) -> f64 {
        (node_width - 2.0 * self.grid_padding).max(0.0)
    }
}
