//! Wheel snapshot as a standalone SVG document.
//!
//! Output depends only on the geometry, the slot contents and the colour
//! flag, so two renders of the same wheel are byte-identical.

use std::fmt::Write as _;

use csb_core::wheel;
use csb_core::wheel::WedgeLayout;
use csb_core::wheel::WheelGeometry;
use csb_core::ThemeKey;

pub const NEUTRAL_FILL: &str = "#B0BEC5";
pub const EMPTY_FILL: &str = "#ECEFF1";
const STROKE: &str = "#FFFFFF";
const HUB_FILL: &str = "#FFFFFF";
const LABEL_FILL: &str = "#FFFFFF";
const NEUTRAL_LABEL_FILL: &str = "#263238";
const LINE_HEIGHT: f64 = 13.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotOptions {
    pub domain_colours: bool,
    /// Draw empty slots as pale wedges instead of leaving gaps.
    pub show_empty_slots: bool,
}

impl Default for SnapshotOptions {
    fn default() -> Self {
        Self {
            domain_colours: true,
            show_empty_slots: true,
        }
    }
}

pub fn render_wheel_svg(
    geometry: &WheelGeometry,
    slots: &[Option<ThemeKey>],
    options: SnapshotOptions,
) -> String {
    let size = geometry.size;
    let center = geometry.center();
    let mut svg = String::new();

    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{size:.0}\" height=\"{size:.0}\" viewBox=\"0 0 {size:.0} {size:.0}\" role=\"img\">"
    );
    let _ = writeln!(svg, "  <title>Dominant themes wheel</title>");

    if options.show_empty_slots {
        let _ = writeln!(svg, "  <g class=\"empty\">");
        for slot in 0..geometry.slots {
            if slots.get(slot).copied().flatten().is_some() {
                continue;
            }
            let (start, end) = geometry.slot_angles(slot);
            let contour =
                wheel::wedge_contour(center, geometry.r_outer, geometry.r_inner, start, end);
            let _ = writeln!(
                svg,
                "    <path d=\"{}\" fill=\"{EMPTY_FILL}\" stroke=\"{STROKE}\" stroke-width=\"2\"/>",
                contour.to_svg_path()
            );
        }
        let _ = writeln!(svg, "  </g>");
    }

    let wedges = wheel::layout(geometry, slots);
    let _ = writeln!(svg, "  <g class=\"wedges\">");
    for wedge in &wedges {
        write_wedge(&mut svg, wedge, options.domain_colours);
    }
    let _ = writeln!(svg, "  </g>");

    let _ = writeln!(
        svg,
        "  <circle cx=\"{:.3}\" cy=\"{:.3}\" r=\"{:.3}\" fill=\"{HUB_FILL}\"/>",
        center.x,
        center.y,
        geometry.hub_radius()
    );
    let _ = writeln!(
        svg,
        "  <text x=\"{:.3}\" y=\"{:.3}\" text-anchor=\"middle\" dominant-baseline=\"middle\" font-family=\"sans-serif\" font-size=\"14\" fill=\"{NEUTRAL_LABEL_FILL}\">Top {}</text>",
        center.x,
        center.y,
        geometry.slots
    );
    svg.push_str("</svg>\n");
    svg
}

fn write_wedge(svg: &mut String, wedge: &WedgeLayout, domain_colours: bool) {
    let (fill, text_fill) = if domain_colours {
        (wedge.key.color(), LABEL_FILL)
    } else {
        (NEUTRAL_FILL, NEUTRAL_LABEL_FILL)
    };
    let _ = writeln!(
        svg,
        "    <g data-slot=\"{}\" data-theme=\"{}\">",
        wedge.slot,
        wedge.key.as_str()
    );
    let _ = writeln!(
        svg,
        "      <path d=\"{}\" fill=\"{fill}\" stroke=\"{STROKE}\" stroke-width=\"2\"/>",
        wedge.contour.to_svg_path()
    );

    // Rank sits on the first line, label lines are centred below it.
    let lines = wedge.label_lines.len() as f64 + 1.0;
    let top = wedge.label_anchor.y - (lines - 1.0) * LINE_HEIGHT / 2.0;
    let _ = writeln!(
        svg,
        "      <text x=\"{:.3}\" y=\"{:.3}\" text-anchor=\"middle\" font-family=\"sans-serif\" font-size=\"11\" font-weight=\"bold\" fill=\"{text_fill}\">{}</text>",
        wedge.label_anchor.x,
        top,
        escape_xml(&wedge.rank_label)
    );
    for (idx, line) in wedge.label_lines.iter().enumerate() {
        let _ = writeln!(
            svg,
            "      <text x=\"{:.3}\" y=\"{:.3}\" text-anchor=\"middle\" font-family=\"sans-serif\" font-size=\"11\" fill=\"{text_fill}\">{}</text>",
            wedge.label_anchor.x,
            top + (idx as f64 + 1.0) * LINE_HEIGHT,
            escape_xml(line)
        );
    }
    let _ = writeln!(svg, "    </g>");
}

pub fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn full_slots() -> Vec<Option<ThemeKey>> {
        ThemeKey::ALL[..10].iter().copied().map(Some).collect()
    }

    #[test]
    fn rendering_is_deterministic() {
        let geometry = WheelGeometry::default();
        let slots = full_slots();
        let first = render_wheel_svg(&geometry, &slots, SnapshotOptions::default());
        let second = render_wheel_svg(&geometry, &slots, SnapshotOptions::default());
        assert_eq!(first, second);
        assert!(first.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(first.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn full_wheel_has_one_wedge_per_slot_and_a_hub() {
        let geometry = WheelGeometry::default();
        let svg = render_wheel_svg(&geometry, &full_slots(), SnapshotOptions::default());
        assert_eq!(svg.matches("data-slot=").count(), 10);
        assert_eq!(svg.matches("<circle").count(), 1);
        assert!(svg.contains(">#1<"));
        assert!(svg.contains(">#10<"));
        assert!(!svg.contains(EMPTY_FILL));
    }

    #[test]
    fn colour_flag_switches_between_domain_and_neutral_fill() {
        let geometry = WheelGeometry::default();
        let mut slots = vec![None; 10];
        slots[0] = Some(ThemeKey::Achiever);

        let coloured = render_wheel_svg(&geometry, &slots, SnapshotOptions::default());
        assert!(coloured.contains(ThemeKey::Achiever.color()));

        let neutral = render_wheel_svg(
            &geometry,
            &slots,
            SnapshotOptions {
                domain_colours: false,
                show_empty_slots: false,
            },
        );
        assert!(!neutral.contains(ThemeKey::Achiever.color()));
        assert!(neutral.contains(NEUTRAL_FILL));
        assert!(!neutral.contains(EMPTY_FILL));
    }

    #[test]
    fn empty_slots_render_as_pale_wedges() {
        let geometry = WheelGeometry::default();
        let mut slots = vec![None; 10];
        slots[4] = Some(ThemeKey::Woo);
        let svg = render_wheel_svg(&geometry, &slots, SnapshotOptions::default());
        assert_eq!(svg.matches(EMPTY_FILL).count(), 9);
        assert!(svg.contains("data-slot=\"4\" data-theme=\"woo\""));
    }

    #[test]
    fn labels_are_escaped() {
        assert_eq!(escape_xml("A&B <\"x\">"), "A&amp;B &lt;&quot;x&quot;&gt;");
        assert_eq!(escape_xml("Woo®"), "Woo®");
    }
}
