use eframe::egui::{Context, Visuals};

use crate::ui::ui_config::UI_CONFIG;

/// Insert `,` between groups of three integer digits. Keeps sign and fraction.
pub fn group_thousands(formatted: &str) -> String {
    let (sign, rest) = match formatted.strip_prefix('-') {
        Some(r) => ("-", r),
        None => ("", formatted),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rest, None),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Price text without the `$`: exponent below 0.01, 6 decimals below 1, else 2 grouped.
pub fn format_price(price: f64) -> String {
    if price < 0.01 {
        format!("{:.2e}", price)
    } else if price < 1.0 {
        format!("{:.6}", price)
    } else {
        group_thousands(&format!("{:.2}", price))
    }
}

/// Market cap / volume text with B and M suffixes.
pub fn format_compact(value: f64) -> String {
    if value >= 1e9 {
        format!("{:.2}B", value / 1e9)
    } else if value >= 1e6 {
        format!("{:.2}M", value / 1e6)
    } else {
        format_count(value)
    }
}

/// Whole numbers grouped, fractional ones to 2 places.
pub fn format_count(value: f64) -> String {
    if value.fract() == 0.0 {
        group_thousands(&format!("{:.0}", value))
    } else {
        group_thousands(&format!("{:.2}", value))
    }
}

/// Signed percent with 2 decimals ("+1.23%" / "-0.50%").
pub fn format_change(pct: f64) -> String {
    format!("{:+.2}%", pct)
}

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.extreme_bg_color = UI_CONFIG.colors.central_panel;

    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_pick_precision_by_magnitude() {
        assert_eq!(format_price(0.00042), "4.20e-4");
        assert_eq!(format_price(0.5), "0.500000");
        assert_eq!(format_price(97845.0), "97,845.00");
        assert_eq!(format_price(175.2), "175.20");
    }

    #[test]
    fn compact_uses_billions_and_millions() {
        assert_eq!(format_compact(1_920_000_000_000.0), "1920.00B");
        assert_eq!(format_compact(55_000_000.0), "55.00M");
        assert_eq!(format_compact(420_000.0), "420,000");
    }

    #[test]
    fn grouping_keeps_sign_and_fraction() {
        assert_eq!(group_thousands("-1234567.89"), "-1,234,567.89");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(format_count(21_000_000.0), "21,000,000");
        assert_eq!(format_change(-0.5), "-0.50%");
        assert_eq!(format_change(2.0), "+2.00%");
    }
}
