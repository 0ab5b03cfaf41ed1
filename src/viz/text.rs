//! Text measurement and truncation used for legend box sizing.
//!
//! Plotters has no built-in text measuring, so widths are estimated from
//! per-character classes in em units of the font size. Dataset names are
//! dominated by alphanumerics and underscores, so two classes suffice:
//! punctuation and thin letters at ~0.35em, everything else at 0.6em.

/// Estimated advance of one character, in em units.
fn char_width_em(ch: char) -> f32 {
    match ch {
        '.' | ',' | ':' | ';' | '\'' | '|' | '!' | 'i' | 'l' | 'j' | 'I' | 'f' | 't' => 0.35,
        _ => 0.60,
    }
}

/// Estimate the rendered pixel width of `text` at `font_px`.
pub fn estimate_text_width_px(text: &str, font_px: u32) -> u32 {
    let ems: f32 = text.chars().map(char_width_em).sum();
    (ems * font_px as f32).ceil() as u32
}

/// Truncate `text` so it fits within `max_px`, replacing the cut tail with
/// a single ellipsis. Text that already fits is returned unchanged; if not
/// even one character plus the ellipsis fits, the result is empty.
pub fn truncate_to_width(text: &str, font_px: u32, max_px: u32) -> String {
    if estimate_text_width_px(text, font_px) <= max_px {
        return text.to_string();
    }
    let ellipsis_px = (char_width_em('…') * font_px as f32).ceil() as u32;
    let budget = max_px.saturating_sub(ellipsis_px);

    let mut out = String::new();
    let mut used_em = 0.0f32;
    for ch in text.chars() {
        let next_em = used_em + char_width_em(ch);
        if (next_em * font_px as f32).ceil() as u32 > budget {
            break;
        }
        out.push(ch);
        used_em = next_em;
    }
    if out.is_empty() {
        return out;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_passes_through() {
        assert_eq!(truncate_to_width("sample", 12, 200), "sample");
    }

    #[test]
    fn long_text_gets_ellipsis() {
        let t = truncate_to_width("a_very_long_dataset_name", 12, 60);
        assert!(t.ends_with('…'));
        assert!(estimate_text_width_px(&t, 12) <= 60);
    }

    #[test]
    fn thin_characters_measure_narrower() {
        assert!(estimate_text_width_px("iiii", 12) < estimate_text_width_px("mmmm", 12));
    }

    #[test]
    fn truncation_never_exceeds_the_cap() {
        for cap in [5u32, 20, 40, 80] {
            let t = truncate_to_width("illumina_run_2024_lane_3.fastq", 12, cap);
            assert!(estimate_text_width_px(&t, 12) <= cap, "cap {cap} gave {t:?}");
        }
    }
}
