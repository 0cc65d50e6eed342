//! Header-based layout detection.

use courier_model::LayoutType;

/// A header predicate: every phrase must appear in the joined header text.
struct LayoutRule {
    phrases: &'static [&'static str],
    layout: LayoutType,
}

/// Ordered rules. Several layouts share vocabulary, so the first rule that
/// matches decides; reordering changes classification.
const LAYOUT_RULES: &[LayoutRule] = &[
    LayoutRule {
        phrases: &["recip co.", "cod"],
        layout: LayoutType::YaquiLocal,
    },
    LayoutRule {
        phrases: &["recip name", "commit time"],
        layout: LayoutType::Basic,
    },
    LayoutRule {
        phrases: &["shpr co", "latest dept location"],
        layout: LayoutType::Long,
    },
    LayoutRule {
        phrases: &["cons number", "tracking number"],
        layout: LayoutType::Opar,
    },
    LayoutRule {
        phrases: &["opar report"],
        layout: LayoutType::Opar,
    },
    LayoutRule {
        phrases: &["recip addr", "last comm scan"],
        layout: LayoutType::Caborca,
    },
    LayoutRule {
        phrases: &["caborca-penasco-st ana-benjamin h."],
        layout: LayoutType::Caborca,
    },
    LayoutRule {
        phrases: &["del yaqui"],
        layout: LayoutType::YaquiLocal,
    },
];

/// Joins header cells with single spaces and lower-cases the result.
fn header_text<S: AsRef<str>>(header_row: &[S]) -> String {
    header_row
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Classifies a spreadsheet header row.
///
/// Returns `None` when no layout matches; the caller must reject the upload
/// before parsing any row.
pub fn detect_layout<S: AsRef<str>>(header_row: &[S]) -> Option<LayoutType> {
    let text = header_text(header_row);
    LAYOUT_RULES
        .iter()
        .find(|rule| rule.phrases.iter().all(|phrase| text.contains(phrase)))
        .map(|rule| rule.layout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaqui_local() {
        assert_eq!(
            detect_layout(&["Recip Co.", "COD", "Other"]),
            Some(LayoutType::YaquiLocal)
        );
    }

    #[test]
    fn test_unrecognized() {
        assert_eq!(detect_layout(&["random", "headers"]), None);
        assert_eq!(detect_layout::<&str>(&[]), None);
    }

    #[test]
    fn test_phrases_may_span_cells() {
        // "opar" and "report" in adjacent cells join to "opar report".
        assert_eq!(detect_layout(&["OPAR", "Report"]), Some(LayoutType::Opar));
    }

    #[test]
    fn test_first_rule_wins() {
        // Satisfies both the BASIC and CABORCA predicates.
        let header = ["Recip Name", "Commit Time", "Recip Addr", "Last Comm Scan"];
        assert_eq!(detect_layout(&header), Some(LayoutType::Basic));
    }
}
