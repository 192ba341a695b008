use chrono::NaiveDate;

use super::context::{ReportContext, ReportVariant};

/// Rendered in place of any optional identity field left blank, so the line
/// structure of a report never depends on which fields were supplied.
pub const NOT_PROVIDED: &str = "not provided";

/// Download name for the exported report text.
pub fn file_name(variant: ReportVariant, date: NaiveDate) -> String {
    format!("lightning_history_{}_{}.txt", variant.file_label(), date)
}

/// Renders the report body. Deterministic: identical context and variant
/// always produce byte-identical text, and the line count is fixed per
/// variant (the certificate adds the requester and contractor sections, the
/// plain report carries a search-information section instead).
pub fn synthesize(context: &ReportContext, variant: ReportVariant) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(variant.title().to_string());
    lines.push(String::new());

    match variant {
        ReportVariant::Plain => {
            lines.push("[Search Information]".to_string());
            lines.push(format!("Address: {}", context.address));
        }
        ReportVariant::Certificate => {
            lines.push("[Requester Information]".to_string());
            lines.push(format!(
                "Requester: {}",
                optional(context.requester.name.as_deref())
            ));
            lines.push(format!(
                "Survey location: {}",
                context
                    .requester
                    .address
                    .as_deref()
                    .unwrap_or(&context.address)
            ));
        }
    }
    lines.push(format!(
        "Survey conducted: {}",
        context.generated_at.format("%Y-%m-%d %H:%M:%S")
    ));

    lines.push(String::new());
    lines.push("[Survey Results]".to_string());
    lines.push(format!(
        "Target date: {} (24-hour window)",
        context.target_date
    ));
    lines.push(format!(
        "Search radius: {} km",
        context.stats.max_radius_km()
    ));
    lines.push(format!("Strikes detected: {}", context.stats.total()));
    lines.push(format!(
        "Closest approach: {}",
        closest_label(context.closest_km)
    ));

    lines.push(String::new());
    lines.push("[Distance Statistics]".to_string());
    for (ring, count) in context.stats.ring_counts() {
        lines.push(format!("Within {ring} km: {count}"));
    }

    if variant == ReportVariant::Certificate {
        lines.push(String::new());
        lines.push("[Contractor Information]".to_string());
        lines.push(format!(
            "Company: {}",
            optional(context.contractor.company_name.as_deref())
        ));
        lines.push(format!(
            "License number: {}",
            optional(context.contractor.license_number.as_deref())
        ));
        lines.push(format!(
            "Surveyor: {}",
            optional(context.contractor.representative.as_deref())
        ));
        lines.push(format!("Issued: {}", context.generated_at.date()));
    }

    lines.push(String::new());
    lines.push("[Data Source]".to_string());
    lines.push("Blitzortung.org - community lightning observation network".to_string());
    lines.push("- 1,800 stations across 83 countries".to_string());
    lines.push("- Mean location accuracy: 5.3 km".to_string());
    lines.push("- Detection efficiency: above 90%".to_string());
    lines.push("- Freely provided, with high reliability for locating strike activity".to_string());

    lines.push(String::new());
    lines.push("[Disclaimer]".to_string());
    lines.push("This report is provided for reference purposes only.".to_string());
    lines.push(
        "Consult official meteorological services for disaster-prevention information."
            .to_string(),
    );

    lines.join("\n")
}

fn optional(value: Option<&str>) -> &str {
    value.unwrap_or(NOT_PROVIDED)
}

fn closest_label(closest_km: Option<f64>) -> String {
    match closest_km {
        Some(km) => format!("{km:.2} km"),
        None => "none".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::super::context::{ContractorIdentity, RequesterIdentity};
    use super::*;
    use crate::workflows::strikes::domain::{Direction, StrikeEvent};
    use crate::workflows::strikes::stats::{closest_approach, compute_stats};
    use chrono::{NaiveDateTime, NaiveTime};

    fn event(distance_km: f64, intensity: u32) -> StrikeEvent {
        StrikeEvent {
            time: NaiveTime::from_hms_opt(14, 21, 9).expect("valid time"),
            distance_km,
            intensity,
            direction: Direction::Southwest,
            latitude: None,
            longitude: None,
        }
    }

    fn generated_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 2)
            .expect("valid date")
            .and_hms_opt(9, 30, 0)
            .expect("valid time")
    }

    fn context(events: &[StrikeEvent]) -> ReportContext {
        ReportContext {
            address: "1-1-1 Marunouchi, Chiyoda".to_string(),
            target_date: NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date"),
            stats: compute_stats(events, 5),
            closest_km: closest_approach(events),
            generated_at: generated_at(),
            contractor: ContractorIdentity::default(),
            requester: RequesterIdentity::default(),
        }
    }

    #[test]
    fn plain_report_omits_certificate_sections() {
        let text = synthesize(&context(&[event(1.2, 85)]), ReportVariant::Plain);

        assert!(text.contains("[Search Information]"));
        assert!(!text.contains("[Requester Information]"));
        assert!(!text.contains("[Contractor Information]"));
        assert!(text.contains("Address: 1-1-1 Marunouchi, Chiyoda"));
    }

    #[test]
    fn certificate_renders_sentinels_for_missing_identity() {
        let text = synthesize(&context(&[event(1.2, 85)]), ReportVariant::Certificate);

        assert!(text.contains("[Requester Information]"));
        assert!(text.contains("[Contractor Information]"));
        assert!(text.contains(&format!("Requester: {NOT_PROVIDED}")));
        assert!(text.contains(&format!("Company: {NOT_PROVIDED}")));
        assert!(text.contains(&format!("License number: {NOT_PROVIDED}")));
        assert!(text.contains(&format!("Surveyor: {NOT_PROVIDED}")));
    }

    #[test]
    fn certificate_prefers_the_requester_address() {
        let mut with_requester = context(&[event(0.4, 40)]);
        with_requester.requester = RequesterIdentity {
            name: Some("A. Tanaka".to_string()),
            address: Some("2-8-1 Nishishinjuku".to_string()),
        };

        let text = synthesize(&with_requester, ReportVariant::Certificate);
        assert!(text.contains("Survey location: 2-8-1 Nishishinjuku"));

        let fallback = synthesize(&context(&[event(0.4, 40)]), ReportVariant::Certificate);
        assert!(fallback.contains("Survey location: 1-1-1 Marunouchi, Chiyoda"));
    }

    #[test]
    fn synthesis_is_idempotent() {
        let context = context(&[event(3.3, 99), event(0.7, 21)]);

        assert_eq!(
            synthesize(&context, ReportVariant::Certificate),
            synthesize(&context, ReportVariant::Certificate)
        );
        assert_eq!(
            synthesize(&context, ReportVariant::Plain),
            synthesize(&context, ReportVariant::Plain)
        );
    }

    #[test]
    fn line_structure_is_fixed_per_variant() {
        let sparse = context(&[]);
        let mut dense = context(&[event(0.2, 118), event(4.9, 20), event(2.2, 61)]);
        dense.requester = RequesterIdentity {
            name: Some("B. Sato".to_string()),
            address: Some("Osaka".to_string()),
        };
        dense.contractor = ContractorIdentity {
            company_name: Some("Raiden Survey KK".to_string()),
            license_number: Some("TK-2210".to_string()),
            representative: Some("C. Ito".to_string()),
        };

        for variant in [ReportVariant::Plain, ReportVariant::Certificate] {
            assert_eq!(
                synthesize(&sparse, variant).lines().count(),
                synthesize(&dense, variant).lines().count()
            );
        }
    }

    #[test]
    fn empty_detail_reports_no_closest_approach() {
        let text = synthesize(&context(&[]), ReportVariant::Plain);

        assert!(text.contains("Strikes detected: 0"));
        assert!(text.contains("Closest approach: none"));
    }

    #[test]
    fn download_name_carries_variant_and_date() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date");

        assert_eq!(
            file_name(ReportVariant::Plain, date),
            "lightning_history_report_2024-06-01.txt"
        );
        assert_eq!(
            file_name(ReportVariant::Certificate, date),
            "lightning_history_certificate_2024-06-01.txt"
        );
    }
}
