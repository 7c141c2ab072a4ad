//! Risk explanation engine
//!
//! Deterministic rule set turning a single country/species trade profile
//! into a human-readable list of reasons. Rules are evaluated independently
//! in a fixed order; that order is the order reasons appear in the output.

use crate::models::TradeFeatureRecord;
use crate::stats::GlobalMeans;

/// CITES appendix tier at or above which protection status alone is a
/// risk signal, regardless of the global mean.
const APPENDIX_RISK_THRESHOLD: f64 = 2.0;

/// Explain why a trade profile is risky relative to global behavior.
///
/// Returns the empty string when no profile matched the predicted country:
/// with no trade record there is no behavioral claim to make. Missing
/// numeric fields on either side of a comparison read as zero. Ties never
/// trigger a mean-relative rule.
pub fn explain(profile: Option<&TradeFeatureRecord>, means: &GlobalMeans) -> String {
    let Some(profile) = profile else {
        return String::new();
    };

    let mut reasons: Vec<&str> = Vec::new();

    if profile.export_qty_log.unwrap_or(0.0) > means.mean("export_qty_log") {
        reasons.push("higher-than-average export volume");
    }

    if profile.num_trade_events.unwrap_or(0.0) > means.mean("num_trade_events") {
        reasons.push("frequent export transactions");
    }

    if profile.source_risk.unwrap_or(0.0) > means.mean("source_risk") {
        reasons.push("predominantly wild-sourced specimens");
    }

    if profile.live_trade_ratio.unwrap_or(0.0) > means.mean("live_trade_ratio") {
        reasons.push("significant live animal trade");
    }

    if profile.appendix_risk.unwrap_or(0.0) >= APPENDIX_RISK_THRESHOLD {
        reasons.push("higher CITES protection status");
    }

    if reasons.is_empty() {
        return "Risk is moderate due to average trade behavior.".to_string();
    }

    format!("Risk is elevated due to {}.", reasons.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(
        qty: Option<f64>,
        events: Option<f64>,
        source: Option<f64>,
        live: Option<f64>,
        appendix: Option<f64>,
    ) -> TradeFeatureRecord {
        TradeFeatureRecord {
            id: uuid::Uuid::nil(),
            taxon: "Crocodylus porosus".to_string(),
            exporter: "Indonesia".to_string(),
            export_qty_log: qty,
            num_trade_events: events,
            source_risk: source,
            live_trade_ratio: live,
            appendix_risk: appendix,
        }
    }

    fn means_at(qty: f64, events: f64, source: f64, live: f64) -> GlobalMeans {
        let records = vec![TradeFeatureRecord {
            id: uuid::Uuid::nil(),
            taxon: "mean".to_string(),
            exporter: "mean".to_string(),
            export_qty_log: Some(qty),
            num_trade_events: Some(events),
            source_risk: Some(source),
            live_trade_ratio: Some(live),
            appendix_risk: None,
        }];
        GlobalMeans::compute(&records)
    }

    #[test]
    fn test_absent_profile_yields_empty_string() {
        let means = means_at(2.0, 5.0, 0.5, 0.3);
        assert_eq!(explain(None, &means), "");
    }

    #[test]
    fn test_average_profile_is_moderate() {
        let means = means_at(2.0, 5.0, 0.5, 0.3);
        let p = profile(Some(2.0), Some(5.0), Some(0.5), Some(0.3), Some(1.0));
        assert_eq!(
            explain(Some(&p), &means),
            "Risk is moderate due to average trade behavior."
        );
    }

    #[test]
    fn test_ties_do_not_trigger() {
        // Every signal exactly at the mean and appendix below threshold.
        let means = means_at(3.0, 7.0, 0.4, 0.6);
        let p = profile(Some(3.0), Some(7.0), Some(0.4), Some(0.6), Some(1.9));
        assert_eq!(
            explain(Some(&p), &means),
            "Risk is moderate due to average trade behavior."
        );
    }

    #[test]
    fn test_all_rules_in_fixed_order() {
        let means = means_at(2.0, 5.0, 0.5, 0.3);
        let p = profile(Some(5.0), Some(10.0), Some(0.9), Some(0.8), Some(2.0));
        assert_eq!(
            explain(Some(&p), &means),
            "Risk is elevated due to higher-than-average export volume, \
             frequent export transactions, predominantly wild-sourced specimens, \
             significant live animal trade, higher CITES protection status."
        );
    }

    #[test]
    fn test_rule_order_with_sparse_triggers() {
        let means = means_at(2.0, 5.0, 0.5, 0.3);
        // Only rules 2 and 5 fire; rule 2's reason must come first.
        let p = profile(Some(1.0), Some(10.0), Some(0.1), Some(0.1), Some(3.0));
        assert_eq!(
            explain(Some(&p), &means),
            "Risk is elevated due to frequent export transactions, \
             higher CITES protection status."
        );
    }

    #[test]
    fn test_appendix_threshold_is_absolute() {
        let means = means_at(10.0, 10.0, 10.0, 10.0);
        let p = profile(Some(0.0), Some(0.0), Some(0.0), Some(0.0), Some(2.0));
        assert_eq!(
            explain(Some(&p), &means),
            "Risk is elevated due to higher CITES protection status."
        );
    }

    #[test]
    fn test_empty_means_never_fail() {
        let means = GlobalMeans::empty();
        let p = profile(Some(5.0), Some(10.0), Some(0.9), Some(0.8), Some(0.0));
        let out = explain(Some(&p), &means);
        assert!(out.starts_with("Risk is elevated due to"));
        assert!(out.contains("higher-than-average export volume"));
    }

    #[test]
    fn test_missing_fields_read_as_zero() {
        let means = means_at(2.0, 5.0, 0.5, 0.3);
        let p = profile(None, None, None, None, None);
        assert_eq!(
            explain(Some(&p), &means),
            "Risk is moderate due to average trade behavior."
        );
    }
}
