//! Alert level classification

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fraction of the threshold where the preventive band starts
pub const PREVENTIVE_RATIO: Decimal = Decimal::from_parts(80, 0, 0, false, 2);

/// Multiple of the threshold where the critical band starts
pub const CRITICAL_RATIO: Decimal = Decimal::from_parts(120, 0, 0, false, 2);

/// Ordinal alert severity, least to most severe
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    /// Below 80% of the threshold
    Normal,
    /// From 80% up to the threshold
    Preventive,
    /// From the threshold up to 120% of it
    Alert,
    /// 120% of the threshold and above
    Critical,
}

impl AlertLevel {
    pub const ALL: [AlertLevel; 4] = [
        AlertLevel::Normal,
        AlertLevel::Preventive,
        AlertLevel::Alert,
        AlertLevel::Critical,
    ];

    pub fn recommendation(&self) -> &'static str {
        recommendation_for(*self)
    }
}

impl std::fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertLevel::Normal => write!(f, "Normal"),
            AlertLevel::Preventive => write!(f, "Preventive"),
            AlertLevel::Alert => write!(f, "Alert"),
            AlertLevel::Critical => write!(f, "Critical"),
        }
    }
}

/// Classify a concentration against its reference threshold
///
/// Band lower bounds are inclusive.
pub fn classify(value: Decimal, threshold: Decimal) -> AlertLevel {
    if value < threshold * PREVENTIVE_RATIO {
        AlertLevel::Normal
    } else if value < threshold {
        AlertLevel::Preventive
    } else if value < threshold * CRITICAL_RATIO {
        AlertLevel::Alert
    } else {
        AlertLevel::Critical
    }
}

/// Single level to display for a measured and a predicted level
///
/// The measured level wins unless the prediction is strictly worse. This
/// agrees with `max` over all sixteen combinations.
pub fn worst_of(actual: AlertLevel, predicted: AlertLevel) -> AlertLevel {
    match (actual, predicted) {
        (AlertLevel::Critical, _) => AlertLevel::Critical,
        (AlertLevel::Alert, p) if p != AlertLevel::Critical => AlertLevel::Alert,
        (AlertLevel::Preventive, AlertLevel::Normal) => AlertLevel::Preventive,
        (_, p) => p,
    }
}

pub fn recommendation_for(level: AlertLevel) -> &'static str {
    match level {
        AlertLevel::Normal => "Air quality is acceptable. No special measures are needed.",
        AlertLevel::Preventive => {
            "Sensitive groups should limit prolonged outdoor exertion. Keep monitoring the zone."
        }
        AlertLevel::Alert => {
            "Reduce outdoor activity and vehicle traffic. Authorities should apply emission controls."
        }
        AlertLevel::Critical => {
            "Avoid outdoor activity. Apply emergency measures: restrict traffic and industrial emissions."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_band_ratios() {
        assert_eq!(PREVENTIVE_RATIO, dec("0.80"));
        assert_eq!(CRITICAL_RATIO, dec("1.20"));
    }

    #[test]
    fn test_classify_band_edges() {
        let threshold = dec("100");
        assert_eq!(classify(dec("79.9"), threshold), AlertLevel::Normal);
        assert_eq!(classify(dec("80.0"), threshold), AlertLevel::Preventive);
        assert_eq!(classify(dec("99.9"), threshold), AlertLevel::Preventive);
        assert_eq!(classify(dec("100.0"), threshold), AlertLevel::Alert);
        assert_eq!(classify(dec("119.9"), threshold), AlertLevel::Alert);
        assert_eq!(classify(dec("120.0"), threshold), AlertLevel::Critical);
    }

    #[test]
    fn test_classify_pm25_threshold() {
        let threshold = dec("15.0");
        assert_eq!(classify(dec("11.9"), threshold), AlertLevel::Normal);
        assert_eq!(classify(dec("12.0"), threshold), AlertLevel::Preventive);
        assert_eq!(classify(dec("18.0"), threshold), AlertLevel::Critical);
        assert_eq!(classify(dec("50"), threshold), AlertLevel::Critical);
    }

    #[test]
    fn test_levels_are_ordered() {
        assert!(AlertLevel::Normal < AlertLevel::Preventive);
        assert!(AlertLevel::Preventive < AlertLevel::Alert);
        assert!(AlertLevel::Alert < AlertLevel::Critical);
    }

    /// Precedence rules written out independently of `worst_of`
    fn expected_worst(actual: AlertLevel, predicted: AlertLevel) -> AlertLevel {
        use AlertLevel::*;
        if actual == Critical {
            Critical
        } else if actual == Alert && predicted != Critical {
            Alert
        } else if actual == Preventive && predicted == Normal {
            Preventive
        } else {
            predicted
        }
    }

    #[test]
    fn test_worst_of_all_combinations() {
        for actual in AlertLevel::ALL {
            for predicted in AlertLevel::ALL {
                let resolved = worst_of(actual, predicted);
                assert_eq!(resolved, expected_worst(actual, predicted), "{actual} / {predicted}");
                assert_eq!(resolved, actual.max(predicted), "{actual} / {predicted}");
            }
        }
    }

    #[test]
    fn test_worst_of_known_pairs() {
        assert_eq!(worst_of(AlertLevel::Preventive, AlertLevel::Alert), AlertLevel::Alert);
        assert_eq!(worst_of(AlertLevel::Alert, AlertLevel::Normal), AlertLevel::Alert);
        assert_eq!(worst_of(AlertLevel::Alert, AlertLevel::Critical), AlertLevel::Critical);
        assert_eq!(worst_of(AlertLevel::Normal, AlertLevel::Normal), AlertLevel::Normal);
    }

    #[test]
    fn test_recommendations_are_distinct() {
        let messages: std::collections::HashSet<_> =
            AlertLevel::ALL.iter().map(|l| l.recommendation()).collect();
        assert_eq!(messages.len(), 4);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_classify_is_monotonic(a in 0i64..50_000, b in 0i64..50_000, t in 1i64..20_000) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            let threshold = Decimal::new(t, 1);
            prop_assert!(
                classify(Decimal::new(low, 1), threshold) <= classify(Decimal::new(high, 1), threshold)
            );
        }
    }
}
