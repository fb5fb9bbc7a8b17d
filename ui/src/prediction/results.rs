//! Ranked result rendering.

use api::RankedCrop;
use dioxus::prelude::*;

use crate::core::format;
use crate::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankTier {
    Gold,
    Silver,
    Bronze,
    Standard,
}

impl RankTier {
    /// `index` is zero-based.
    pub fn for_index(index: usize) -> Self {
        match index {
            0 => RankTier::Gold,
            1 => RankTier::Silver,
            2 => RankTier::Bronze,
            _ => RankTier::Standard,
        }
    }

    pub fn badge(self, rank: usize) -> String {
        match self {
            RankTier::Gold => "🥇".to_string(),
            RankTier::Silver => "🥈".to_string(),
            RankTier::Bronze => "🥉".to_string(),
            RankTier::Standard => format!("#{rank}"),
        }
    }

    pub fn css_modifier(self) -> &'static str {
        match self {
            RankTier::Gold => "crop-result--gold",
            RankTier::Silver => "crop-result--silver",
            RankTier::Bronze => "crop-result--bronze",
            RankTier::Standard => "crop-result--standard",
        }
    }
}

/// Display-ready row.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    /// One-based.
    pub rank: usize,
    pub crop: String,
    pub tier: RankTier,
    pub badge: String,
    /// `"88%"`, absent for bare-name entries.
    pub confidence: Option<String>,
    pub bar_style: Option<String>,
}

pub fn result_rows(crops: &[RankedCrop]) -> Vec<ResultRow> {
    crops
        .iter()
        .enumerate()
        .map(|(index, crop)| {
            let tier = RankTier::for_index(index);
            let rank = index + 1;
            ResultRow {
                rank,
                crop: crop.crop.clone(),
                tier,
                badge: tier.badge(rank),
                confidence: crop.confidence.map(format::format_percent),
                bar_style: crop.confidence.map(format::bar_width),
            }
        })
        .collect()
}

#[component]
pub fn PredictionResults(crops: Vec<RankedCrop>) -> Element {
    crate::i18n::use_language();
    let rows = result_rows(&crops);
    let best = rows.first().cloned();

    rsx! {
        section { class: "prediction-results",
            h3 { class: "prediction-results__title", {t!("results-title")} }
            p { class: "prediction-results__subtitle", {t!("results-subtitle")} }

            ol { class: "prediction-results__list",
                for row in rows.into_iter() {
                    li {
                        key: "{row.rank}",
                        class: format!("crop-result {}", row.tier.css_modifier()),
                        span { class: "crop-result__badge", "{row.badge}" }
                        div { class: "crop-result__info",
                            strong { class: "crop-result__name", "{row.crop}" }
                            span { class: "crop-result__caption", {t!("results-match-score")} }
                        }
                        if let (Some(confidence), Some(bar)) = (row.confidence.clone(), row.bar_style.clone()) {
                            div { class: "crop-result__score",
                                span { class: "crop-result__percent", "{confidence}" }
                                div { class: "crop-result__track",
                                    div { class: "crop-result__fill", style: "{bar}" }
                                }
                            }
                        }
                    }
                }
            }

            if let Some(best) = best {
                div { class: "prediction-results__summary",
                    span { class: "prediction-results__summary-icon", "💡" }
                    div {
                        strong { {t!("results-best-choice", crop = best.crop.clone())} }
                        if let Some(confidence) = best.confidence.clone() {
                            p { {t!("results-best-detail", crop = best.crop.clone(), confidence = confidence)} }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_result_renders_one_row_with_percent() {
        let rows = result_rows(&[RankedCrop::new("Rice", 88.0)]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].crop, "Rice");
        assert_eq!(rows[0].confidence.as_deref(), Some("88%"));
        assert_eq!(rows[0].badge, "🥇");
    }

    #[test]
    fn medals_for_top_three_then_numbers() {
        let crops: Vec<RankedCrop> = ["Rice", "Maize", "Cotton", "Jute", "Millet"]
            .iter()
            .enumerate()
            .map(|(i, name)| RankedCrop::new(*name, 90.0 - i as f64 * 10.0))
            .collect();
        let badges: Vec<String> = result_rows(&crops).into_iter().map(|r| r.badge).collect();
        assert_eq!(badges, vec!["🥇", "🥈", "🥉", "#4", "#5"]);
    }

    #[test]
    fn bare_names_have_no_score() {
        let rows = result_rows(&[RankedCrop {
            crop: "Banana".into(),
            confidence: None,
        }]);
        assert_eq!(rows[0].confidence, None);
        assert_eq!(rows[0].bar_style, None);
        assert_eq!(rows[0].tier, RankTier::Gold);
    }

    #[test]
    fn server_order_is_kept() {
        let rows = result_rows(&[RankedCrop::new("Low", 10.0), RankedCrop::new("High", 95.0)]);
        assert_eq!(rows[0].crop, "Low");
        assert_eq!(rows[1].rank, 2);
    }
}
