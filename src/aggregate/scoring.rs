// src/aggregate/scoring.rs
//! Boost scoring: how many distinct boost rules hit an item.

use crate::aggregate::patterns::PatternSet;
use crate::ingest::types::NewsItem;

/// Count of boost patterns matching the item's title + description.
/// Each pattern contributes at most one point however often it matches.
pub fn boost_score(item: &NewsItem, boosts: &PatternSet) -> usize {
    let text = format!("{} {}", item.title, item.description);
    boosts.count_matching(&text)
}

/// Re-rank by boost score, descending. The sort is stable and keyed on
/// the score alone, so the incoming (recency) order survives as the
/// tie-break among equal scores.
pub fn rank_by_boost(items: &mut [NewsItem], boosts: &PatternSet) {
    items.sort_by_cached_key(|it| std::cmp::Reverse(boost_score(it, boosts)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, description: &str, published_at: &str) -> NewsItem {
        NewsItem {
            source: "Test".into(),
            title: title.into(),
            link: String::new(),
            thumbnail: String::new(),
            description: description.into(),
            published_at: published_at.into(),
        }
    }

    fn boosts(patterns: &[&str]) -> PatternSet {
        let owned: Vec<String> = patterns.iter().map(|s| s.to_string()).collect();
        PatternSet::compile(&owned).expect("compile boost patterns")
    }

    #[test]
    fn repeated_hits_of_one_pattern_score_once() {
        let ps = boosts(&["지원금"]);
        let it = item("지원금 확대, 지원금 신청 방법", "", "");
        assert_eq!(boost_score(&it, &ps), 1);
    }

    #[test]
    fn distinct_patterns_accumulate() {
        let ps = boosts(&["지원금", "육아휴직", "어린이집"]);
        let it = item("육아휴직 급여 인상", "어린이집 지원금 포함", "");
        assert_eq!(boost_score(&it, &ps), 3);
    }

    #[test]
    fn description_participates_in_scoring() {
        let ps = boosts(&["리뷰"]);
        let it = item("신형 모니터 출시", "4K 모니터 리뷰 포함", "");
        assert_eq!(boost_score(&it, &ps), 1);
    }

    #[test]
    fn ties_keep_recency_order() {
        let ps = boosts(&["급등"]);
        let mut items = vec![
            item("a 급등", "", "2025-08-20T00:00:00Z"),
            item("b", "", "2025-08-19T00:00:00Z"),
            item("c", "", "2025-08-18T00:00:00Z"),
            item("d 급등", "", "2025-08-17T00:00:00Z"),
        ];
        rank_by_boost(&mut items, &ps);
        let titles: Vec<_> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["a 급등", "d 급등", "b", "c"]);
    }
}
