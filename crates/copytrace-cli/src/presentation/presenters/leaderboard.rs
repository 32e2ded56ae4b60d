use copytrace_engine::LeaderboardView;
use copytrace_types::{AnalysisResponse, TierScheme};

use crate::presentation::view_models::{
    CommandResultViewModel, DistributionViewModel, Guidance, LeaderboardRowViewModel,
    LeaderboardViewModel, ProgressStepViewModel, SortViewModel, StatusBadge, TierShareViewModel,
};

pub const EMPTY_LEADERBOARD_MESSAGE: &str = "No copy traders found that meet the criteria";

/// Leaderboard for a stored result.
pub fn present_leaderboard(
    view: LeaderboardView,
    scheme: TierScheme,
    response: &AnalysisResponse,
) -> CommandResultViewModel<LeaderboardViewModel> {
    let content = build_content(view, scheme, response);

    let mut result = CommandResultViewModel::new(content);
    result = with_badge(result);
    with_suggestions(result)
}

/// Leaderboard right after a fresh analysis; carries the backend's step report.
pub fn present_analysis(
    view: LeaderboardView,
    scheme: TierScheme,
    response: &AnalysisResponse,
) -> CommandResultViewModel<LeaderboardViewModel> {
    let mut content = build_content(view, scheme, response);
    content.progress = response
        .progress
        .iter()
        .map(|(step, status)| ProgressStepViewModel {
            step: step.clone(),
            status: *status,
        })
        .collect();
    content.current_step = response.current_step.clone();
    content.next_step = response.next_step.clone();

    let mut result = CommandResultViewModel::new(content);
    result = with_badge(result);
    with_suggestions(result)
}

fn build_content(
    view: LeaderboardView,
    scheme: TierScheme,
    response: &AnalysisResponse,
) -> LeaderboardViewModel {
    let rows = view
        .rows
        .into_iter()
        .map(|ranked| {
            let record = ranked.record;
            LeaderboardRowViewModel {
                rank: ranked.rank,
                tier_label: scheme.label(record.tier).to_string(),
                address: record.address,
                tier: record.tier,
                score: record.score,
                hits: record.hits,
                breadth: record.breadth,
                avg_delay: record.avg_delay,
                median_delay: record.median_delay,
                freq_norm: record.freq_norm,
                speed_norm: record.speed_norm,
                breadth_norm: record.breadth_norm,
            }
        })
        .collect();

    let distribution = DistributionViewModel {
        high: view.distribution.high,
        medium: view.distribution.medium,
        low: view.distribution.low,
        unknown: view.distribution.unknown,
        total: view.distribution.total(),
        likely_copy_traders: view.distribution.likely_copy_traders(),
        copy_rate: view.copy_rate,
        tiers: view
            .distribution
            .iter()
            .map(|(tier, count)| TierShareViewModel {
                tier,
                count,
                percent: view.distribution.percentage(tier),
            })
            .collect(),
    };

    LeaderboardViewModel {
        reference_wallet: view.reference_wallet,
        rows,
        distribution,
        page: view.page,
        sort: SortViewModel {
            field: view.state.sort_field,
            direction: view.state.sort_direction,
        },
        scheme,
        analyzed_at: response
            .data
            .as_ref()
            .and_then(|data| data.analysis_timestamp.clone()),
        progress: Vec::new(),
        current_step: None,
        next_step: None,
    }
}

fn with_badge(
    result: CommandResultViewModel<LeaderboardViewModel>,
) -> CommandResultViewModel<LeaderboardViewModel> {
    let total = result.content.distribution.total;
    if total == 0 {
        return result.with_badge(StatusBadge::info(EMPTY_LEADERBOARD_MESSAGE));
    }

    let likely = result.content.distribution.likely_copy_traders;
    let badge = if likely > 0 {
        StatusBadge::success(format!(
            "{} copy traders found, {} likely",
            total, likely
        ))
    } else {
        StatusBadge::warning(format!(
            "{} followers found, none above the medium threshold",
            total
        ))
    };
    result.with_badge(badge)
}

fn with_suggestions(
    mut result: CommandResultViewModel<LeaderboardViewModel>,
) -> CommandResultViewModel<LeaderboardViewModel> {
    let content = &result.content;
    if content.is_empty() {
        return result;
    }

    let mut tips = Vec::new();
    if content.page.has_next {
        tips.push(Guidance::new("Next page").with_command(format!(
            "copytrace results --sort {} --direction {} --page {}",
            content.sort.field,
            content.sort.direction,
            content.page.page + 1
        )));
    }
    if let Some(top) = content.rows.first() {
        tips.push(
            Guidance::new("Inspect the copied trades of a follower").with_command(format!(
                "copytrace transactions {} {}",
                content.reference_wallet, top.address
            )),
        );
    }
    tips.push(Guidance::new("Browse interactively").with_command("copytrace browse"));

    result.suggestions.extend(tips);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use copytrace_engine::{ViewController, ViewOptions};
    use copytrace_testing::fixtures::{LEADER_WALLET, error_response, success_response};
    use copytrace_types::Tier;

    fn ready(scores: &[f64]) -> (ViewController, AnalysisResponse) {
        let response = success_response(LEADER_WALLET, scores);
        let controller = ViewController::from_persisted(&response, ViewOptions::default());
        (controller, response)
    }

    #[test]
    fn test_rows_carry_rank_and_scheme_label() {
        let (controller, response) = ready(&[0.2, 0.9, 0.6]);
        let view = controller.view().unwrap();

        let result = present_leaderboard(view, TierScheme::Legacy, &response);
        let rows = &result.content.rows;

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].tier_label, "Gold");
        assert_eq!(rows[1].tier_label, "Silver");
        assert_eq!(rows[2].tier_label, "Unranked");
        assert_eq!(result.content.distribution.likely_copy_traders, 2);
        assert!(result.content.progress.is_empty());
    }

    #[test]
    fn test_distribution_lists_every_tier_share() {
        let (controller, response) = ready(&[0.2, 0.9, 0.6, 0.8]);
        let view = controller.view().unwrap();

        let result = present_leaderboard(view, TierScheme::Confidence, &response);
        let shares: Vec<(Tier, usize, f64)> = result
            .content
            .distribution
            .tiers
            .iter()
            .map(|share| (share.tier, share.count, share.percent))
            .collect();

        assert_eq!(
            shares,
            [
                (Tier::High, 2, 50.0),
                (Tier::Medium, 1, 25.0),
                (Tier::Low, 0, 0.0),
                (Tier::Unknown, 1, 25.0),
            ]
        );
    }

    #[test]
    fn test_analysis_includes_progress_steps() {
        let (controller, response) = ready(&[0.8]);
        let view = controller.view().unwrap();

        let result = present_analysis(view, TierScheme::Confidence, &response);

        assert_eq!(result.content.progress.len(), response.progress.len());
        assert!(result.content.analyzed_at.is_some());
    }

    #[test]
    fn test_empty_result_has_info_badge_and_no_tips() {
        let (controller, response) = ready(&[]);
        let view = controller.view().unwrap();

        let result = present_leaderboard(view, TierScheme::Confidence, &response);

        let badge = result.badge.unwrap();
        assert_eq!(badge.label, EMPTY_LEADERBOARD_MESSAGE);
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_next_page_tip_only_when_more_pages() {
        let scores: Vec<f64> = (0..150).map(|i| i as f64 / 150.0).collect();
        let (controller, response) = ready(&scores);
        let view = controller.view().unwrap();

        let result = present_leaderboard(view, TierScheme::Confidence, &response);
        let commands: Vec<_> = result
            .suggestions
            .iter()
            .filter_map(|tip| tip.command.clone())
            .collect();
        assert!(commands.contains(
            &"copytrace results --sort score --direction desc --page 2".to_string()
        ));

        let (mut controller, response) = ready(&scores);
        controller.go_to_page(2);
        let view = controller.view().unwrap();
        let result = present_leaderboard(view, TierScheme::Confidence, &response);
        assert!(
            result
                .suggestions
                .iter()
                .all(|tip| tip.description != "Next page")
        );
        insta::assert_json_snapshot!(result.content.page, @r#"
        {
          "page": 2,
          "page_size": 100,
          "total_pages": 2,
          "total_items": 150,
          "start_index": 100,
          "end_index": 150,
          "has_previous": true,
          "has_next": false
        }
        "#);
    }

    #[test]
    fn test_failed_payload_has_no_view() {
        let response = error_response("boom");
        let controller = ViewController::from_persisted(&response, ViewOptions::default());
        assert!(controller.view().is_none());
    }
}
