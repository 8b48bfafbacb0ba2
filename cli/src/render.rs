//! Plain-text views of the panel stores.

use panel::pages::analytics::AnalyticsData;
use panel::pages::dashboard::DashboardData;
use panel::pages::optimization::{OptimizationRule, active_rules};
use panel::state::accounts::AccountsState;
use panel::state::drafts::DraftsState;
use panel::state::published::PublishedState;
use panel::state::trends::{GenerateAction, TrendsState};

const PREVIEW_CHARS: usize = 80;

fn block(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn action_label(action: GenerateAction) -> &'static str {
    match action {
        GenerateAction::Available => "generate",
        GenerateAction::Pending => "pending",
        GenerateAction::Retry => "retry",
        GenerateAction::Used => "used",
    }
}

pub fn trends(state: &TrendsState) -> String {
    if state.items.is_empty() {
        return block(vec!["No trends yet. Run `trends scrape` to fetch the latest.".to_owned()]);
    }

    let mut lines = vec![format!("{:>6}  {:<8}  {:<8}  {:<8}  TITLE", "ID", "HEAT", "PLATFORM", "ACTION")];
    for item in &state.items {
        lines.push(format!(
            "{:>6}  {:<8}  {:<8}  {:<8}  {}",
            item.id,
            item.hot_score,
            item.platform,
            action_label(state.generate_action(item)),
            item.title
        ));
    }

    let pager = &state.pager;
    if pager.total > 0 {
        let prev = if pager.has_prev() { "[prev]" } else { " prev " };
        let next = if pager.has_next() { "[next]" } else { " next " };
        lines.push(format!(
            "{prev} page {} / {} ({} items) {next}",
            pager.page,
            pager.total_pages(),
            pager.total
        ));
    }
    block(lines)
}

pub fn drafts(state: &DraftsState) -> String {
    if state.drafts.is_empty() {
        return block(vec!["Draft box is empty. Generate one from a trend first.".to_owned()]);
    }

    let mut lines = Vec::new();
    for draft in &state.drafts {
        lines.push(format!("#{} [{}] {}", draft.id, draft.status.as_str(), draft.title));
        if let Some(created_at) = &draft.created_at {
            lines.push(format!("    created {created_at}"));
        }
        lines.push(format!("    {}", draft.preview(PREVIEW_CHARS)));
    }
    block(lines)
}

pub fn accounts(state: &AccountsState) -> String {
    if state.accounts.is_empty() {
        return block(vec!["No bound accounts. Run `accounts bind xhs` to add one.".to_owned()]);
    }

    let mut lines = vec![format!(
        "{:>6}  {:<8}  {:<8}  {:<20}  LAST CHECKED",
        "ID", "PLATFORM", "STATUS", "NAME"
    )];
    for account in &state.accounts {
        lines.push(format!(
            "{:>6}  {:<8}  {:<8}  {:<20}  {}",
            account.id,
            account.platform,
            account.status.as_str(),
            account.account_name,
            account.last_checked_at.as_deref().unwrap_or("-")
        ));
    }
    block(lines)
}

pub fn published(state: &PublishedState) -> String {
    let mut lines = vec![format!("Published items ({})", state.count())];
    for item in &state.items {
        let images = match item.image_count() {
            0 => String::new(),
            count => format!(" ({count} images)"),
        };
        lines.push(format!("#{} {}{images}", item.id, item.title));
        lines.push(format!("    {}", item.preview(PREVIEW_CHARS)));
    }
    block(lines)
}

pub fn dashboard(data: &DashboardData) -> String {
    let mut lines = vec![
        format!(
            "Accounts {} ({} active)  Published today {}  Avg engagement {}",
            data.total_accounts, data.active_accounts, data.today_published, data.avg_engagement
        ),
        String::new(),
        "This week".to_owned(),
    ];
    for day in &data.weekly_trend {
        lines.push(format!(
            "  {:<4} published {:>3}  engagement {:>4.1}%  views {:>6}",
            day.date, day.published, day.engagement, day.views
        ));
    }
    lines.push(format!("  total published {}", data.weekly_published()));
    if let Some(peak) = data.peak_day() {
        lines.push(format!("  peak day {} ({} views)", peak.date, peak.views));
    }

    lines.push(String::new());
    lines.push("Top performing".to_owned());
    for top in &data.top_performing {
        lines.push(format!("  {:>3}  {:<8} {}", top.score, top.platform, top.title));
    }

    lines.push(String::new());
    lines.push("Recent activity".to_owned());
    for activity in &data.recent_activity {
        lines.push(format!("  {:<16} {}", activity.time, activity.message));
    }
    block(lines)
}

pub fn analytics(data: &AnalyticsData) -> String {
    let mut lines = vec!["Platform share".to_owned()];
    for share in &data.platform_share {
        lines.push(format!("  {:<8} {:>3}%", share.platform, share.percent));
    }

    lines.push(String::new());
    lines.push("Diagnostic reports".to_owned());
    for report in &data.reports {
        lines.push(format!(
            "  {} score {} ({})  {}",
            report.content_id,
            report.performance_score,
            report.tier().label(),
            report.status
        ));
        let metrics = &report.metrics;
        lines.push(format!(
            "    views {}  ctr {}  retention {}  engagement {}",
            metrics.views, metrics.ctr, metrics.retention_rate, metrics.engagement
        ));
        for issue in &report.issues {
            let at = issue.timestamp.as_deref().map(|ts| format!(" at {ts}")).unwrap_or_default();
            lines.push(format!("    - {}{at}: {}", issue.kind, issue.description));
        }
        lines.push(format!("    next step: {}", report.actionable_insight));
    }
    block(lines)
}

pub fn rules(rules: &[OptimizationRule]) -> String {
    let mut lines = vec![format!("Optimization rules ({} active)", active_rules(rules).len())];
    for rule in rules {
        let state = if rule.active { "on " } else { "off" };
        lines.push(format!("  [{state}] {} {}: {}", rule.version, rule.name, rule.description));
        if let Some(applied) = &rule.last_applied {
            lines.push(format!("        last applied {applied}"));
        }
    }
    block(lines)
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
