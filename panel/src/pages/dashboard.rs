#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use serde::Serialize;

/// Overview numbers shown on the dashboard page.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DashboardData {
    pub total_accounts: u32,
    pub active_accounts: u32,
    pub today_published: u32,
    pub avg_engagement: String,
    pub weekly_trend: Vec<DayStats>,
    pub top_performing: Vec<TopContent>,
    pub recent_activity: Vec<Activity>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DayStats {
    pub date: String,
    pub published: u32,
    pub engagement: f64,
    pub views: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TopContent {
    pub content_id: String,
    pub title: String,
    pub platform: String,
    pub score: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Publish,
    Optimize,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub id: String,
    pub kind: ActivityKind,
    pub message: String,
    pub time: String,
}

impl DashboardData {
    /// Static sample shown until analytics are wired to the backend.
    #[must_use]
    pub fn sample() -> Self {
        let week: [(&str, u32, f64, u64); 7] = [
            ("Mon", 20, 4.2, 15_000),
            ("Tue", 22, 4.5, 18_000),
            ("Wed", 18, 3.8, 12_000),
            ("Thu", 25, 5.1, 22_000),
            ("Fri", 30, 5.8, 28_000),
            ("Sat", 24, 4.8, 24_000),
            ("Sun", 24, 4.8, 20_000),
        ];
        let top: [(&str, &str, &str, u32); 3] = [
            ("001", "AI office productivity tricks", "xhs", 95),
            ("002", "DeepSeek in-depth review", "douyin", 88),
            ("003", "Metaverse marketing playbook", "zhihu", 82),
        ];
        let activity = [
            ("1", ActivityKind::Publish, "Published content to a douyin account", "2 minutes ago"),
            ("2", ActivityKind::Optimize, "Auto-tuned the video generation prompt", "15 minutes ago"),
            ("3", ActivityKind::Error, "xhs account token needs refreshing", "1 hour ago"),
            ("4", ActivityKind::Publish, "Batch-published 5 items across platforms", "2 hours ago"),
        ];

        Self {
            total_accounts: 12,
            active_accounts: 10,
            today_published: 24,
            avg_engagement: "4.8%".to_owned(),
            weekly_trend: week
                .iter()
                .map(|&(date, published, engagement, views)| DayStats {
                    date: date.to_owned(),
                    published,
                    engagement,
                    views,
                })
                .collect(),
            top_performing: top
                .iter()
                .map(|&(id, title, platform, score)| TopContent {
                    content_id: id.to_owned(),
                    title: title.to_owned(),
                    platform: platform.to_owned(),
                    score,
                })
                .collect(),
            recent_activity: activity
                .iter()
                .map(|&(id, kind, message, time)| Activity {
                    id: id.to_owned(),
                    kind,
                    message: message.to_owned(),
                    time: time.to_owned(),
                })
                .collect(),
        }
    }

    /// Total items published over the weekly window.
    #[must_use]
    pub fn weekly_published(&self) -> u32 {
        self.weekly_trend.iter().map(|day| day.published).sum()
    }

    /// Day with the most views, if any.
    #[must_use]
    pub fn peak_day(&self) -> Option<&DayStats> {
        self.weekly_trend.iter().max_by_key(|day| day.views)
    }
}
