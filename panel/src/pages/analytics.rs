#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use serde::Serialize;

/// Performance band for a diagnostic score (0-100).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreTier {
    #[must_use]
    pub fn from_score(score: u32) -> Self {
        match score {
            80.. => Self::Excellent,
            60..=79 => Self::Good,
            40..=59 => Self::Fair,
            _ => Self::Poor,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContentMetrics {
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub ctr: String,
    pub retention_rate: String,
    pub engagement: String,
    pub publish_time: String,
    pub fetch_time: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DiagnosticIssue {
    pub kind: String,
    pub timestamp: Option<String>,
    pub reason: Option<String>,
    pub description: String,
}

/// AI diagnosis of one published item's performance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DiagnosticReport {
    pub id: String,
    pub content_id: String,
    pub performance_score: u32,
    pub metrics: ContentMetrics,
    pub status: String,
    pub issues: Vec<DiagnosticIssue>,
    pub actionable_insight: String,
    pub report_time: String,
}

impl DiagnosticReport {
    #[must_use]
    pub fn tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.performance_score)
    }
}

/// Share of published volume per platform, in percent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlatformShare {
    pub platform: String,
    pub percent: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnalyticsData {
    pub platform_share: Vec<PlatformShare>,
    pub reports: Vec<DiagnosticReport>,
}

impl AnalyticsData {
    /// Static sample shown until diagnostics are served by the backend.
    #[must_use]
    pub fn sample() -> Self {
        let share = [("douyin", 45), ("xhs", 30), ("zhihu", 15), ("weibo", 10)];
        let metrics = ContentMetrics {
            views: 15_000,
            likes: 450,
            comments: 89,
            shares: 34,
            ctr: "8.5%".into(),
            retention_rate: "65%".into(),
            engagement: "3.8%".into(),
            publish_time: "2024-01-15 10:00".into(),
            fetch_time: "2024-01-16 10:00".into(),
        };

        Self {
            platform_share: share
                .iter()
                .map(|&(platform, percent)| PlatformShare { platform: platform.to_owned(), percent })
                .collect(),
            reports: vec![DiagnosticReport {
                id: "1".into(),
                content_id: "video_001".into(),
                performance_score: 45,
                metrics,
                status: "High_Click_Low_Retention".into(),
                issues: vec![
                    DiagnosticIssue {
                        kind: "retention_drop".into(),
                        timestamp: Some("00:03".into()),
                        reason: Some("Audio_Silence".into()),
                        description: "2 seconds of silence at 0:03 loses viewers".into(),
                    },
                    DiagnosticIssue {
                        kind: "sentiment_negative".into(),
                        timestamp: None,
                        reason: None,
                        description: "Comments report the audio is too quiet".into(),
                    },
                ],
                actionable_insight: "Audio_Volume_Boost_Required".into(),
                report_time: "2024-01-16 10:00".into(),
            }],
        }
    }
}
