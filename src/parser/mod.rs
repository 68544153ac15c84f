mod clock;
mod plan;
mod text;
mod timeline;
mod types;

pub use types::{PlanOption, Route, RouteType, TimelineItem};

use crate::config::Placeholders;
use crate::intent::RequestKind;
use serde::Serialize;

/// Parse plan options from an assistant reply
/// Never fails: falls back to a line scan, then to a single default plan
pub fn parse_plan_options(text: &str) -> Vec<PlanOption> {
    plan::extract_plan_options(text, &Placeholders::default())
}

/// Same as [`parse_plan_options`] with custom placeholder strings
pub fn parse_plan_options_with(text: &str, placeholders: &Placeholders) -> Vec<PlanOption> {
    plan::extract_plan_options(text, placeholders)
}

/// Parse a time-ordered timeline from an assistant reply
pub fn parse_timeline(text: &str) -> Vec<TimelineItem> {
    timeline::extract_timeline(text)
}

/// Both views of one assistant reply
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedReply {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plans: Option<Vec<PlanOption>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Vec<TimelineItem>>,
}

impl ParsedReply {
    /// Run both pipelines
    pub fn from_text(text: &str, placeholders: &Placeholders) -> Self {
        Self {
            plans: Some(parse_plan_options_with(text, placeholders)),
            timeline: Some(parse_timeline(text)),
        }
    }

    /// Run only the pipeline the request asked for.
    /// An empty timeline is treated as "nothing to update".
    pub fn for_request(kind: RequestKind, text: &str, placeholders: &Placeholders) -> Self {
        match kind {
            RequestKind::Timeline => {
                let timeline = parse_timeline(text);
                Self {
                    plans: None,
                    timeline: (!timeline.is_empty()).then_some(timeline),
                }
            }
            RequestKind::Plans => Self {
                plans: Some(parse_plan_options_with(text, placeholders)),
                timeline: None,
            },
            RequestKind::Chat => Self::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_none() && self.timeline.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPLY: &str = "方案1: 湖边骑行\n优点: 空气好\n缺点: 易晒\n\n09:00 出发\n路线：公交 - 乘坐K7路\n11:00 到达";

    #[test]
    fn test_from_text_runs_both_pipelines() {
        let reply = ParsedReply::from_text(REPLY, &Placeholders::default());

        let plans = reply.plans.unwrap();
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].name, "湖边骑行");

        let timeline = reply.timeline.unwrap();
        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline[0].route.as_ref().unwrap().route_type, RouteType::Bus);
    }

    #[test]
    fn test_for_request_selects_pipeline() {
        let placeholders = Placeholders::default();

        let reply = ParsedReply::for_request(RequestKind::Timeline, REPLY, &placeholders);
        assert!(reply.plans.is_none());
        assert_eq!(reply.timeline.unwrap().len(), 2);

        let reply = ParsedReply::for_request(RequestKind::Plans, REPLY, &placeholders);
        assert!(reply.timeline.is_none());
        assert!(reply.plans.is_some());

        assert!(ParsedReply::for_request(RequestKind::Chat, REPLY, &placeholders).is_empty());
    }

    #[test]
    fn test_for_request_empty_timeline_is_no_update() {
        let reply = ParsedReply::for_request(
            RequestKind::Timeline,
            "没有具体时间",
            &Placeholders::default(),
        );
        assert!(reply.is_empty());
    }

    #[test]
    fn test_parsing_is_repeatable() {
        assert_eq!(parse_plan_options(REPLY), parse_plan_options(REPLY));
        assert_eq!(parse_timeline(REPLY), parse_timeline(REPLY));
    }
}
