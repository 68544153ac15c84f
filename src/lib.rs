//! Best-effort parsing of assistant replies into plan options and timelines.
//!
//! ```
//! let plans = planparse::parse_plan_options("方案1: 湖边骑行\n优点: 空气好\n缺点: 易晒");
//! assert_eq!(plans[0].name, "湖边骑行");
//!
//! let timeline = planparse::parse_timeline("下午3点 游泳");
//! assert_eq!(timeline[0].time, "15:00");
//! ```

pub mod config;
pub mod error;
pub mod intent;
pub mod output;
pub mod parser;

pub use intent::{classify_request, RequestKind};
pub use parser::{
    parse_plan_options, parse_plan_options_with, parse_timeline, ParsedReply, PlanOption, Route,
    RouteType, TimelineItem,
};
