use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One named alternative with its advantages and disadvantages
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct PlanOption {
    pub id: String,

    pub name: String,

    pub pros: Vec<String>,

    pub cons: Vec<String>,
}

impl PlanOption {
    pub(crate) fn new(index: usize, name: String, pros: Vec<String>, cons: Vec<String>) -> Self {
        Self {
            id: format!("plan-{}", index + 1),
            name,
            pros,
            cons,
        }
    }
}

/// One scheduled activity
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct TimelineItem {
    pub id: String,

    /// Zero-padded 24-hour `HH:MM`
    pub time: String,

    pub action: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<Route>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct Route {
    #[serde(rename = "type")]
    pub route_type: RouteType,

    pub description: String,
}

/// Transportation mode, serialized with the tag the assistant writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
pub enum RouteType {
    #[serde(rename = "公交")]
    Bus,
    #[serde(rename = "地铁")]
    Metro,
    #[serde(rename = "驾驶")]
    Drive,
    #[serde(rename = "步行")]
    Walk,
}

impl RouteType {
    pub fn tag(&self) -> &'static str {
        match self {
            RouteType::Bus => "公交",
            RouteType::Metro => "地铁",
            RouteType::Drive => "驾驶",
            RouteType::Walk => "步行",
        }
    }
}

impl std::fmt::Display for RouteType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl std::str::FromStr for RouteType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "公交" | "bus" => Ok(RouteType::Bus),
            "地铁" | "metro" | "subway" => Ok(RouteType::Metro),
            "驾驶" | "drive" | "car" => Ok(RouteType::Drive),
            "步行" | "walk" => Ok(RouteType::Walk),
            _ => Err(format!("Unknown route type: {}", s)),
        }
    }
}
