use crate::config::{OutputConfig, OutputFormat};
use crate::error::OutputError;
use crate::parser::{ParsedReply, PlanOption, TimelineItem};
use std::fs;
use std::path::Path;

/// Render a parsed reply in the configured format
pub fn render(reply: &ParsedReply, output: &OutputConfig) -> Result<String, OutputError> {
    match output.format {
        OutputFormat::Json if output.pretty => Ok(serde_json::to_string_pretty(reply)?),
        OutputFormat::Json => Ok(serde_json::to_string(reply)?),
        OutputFormat::Markdown => Ok(render_markdown(reply)),
    }
}

pub fn render_markdown(reply: &ParsedReply) -> String {
    let mut content = String::new();

    if let Some(plans) = &reply.plans {
        content.push_str("# 方案\n\n");
        push_plans(&mut content, plans);
    }

    if let Some(timeline) = &reply.timeline {
        if !content.is_empty() {
            content.push_str("---\n\n");
        }
        content.push_str("# 时间线\n\n");
        push_timeline(&mut content, timeline);
    }

    if content.is_empty() {
        content.push_str("*Nothing to parse*\n");
    }

    content
}

fn push_plans(content: &mut String, plans: &[PlanOption]) {
    for plan in plans {
        content.push_str(&format!("## {}\n\n", plan.name));

        content.push_str("**优点:**\n");
        for pro in &plan.pros {
            content.push_str(&format!("- {}\n", pro));
        }
        content.push('\n');

        content.push_str("**缺点:**\n");
        for con in &plan.cons {
            content.push_str(&format!("- {}\n", con));
        }
        content.push('\n');
    }
}

fn push_timeline(content: &mut String, timeline: &[TimelineItem]) {
    if timeline.is_empty() {
        content.push_str("*No timeline entries*\n");
        return;
    }

    content.push_str("| 时间 | 行动 | 路线 |\n");
    content.push_str("|------|------|------|\n");
    for item in timeline {
        let route = item
            .route
            .as_ref()
            .map(|r| format!("{}：{}", r.route_type, r.description))
            .unwrap_or_default();
        content.push_str(&format!(
            "| {} | {} | {} |\n",
            item.time,
            escape_cell(&item.action),
            escape_cell(&route)
        ));
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Write rendered output, creating the parent directory if needed
pub fn write_output(path: &Path, content: &str) -> Result<(), OutputError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(OutputError::CreateDir)?;
    }
    fs::write(path, content).map_err(OutputError::Write)
}
