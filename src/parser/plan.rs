//! Plan option extraction
//!
//! Escalates through three tiers:
//! 1. header strategies (`方案1: 名称` and friends) with per-block pros/cons
//! 2. a line-by-line scan with looser labels
//! 3. a synthetic default plan

use super::text::{first_capture, is_match, non_empty_lines, normalize_newlines, split_items};
use super::types::PlanOption;
use crate::config::Placeholders;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// A header grammar; capture group 1 is the plan name
struct HeaderStrategy {
    label: &'static str,
    pattern: Regex,
}

static HEADER_STRATEGIES: LazyLock<Vec<HeaderStrategy>> = LazyLock::new(|| {
    [
        ("labeled-ordinal", r"方案[一二三四五六七八九十\d]+[:：][ \t\u{3000}]*([^\n]*)"),
        ("bare-numbered", r"方案\s*[1-5][:：][ \t\u{3000}]*([^\n]*)"),
        ("generic-line", r"(?m)^([^\n]+方案[^\n]*)$"),
        (
            "synonym-numbered",
            r"(?m)^(?:方案|选项)\s*[1-5][:：][ \t\u{3000}]*([^\n]*)",
        ),
    ]
    .into_iter()
    .filter_map(|(label, pattern)| {
        Regex::new(pattern)
            .ok()
            .map(|pattern| HeaderStrategy { label, pattern })
    })
    .collect()
});

// Labels inside a plan block. The body may be empty when the items start on
// the next line.
static PROS_LABEL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"优点[:：][ \t\u{3000}]*([^\n]*)").ok());
static CONS_LABEL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"缺点[:：][ \t\u{3000}]*([^\n]*)").ok());

const PROS_STOPS: [&str; 2] = ["缺点", "方案"];
const CONS_STOPS: [&str; 2] = ["方案", "优点"];

// Line-scan fallback
static LOOSE_BOUNDARY: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(?:方案|选项)[\s\d一二三四五六七八九十]+[:：]").ok());
static NAME_AFTER_SEPARATOR: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[:：]\s*(.+)").ok());
static LOOSE_PROS: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(?:[-*•]\s*)?(?:优点|优势)[:：]\s*(.*)$").ok());
static LOOSE_CONS: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(?:[-*•]\s*)?(?:缺点|劣势|不足)[:：]\s*(.*)$").ok());

/// A recognized header and the block of text it introduces
struct PlanBlock<'t> {
    name: &'t str,
    segment: &'t str,
}

/// Parse plan options; always returns at least one option
pub fn extract_plan_options(text: &str, placeholders: &Placeholders) -> Vec<PlanOption> {
    let text = normalize_newlines(text);

    let mut options = match find_blocks(&text) {
        Some(blocks) if !blocks.is_empty() => blocks
            .into_iter()
            .enumerate()
            .map(|(index, block)| build_option(index, &block, placeholders))
            .collect(),
        _ => {
            debug!("No named plan headers found, falling back to line scan");
            scan_lines(&text, placeholders)
        }
    };

    if options.is_empty() {
        warn!("Could not parse plan options from response, using default plan");
        options.push(default_option(placeholders));
    }

    options
}

/// Run header strategies in order; the first one with any match decides the blocks
fn find_blocks(text: &str) -> Option<Vec<PlanBlock<'_>>> {
    for strategy in HEADER_STRATEGIES.iter() {
        let hits: Vec<(usize, regex::Match<'_>)> = strategy
            .pattern
            .captures_iter(text)
            .filter_map(|caps| Some((caps.get(0)?.start(), caps.get(1)?)))
            .collect();

        if hits.is_empty() {
            continue;
        }

        debug!(
            "Plan header strategy '{}' matched {} headers",
            strategy.label,
            hits.len()
        );

        let blocks = hits
            .iter()
            .enumerate()
            .filter_map(|(i, (_, name))| {
                let end = hits.get(i + 1).map_or(text.len(), |(start, _)| *start);
                let trimmed = name.as_str().trim();
                if trimmed.is_empty() {
                    debug!("Skipping plan header with empty name");
                    return None;
                }
                Some(PlanBlock {
                    name: trimmed,
                    segment: &text[name.start()..end],
                })
            })
            .collect();

        return Some(blocks);
    }

    None
}

fn build_option(index: usize, block: &PlanBlock<'_>, placeholders: &Placeholders) -> PlanOption {
    let pros = labeled_run(block.segment, &PROS_LABEL, &PROS_STOPS);
    let cons = labeled_run(block.segment, &CONS_LABEL, &CONS_STOPS);

    PlanOption::new(
        index,
        block.name.to_string(),
        or_placeholder(pros, &placeholders.no_pros),
        or_placeholder(cons, &placeholders.no_cons),
    )
}

/// Items of a labeled run: the label line plus following non-blank lines,
/// up to a line starting with one of `stops`. Blank lines right after an
/// empty label are skipped.
fn labeled_run(segment: &str, label: &Option<Regex>, stops: &[&str]) -> Vec<String> {
    let Some(first) = label
        .as_ref()
        .and_then(|re| re.captures(segment))
        .and_then(|caps| caps.get(1))
    else {
        return Vec::new();
    };

    let mut run = first.as_str().to_string();
    let mut started = !run.trim().is_empty();
    for line in segment[first.end()..].split('\n').skip(1) {
        let line = line.trim();
        if line.is_empty() {
            if started {
                break;
            }
            continue;
        }
        if stops.iter().any(|stop| line.starts_with(stop)) {
            break;
        }
        started = true;
        run.push('\n');
        run.push_str(line);
    }

    split_items(&run)
}

#[derive(Debug, Default)]
struct OpenPlan {
    name: String,
    pros: Vec<String>,
    cons: Vec<String>,
}

impl OpenPlan {
    fn finish(self, index: usize, placeholders: &Placeholders) -> PlanOption {
        PlanOption::new(
            index,
            self.name,
            or_placeholder(self.pros, &placeholders.no_pros),
            or_placeholder(self.cons, &placeholders.no_cons),
        )
    }
}

/// Looser pass used when no header strategy produced a named plan
fn scan_lines(text: &str, placeholders: &Placeholders) -> Vec<PlanOption> {
    let mut options = Vec::new();
    let mut open: Option<OpenPlan> = None;

    for line in non_empty_lines(text) {
        if is_match(&LOOSE_BOUNDARY, line) {
            if let Some(plan) = open.take() {
                options.push(plan.finish(options.len(), placeholders));
            }
            let name = first_capture(&NAME_AFTER_SEPARATOR, line)
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| line.trim_end_matches([':', '：']).trim());
            open = Some(OpenPlan {
                name: name.to_string(),
                ..OpenPlan::default()
            });
            continue;
        }

        let Some(plan) = open.as_mut() else {
            continue;
        };

        if let Some(body) = first_capture(&LOOSE_PROS, line) {
            plan.pros.extend(split_items(body));
        } else if let Some(body) = first_capture(&LOOSE_CONS, line) {
            plan.cons.extend(split_items(body));
        }
    }

    if let Some(plan) = open {
        options.push(plan.finish(options.len(), placeholders));
    }

    options
}

fn or_placeholder(items: Vec<String>, placeholder: &str) -> Vec<String> {
    if items.is_empty() {
        vec![placeholder.to_string()]
    } else {
        items
    }
}

fn default_option(placeholders: &Placeholders) -> PlanOption {
    PlanOption::new(
        0,
        placeholders.default_plan_name.clone(),
        vec![placeholders.default_plan_pros.clone()],
        vec![placeholders.default_plan_cons.clone()],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Vec<PlanOption> {
        extract_plan_options(text, &Placeholders::default())
    }

    #[test]
    fn test_numbered_plans_with_pros_and_cons() {
        let text = "方案1: 湖边骑行\n优点: 空气好，风景佳，成本低\n缺点: 易晒，人多\n\n方案2: 室内攀岩\n优点: 不受天气影响，挑战性强\n缺点: 门票贵";
        let plans = parse(text);

        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].id, "plan-1");
        assert_eq!(plans[0].name, "湖边骑行");
        assert_eq!(plans[0].pros, vec!["空气好", "风景佳", "成本低"]);
        assert_eq!(plans[0].cons, vec!["易晒", "人多"]);
        assert_eq!(plans[1].id, "plan-2");
        assert_eq!(plans[1].name, "室内攀岩");
        assert_eq!(plans[1].pros.len(), 2);
        assert_eq!(plans[1].cons, vec!["门票贵"]);
    }

    #[test]
    fn test_cjk_ordinals_and_full_width_colon() {
        let text = "方案一：博物馆\n优点：文化氛围浓\n缺点：周末人多\n方案二：郊野徒步\n优点：锻炼身体";
        let plans = parse(text);

        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].name, "博物馆");
        assert_eq!(plans[0].pros, vec!["文化氛围浓"]);
        assert_eq!(plans[1].name, "郊野徒步");
        assert_eq!(plans[1].cons, vec!["暂无缺点信息"]);
    }

    #[test]
    fn test_multiline_pros_run_until_cons() {
        let text = "方案1: 露营\n优点:\n- 亲近自然\n- 适合家庭\n缺点: 装备多\n天气不稳定";
        let plans = parse(text);

        assert_eq!(plans[0].pros, vec!["亲近自然", "适合家庭"]);
        assert_eq!(plans[0].cons, vec!["装备多", "天气不稳定"]);
    }

    #[test]
    fn test_empty_pros_label_does_not_swallow_cons() {
        let text = "方案1: 看展\n优点:\n缺点: 门票贵";
        let plans = parse(text);

        assert_eq!(plans[0].pros, vec!["暂无优点信息"]);
        assert_eq!(plans[0].cons, vec!["门票贵"]);
    }

    #[test]
    fn test_blank_line_after_empty_label_is_skipped() {
        let text = "方案1: 露营\n优点:\n\n- 亲近自然\n- 适合家庭\n\n缺点:\n\n缺点太多";
        let plans = parse(text);

        assert_eq!(plans[0].pros, vec!["亲近自然", "适合家庭"]);
        assert_eq!(plans[0].cons, vec!["缺点太多"]);
    }

    #[test]
    fn test_header_name_does_not_cross_lines() {
        let text = "方案1：\n优点: 便宜\n缺点: 远\n方案2：\n优点: 近";
        let plans = parse(text);

        let names: Vec<_> = plans.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["方案1", "方案2"]);
        assert_eq!(plans[0].pros, vec!["便宜"]);
        assert_eq!(plans[0].cons, vec!["远"]);
        assert_eq!(plans[1].pros, vec!["近"]);
    }

    #[test]
    fn test_unnamed_header_drops_its_block() {
        let text = "方案1：\n优点: 便宜\n方案2： 郊游\n优点: 近";
        let plans = parse(text);

        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].id, "plan-1");
        assert_eq!(plans[0].name, "郊游");
        assert_eq!(plans[0].pros, vec!["近"]);
    }

    #[test]
    fn test_header_without_pros_cons_gets_placeholders() {
        let plans = parse("方案1: 在家休息");

        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].pros, vec!["暂无优点信息"]);
        assert_eq!(plans[0].cons, vec!["暂无缺点信息"]);
    }

    #[test]
    fn test_generic_line_strategy_uses_whole_line() {
        let text = "推荐方案：周末去爬山\n优点: 风景好";
        let plans = parse(text);

        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].name, "推荐方案：周末去爬山");
        assert_eq!(plans[0].pros, vec!["风景好"]);
    }

    #[test]
    fn test_synonym_numbered_headers() {
        let text = "选项1: 游乐园\n优点: 刺激\n缺点: 排队久\n选项2: 电影院\n优点: 舒适";
        let plans = parse(text);

        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].name, "游乐园");
        assert_eq!(plans[0].cons, vec!["排队久"]);
        assert_eq!(plans[1].name, "电影院");
    }

    #[test]
    fn test_line_scan_fallback_with_loose_labels() {
        let text = "方案 一：爬山\n优势：锻炼身体，空气好\n不足：累\n方案 二：看电影\n- 优点: 舒适";
        let plans = parse(text);

        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].name, "爬山");
        assert_eq!(plans[0].pros, vec!["锻炼身体", "空气好"]);
        assert_eq!(plans[0].cons, vec!["累"]);
        assert_eq!(plans[1].id, "plan-2");
        assert_eq!(plans[1].name, "看电影");
        assert_eq!(plans[1].pros, vec!["舒适"]);
        assert_eq!(plans[1].cons, vec!["暂无缺点信息"]);
    }

    #[test]
    fn test_duplicate_names_are_kept() {
        let plans = parse("方案1: 骑行\n方案2: 骑行");
        assert_eq!(plans.len(), 2);
        assert_ne!(plans[0].id, plans[1].id);
    }

    #[test]
    fn test_unstructured_text_yields_default_plan() {
        let plans = parse("今天天气不错，建议户外活动。");

        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].id, "plan-1");
        assert_eq!(plans[0].name, "默认方案");
        assert_eq!(plans[0].pros, vec!["请查看AI返回的完整内容"]);
        assert_eq!(plans[0].cons, vec!["无法解析方案结构"]);
    }

    #[test]
    fn test_crlf_input() {
        let plans = parse("方案1: 骑行\r\n优点: 便宜\r\n缺点: 累\r\n");
        assert_eq!(plans[0].name, "骑行");
        assert_eq!(plans[0].pros, vec!["便宜"]);
        assert_eq!(plans[0].cons, vec!["累"]);
    }

    #[test]
    fn test_custom_placeholders() {
        let placeholders = Placeholders {
            no_pros: "n/a".to_string(),
            ..Placeholders::default()
        };
        let plans = extract_plan_options("方案1: 散步\n缺点: 无聊", &placeholders);
        assert_eq!(plans[0].pros, vec!["n/a"]);
    }

    #[test]
    fn test_every_option_is_complete() {
        let inputs = [
            "",
            "方案1:   \n方案2: 跑步",
            "随便写点什么",
            "方案一：\n优点：",
        ];
        for input in inputs {
            let plans = parse(input);
            assert!(!plans.is_empty(), "no plans for {:?}", input);
            for plan in &plans {
                assert!(!plan.name.is_empty());
                assert!(!plan.pros.is_empty());
                assert!(!plan.cons.is_empty());
                assert!(plan.pros.iter().chain(&plan.cons).all(|s| !s.is_empty()));
            }
        }
    }
}
