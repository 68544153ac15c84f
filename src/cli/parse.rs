use crate::cli::{ParseArgs, ReplyArgs};
use planparse::config::Config;
use planparse::error::{InputError, PlanparseError};
use planparse::output::{render, write_output};
use planparse::{classify_request, parse_plan_options_with, parse_timeline, ParsedReply};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy)]
pub enum Target {
    Plans,
    Timeline,
}

pub fn execute(args: ParseArgs, target: Target) -> anyhow::Result<()> {
    let (config, text) = prepare(&args)?;

    let reply = match target {
        Target::Plans => ParsedReply {
            plans: Some(parse_plan_options_with(&text, &config.placeholders)),
            timeline: None,
        },
        Target::Timeline => ParsedReply {
            plans: None,
            timeline: Some(parse_timeline(&text)),
        },
    };

    Ok(emit(&reply, &config, args.output.as_deref())?)
}

pub fn execute_reply(args: ReplyArgs) -> anyhow::Result<()> {
    let (config, text) = prepare(&args.common)?;

    let reply = match &args.question {
        Some(question) => {
            let kind = classify_request(question);
            info!("Question classified as {}", kind);
            ParsedReply::for_request(kind, &text, &config.placeholders)
        }
        None => ParsedReply::from_text(&text, &config.placeholders),
    };

    Ok(emit(&reply, &config, args.common.output.as_deref())?)
}

fn prepare(args: &ParseArgs) -> Result<(Config, String), PlanparseError> {
    let mut config = Config::load_or_default(&args.config)?;
    config.validate()?;

    if let Some(format) = args.format {
        config.output.format = format;
    }

    let text = read_input(args.input.as_deref())?;
    debug!("Read {} bytes of reply text", text.len());
    Ok((config, text))
}

fn read_input(path: Option<&Path>) -> Result<String, InputError> {
    match path {
        Some(path) if path != Path::new("-") => {
            std::fs::read_to_string(path).map_err(|e| InputError::ReadFile {
                path: path.to_path_buf(),
                source: e,
            })
        }
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(InputError::Stdin)?;
            Ok(text)
        }
    }
}

fn emit(reply: &ParsedReply, config: &Config, output: Option<&Path>) -> Result<(), PlanparseError> {
    let content = render(reply, &config.output)?;

    match output {
        Some(path) => {
            write_output(path, &content)?;
            info!("Wrote {} output to {:?}", config.output.format, path);
        }
        None => println!("{}", content),
    }

    Ok(())
}
