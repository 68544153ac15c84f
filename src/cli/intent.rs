use crate::cli::IntentArgs;
use planparse::classify_request;

pub fn execute(args: IntentArgs) -> anyhow::Result<()> {
    println!("{}", classify_request(&args.question));
    Ok(())
}
