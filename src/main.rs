use clap::Parser;

use content_forge::cli::Args;
use content_forge::config::Config;
use content_forge::{log, ux, Generator};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log::init(args.debug);

    let cfg = Config::from_args(&args)?;
    tracing::debug!("provider={:?} model={}", cfg.provider, cfg.model);
    let generator = Generator::from_config(&cfg)?;

    if let Some(variant) = args.suggest {
        let topics = generator.suggested_topics(variant).await;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&topics)?);
        } else {
            print!("{}", ux::render_topics(variant, &topics));
        }
        return Ok(());
    }

    let req = args.to_request()?;
    let pb = ux::spinner(&format!("Generating {}...", req.content_type));
    let outcome = generator.generate_content(&req).await;
    pb.finish_and_clear();
    let result = outcome?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", ux::render_result(&result));
    }
    Ok(())
}
