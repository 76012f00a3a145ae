use log::debug;
use recipe_scribe::{AppConfig, RecipeAssistant, RecipePreferences};
use std::env;
use tokio::io::AsyncReadExt;

const USAGE: &str = "Usage: recipe-scribe <file|-> [--servings N] [--json]\n       recipe-scribe --generate \"rice, egg, onion\" [--servings N] [--json] [--no-image]";

/// Command-line options, parsed by hand like the rest of the binary.
#[derive(Debug, Default)]
struct Args {
    input: Option<String>,
    generate: Option<String>,
    servings: Option<u32>,
    json: bool,
    no_image: bool,
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut parsed = Args::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => parsed.json = true,
            "--no-image" => parsed.no_image = true,
            "--servings" => {
                let value = iter.next().ok_or("--servings needs a number")?;
                let n = value
                    .parse::<u32>()
                    .map_err(|_| format!("invalid serving count: {value}"))?;
                parsed.servings = Some(n);
            }
            "--generate" => {
                let value = iter.next().ok_or("--generate needs a list of ingredients")?;
                parsed.generate = Some(value.clone());
            }
            other if other.starts_with("--") => return Err(format!("unknown option: {other}")),
            other => parsed.input = Some(other.to_string()),
        }
    }
    if parsed.input.is_none() && parsed.generate.is_none() {
        return Err(USAGE.to_string());
    }
    Ok(parsed)
}

async fn read_input(input: &str) -> std::io::Result<String> {
    if input == "-" {
        let mut text = String::new();
        tokio::io::stdin().read_to_string(&mut text).await?;
        Ok(text)
    } else {
        tokio::fs::read_to_string(input).await
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let args = parse_args(&args)?;
    let config = AppConfig::load()?;
    debug!("{:?}", args);

    let card = match &args.generate {
        Some(ingredients) => {
            let preferences = RecipePreferences {
                ingredients: ingredients.split(',').map(|i| i.trim().to_string()).collect(),
                servings: args.servings,
                ..Default::default()
            };
            RecipeAssistant::builder()
                .generate(preferences)
                .with_image(config.generate_images && !args.no_image)
                .build()
                .await?
        }
        None => {
            let input = args.input.as_deref().unwrap_or("-");
            let text = read_input(input).await?;
            RecipeAssistant::builder().text(text).build().await?
        }
    };

    // without --servings, show the recipe as written
    let servings = args.servings.unwrap_or_else(|| {
        if args.generate.is_some() {
            config.default_servings
        } else {
            card.original_servings()
        }
    });
    let view = card.view(servings);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", view);
    }

    Ok(())
}
