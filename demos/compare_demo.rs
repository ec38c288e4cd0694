//! Runs both similarity pipelines over a pair of images and prints a JSON
//! report for each.

use std::{env, process};

use imagesim::{compare_pixels, compare_text, ComparisonMethod, ComparisonReport};

fn usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run --example compare_demo -- <image_a> <image_b>");
    eprintln!();
    eprintln!("The text pipeline needs model files; see ModelConfig::from_env.");
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        usage();
        process::exit(1);
    }

    if let Err(e) = imagesim::init() {
        eprintln!("Failed to initialize: {}", e);
        process::exit(1);
    }

    let image_a = &args[1];
    let image_b = &args[2];

    match compare_pixels(image_a, image_b) {
        Ok(score) => {
            let report = ComparisonReport::new(ComparisonMethod::Pixel, image_a, image_b, score);
            println!("{}", report.to_json().unwrap_or_default());
        }
        Err(e) => {
            eprintln!("Pixel comparison failed: {}", e);
            process::exit(1);
        }
    }

    match compare_text(image_a, image_b) {
        Ok(score) => {
            let report =
                ComparisonReport::new(ComparisonMethod::Text, image_a, image_b, score as f64);
            println!("{}", report.to_json().unwrap_or_default());
        }
        Err(e) => {
            // Text comparison is optional here: without model weights on disk
            // the pixel score above is still useful.
            eprintln!("Text comparison failed: {}", e);
        }
    }
}
