//! Text-similarity pipeline: OCR both images and score the extracted strings
//! with a pre-trained sentence-embedding model.

use imagesim::{compare_text, ComparisonMethod, ComparisonReport, Result};

const IMAGE_A: &str = "V.png";
const IMAGE_B: &str = "LJ1.png";

fn main() -> Result<()> {
    imagesim::init()?;

    let score = compare_text(IMAGE_A, IMAGE_B)?;

    let report = ComparisonReport::new(ComparisonMethod::Text, IMAGE_A, IMAGE_B, score as f64);
    log::debug!("{}", report.to_json()?);

    println!("Similarity Percentage: {}", score);
    Ok(())
}
