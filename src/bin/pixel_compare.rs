//! Pixel-similarity pipeline: decode two images, resize the candidate to the
//! reference's dimensions, and print their PSNR.

use imagesim::{compare_pixels, ComparisonMethod, ComparisonReport, Result};

const IMAGE_A: &str = "V.png";
const IMAGE_B: &str = "ZC1.png";

fn main() -> Result<()> {
    imagesim::init()?;

    let score = compare_pixels(IMAGE_A, IMAGE_B)?;

    let report = ComparisonReport::new(ComparisonMethod::Pixel, IMAGE_A, IMAGE_B, score);
    log::debug!("{}", report.to_json()?);

    println!("Similarity Score: {}", score);
    Ok(())
}
