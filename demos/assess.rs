use argh::FromArgs;

use exit_safety::{SafetyPipeline, SafetyPipelineConfig};

#[derive(FromArgs)]
/// Exit-sign safety assessment demo arguments
struct Args {
    /// the confidence threshold for decoding
    #[argh(option, default = "0.5")]
    confidence_threshold: f32,

    /// the IoU threshold for non-maximum suppression
    #[argh(option, default = "0.45")]
    iou_threshold: f32,
}

// Synthetic stride-8 model output: a stairwell with one brightly lit exit
// sign (plus a weaker duplicate box), one unlit sign, and a low-objectness
// row the decoder should skip.
const RAW_OUTPUT: [f32; 32] = [
    0.30, 0.40, 0.10, 0.15, 0.95, 0.02, 0.92, 0.01, //
    0.31, 0.40, 0.10, 0.15, 0.80, 0.05, 0.70, 0.02, //
    0.75, 0.35, 0.08, 0.12, 0.85, 0.03, 0.04, 0.78, //
    0.50, 0.80, 0.20, 0.20, 0.30, 0.40, 0.10, 0.10, //
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let args: Args = argh::from_env();

    let pipeline = SafetyPipeline::new(SafetyPipelineConfig {
        confidence_threshold: args.confidence_threshold,
        iou_threshold: args.iou_threshold,
        ..Default::default()
    });

    let assessment = pipeline.assess(&RAW_OUTPUT, 8)?;

    println!("{}", serde_json::to_string_pretty(&assessment)?);
    println!(
        "verdict: {} ({} lit, {} unlit, {} general)",
        assessment.recommendation,
        assessment.lit_signs,
        assessment.unlit_signs,
        assessment.general_exits
    );

    Ok(())
}
