//! Minimal example: turn the text passed on the command line into a canvas
//! file in the current directory.
//!
//! ```sh
//! GEMINI_API_KEY=... cargo run --example generate_canvas -- "My notes about Rust ownership"
//! ```

use canvasgen::{
    CanvasGenerator, GeminiProvider, GenerationConfig, ResponseMimeType, Settings,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // Load API key and system instructions
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;

    let input_text = std::env::args().nth(1).unwrap_or_default();

    // Create provider and generator
    let provider = GeminiProvider::new(settings.api_key.clone())?;
    let generator = CanvasGenerator::new(Box::new(provider), settings);

    // Pick a model
    let models = generator.available_models().await;
    let model = CanvasGenerator::default_model(&models)
        .ok_or("no models available")?
        .to_string();
    println!("Using model: {model}");

    // Run one generation cycle
    let config =
        GenerationConfig::default().with_response_mime_type(ResponseMimeType::ApplicationJson);
    let artifact = generator.generate(&model, config, &input_text).await?;

    std::fs::write(&artifact.file_name, &artifact.content)?;
    println!("Wrote {} ({} bytes)", artifact.file_name, artifact.content.len());
    println!("Copy the file into your Obsidian vault to import the canvas.");

    Ok(())
}
