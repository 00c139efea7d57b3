use clap::Parser;
use neighborhood::domain::ports::Storage;
use neighborhood::utils::{logger, validation::Validate};
use neighborhood::{
    fetch_places_with_images, filter_places, CliConfig, ImageLoader, LocalStorage, Place,
    PlaceRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting neighborhood CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let filter = config.filter.clone().unwrap_or_default();
    let save_images = config.save_images.clone();
    let repository = PlaceRepository::new(config);

    let mut places = fetch_places_with_images(&repository).await;
    places.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

    let visible = filter_places(&places, &filter);
    if visible.is_empty() {
        println!("No places found.");
        return Ok(());
    }

    for place in &visible {
        print_place(place);
    }
    println!("{} places listed.", visible.len());

    if let Some(dir) = save_images {
        download_images(&visible, &dir).await?;
    }

    Ok(())
}

fn print_place(place: &Place) {
    println!(
        "{} ({} stars, {} reviews, {})",
        place.name, place.stars, place.reviews, place.price
    );
    println!("  {}", place.address);
    if !place.description.is_empty() {
        println!("  {}", place.description);
    }
    match &place.image_url {
        Some(url) => println!("  image: {}", url),
        None => println!("  image: -"),
    }
}

async fn download_images(places: &[Place], dir: &str) -> anyhow::Result<()> {
    let loader = ImageLoader::new();
    let storage = LocalStorage::new(dir.to_string());
    let mut saved = 0usize;

    for place in places {
        let Some(url) = &place.image_url else { continue };

        let Some(image) = loader.fetch(url).await else {
            tracing::warn!("Skipping image for place {}", place.id);
            continue;
        };

        let mut buf = std::io::Cursor::new(Vec::new());
        image.write_to(&mut buf, image::ImageFormat::Png)?;
        storage
            .write_file(&format!("{}.png", place.id), &buf.into_inner())
            .await?;
        saved += 1;
    }

    println!("✅ Saved {} images to {}", saved, dir);
    Ok(())
}
