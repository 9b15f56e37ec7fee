use rexpaint_xp::{LoadOptions, XpDocument};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <path-to-xp-file> [--column-major]", args[0]);
        std::process::exit(1);
    }

    let xp_path = &args[1];
    let mut options = LoadOptions::default();
    if args.iter().skip(2).any(|arg| arg == "--column-major") {
        options = options.column_major();
    }

    println!("Reading XP file: {}", xp_path);
    println!("{}", "=".repeat(60));

    match XpDocument::load_with_options(xp_path, &options) {
        Ok(document) => {
            println!("  Version: {}", document.version);
            println!("  Layers: {}", document.layer_count());
            println!("  Storage order: {:?}", options.order);

            for (idx, layer) in document.layers().iter().enumerate() {
                println!("\nLayer {}:", idx);
                println!("  Dimensions: {}x{}", layer.width(), layer.height());
                println!("  Non-empty cells: {}", layer.non_empty_count());
            }
        }
        Err(e) => {
            eprintln!("\nERROR: Failed to read XP file");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    }
}
