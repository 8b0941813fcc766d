use puzzle_slicer::config::slice as slice_cfg;
use puzzle_slicer::image::io::write_json_file;
use puzzle_slicer::slicer::writer::clear_previous_pieces;
use puzzle_slicer::{SliceResult, Slicer, SlicerParams};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let program = env::args()
        .next()
        .unwrap_or_else(|| "puzzle_slicer".to_string());
    let config = slice_cfg::parse_cli(&program)?;

    if config.output.clear_previous {
        let removed =
            clear_previous_pieces(&config.output.pieces_dir).map_err(|e| e.to_string())?;
        if removed > 0 {
            println!(
                "Removed {removed} stale piece files from {}",
                config.output.pieces_dir.display()
            );
        }
    }

    let slicer = Slicer::new(SlicerParams {
        bevel: config.bevel.resolve(),
        parallel: config.parallel,
    });
    let result = slicer
        .slice_file(
            &config.input_path,
            config.grid.resolve(),
            &config.output.pieces_dir,
        )
        .map_err(|e| e.to_string())?;

    print_summary(&result, &config.output.pieces_dir);

    if let Some(path) = &config.output.manifest_out {
        write_json_file(path, &result)?;
        println!("Manifest written to {}", path.display());
    }

    Ok(())
}

fn print_summary(result: &SliceResult, pieces_dir: &Path) {
    println!("Slice summary");
    println!("  image: {}x{} px", result.image_width, result.image_height);
    println!("  pieces: {}", result.tiles.len());
    if let Some(first) = result.tiles.first() {
        println!("  piece size: {}x{} px", first.width, first.height);
    }
    println!("  output: {}", pieces_dir.display());
    println!("  latency_ms: {:.3}", result.latency_ms);
}
