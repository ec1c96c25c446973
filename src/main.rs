use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use mandelbrot_tiles::{
    CliTileController, DEFAULT_BASE_RANGE_X, DEFAULT_BASE_RANGE_Y, DEFAULT_MAX_ITERATIONS,
    DEFAULT_MIN_X, DEFAULT_MIN_Y, DEFAULT_TILE_SIZE, PlaneFraming, PngFilePresenter, RenderConfig,
    TileCoordinate, clean_output_dir, pyramid_tile_count,
};
use tracing::info;

/// Render Mandelbrot map tiles as grayscale PNGs
#[derive(Parser, Debug, PartialEq)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Render a single tile to a file
    #[command(allow_negative_numbers = true)]
    Tile {
        /// Zoom level
        z: i32,

        /// Tile column, growing to the right
        x: i64,

        /// Tile row, growing downwards
        y: i64,

        /// Where to write the PNG
        #[arg(short, long, default_value = "tile.png")]
        output: PathBuf,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Render every tile from zoom 0 through MAX_ZOOM into OUTPUT_DIR/{z}/{x}/{y}.png
    Pyramid {
        /// Deepest zoom level to render
        max_zoom: u32,

        /// Worker threads; defaults to one per core
        #[arg(short, long)]
        threads: Option<usize>,

        /// Root of the tile tree
        #[arg(short, long, default_value = "map")]
        output_dir: PathBuf,

        /// Delete the output directory before rendering
        #[arg(long, default_value_t = false)]
        clean: bool,

        #[command(flatten)]
        render: RenderArgs,
    },
}

#[derive(Args, Debug, PartialEq)]
struct RenderArgs {
    /// Width and height of a tile in pixels
    #[arg(long, default_value_t = DEFAULT_TILE_SIZE)]
    tile_size: u32,

    /// Iteration cap; points that never escape are drawn black
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: u32,

    /// Real part of the zoom 0 tile's top-left corner
    #[arg(long, default_value_t = DEFAULT_MIN_X, allow_hyphen_values = true)]
    min_x: f64,

    /// Imaginary part of the zoom 0 tile's top-left corner
    #[arg(long, default_value_t = DEFAULT_MIN_Y, allow_hyphen_values = true)]
    min_y: f64,

    /// Real extent of the zoom 0 tile
    #[arg(long, default_value_t = DEFAULT_BASE_RANGE_X)]
    range_x: f64,

    /// Imaginary extent of the zoom 0 tile
    #[arg(long, default_value_t = DEFAULT_BASE_RANGE_Y)]
    range_y: f64,
}

impl RenderArgs {
    fn config(&self) -> RenderConfig {
        RenderConfig::new(self.tile_size, self.max_iterations)
    }

    fn framing(&self) -> Result<PlaneFraming, mandelbrot_tiles::PlaneFramingError> {
        PlaneFraming::new(self.min_x, self.min_y, self.range_x, self.range_y)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    mandelbrot_tiles::init_logging()?;

    match cli.command {
        Command::Tile {
            z,
            x,
            y,
            output,
            render,
        } => {
            let coordinate = TileCoordinate::new(z, x, y);
            let mut controller = CliTileController::new(PngFilePresenter::new());

            controller.generate(coordinate, &render.config(), render.framing()?)?;
            controller.write(&output)?;

            info!(tile = %coordinate, output = %output.display(), "wrote tile");
        }
        Command::Pyramid {
            max_zoom,
            threads,
            output_dir,
            clean,
            render,
        } => {
            let config = render.config();
            let framing = render.framing()?;
            let controller = CliTileController::new(PngFilePresenter::new());

            if clean {
                info!(output = %output_dir.display(), "cleaning output directory");
                clean_output_dir(&output_dir)?;
            }

            let mut pool = rayon::ThreadPoolBuilder::new();
            if let Some(threads) = threads {
                pool = pool.num_threads(threads);
            }

            pool.build()?.install(|| {
                controller.generate_pyramid(max_zoom, &config, framing, &output_dir)
            })?;

            info!(
                tiles = pyramid_tile_count(max_zoom),
                output = %output_dir.display(),
                "wrote tile pyramid"
            );
        }
    }

    Ok(())
}
