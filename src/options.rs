use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(about = "Packs a directory tree of images into one texture atlas")]
pub struct Options {
    /// The directory to search for source images.
    #[structopt(long = "dir", default_value = "gfx")]
    pub dir: PathBuf,

    /// The width and height of the output atlas, in pixels.
    #[structopt(long = "size", default_value = "256")]
    pub size: u32,

    /// The gap to leave between packed images, in pixels.
    #[structopt(long = "padding", default_value = "1")]
    pub padding: u32,
}
