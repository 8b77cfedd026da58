//! Finds and decodes the source images that get packed into the atlas.

use std::{io::BufReader, path::Path};

use walkdir::{DirEntry, WalkDir};

use crate::image::{DecodeError, Image};

/// One decoded source image, keyed by the path it was discovered at.
#[derive(Debug)]
pub(crate) struct ImageAsset {
    pub name: String,
    pub image: Image,
}

/// Collects every decodable image under `root`, at any depth.
///
/// Hidden directories are skipped entirely; files that fail to open or
/// decode are dropped without being counted. Discovery order is whatever
/// the platform's directory enumeration yields.
pub(crate) fn discover_images(root: &Path) -> Vec<ImageAsset> {
    let mut assets = Vec::new();

    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| !is_hidden_dir(entry));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("Skipping unreadable entry: {}", err);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        match load_image(entry.path()) {
            Ok(image) => {
                let name = entry.path().display().to_string();

                log::debug!("Loaded {} ({}x{})", name, image.size().0, image.size().1);

                assets.push(ImageAsset { name, image });
            }
            Err(err) => {
                log::debug!("Skipping {}: {}", entry.path().display(), err);
            }
        }
    }

    assets
}

fn load_image(path: &Path) -> Result<Image, DecodeError> {
    let file = fs_err::File::open(path)?;
    Image::decode_png(BufReader::new(file))
}

fn is_hidden_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map(|name| name.starts_with('.'))
            .unwrap_or(false)
}
