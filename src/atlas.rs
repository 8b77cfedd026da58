//! Drives one full atlas run: pack the corpus, blit the placements, write
//! the result, and report progress on stdout.

use std::{collections::HashMap, io::BufWriter};

use anyhow::Context;
use packtree::{InputItem, PackResult, TreePacker};

use crate::{corpus, image::Image, options::Options};

const OUTPUT_PATH: &str = "atlas.png";

pub(crate) fn generate(options: &Options) -> anyhow::Result<()> {
    let assets = corpus::discover_images(&options.dir);

    log::info!(
        "Discovered {} images under {}",
        assets.len(),
        options.dir.display()
    );

    let mut assets_by_id = HashMap::new();
    let mut inputs = Vec::with_capacity(assets.len());

    for asset in assets {
        let item = InputItem::new(asset.image.size());

        inputs.push(item);
        assets_by_id.insert(item.id(), asset);
    }

    let packer = TreePacker::new()
        .atlas_size((options.size, options.size))
        .padding(options.padding);
    let output = packer.pack(inputs);

    let mut atlas = Image::new_empty_rgba8(output.size());
    let total = output.results().len();

    for (index, result) in output.results().iter().enumerate() {
        match result {
            PackResult::Placed(placed) => {
                let asset = assets_by_id
                    .remove(&placed.id())
                    .expect("every placed id came from an input item");

                println!("[{:02} / {:02}] {}", index + 1, total, asset.name);

                if placed.rotated() {
                    atlas.blit_rotated(&asset.image, placed.position());
                } else {
                    atlas.blit(&asset.image, placed.position());
                }
            }
            PackResult::OutOfSpace(item) => {
                let asset = assets_by_id
                    .remove(&item.id())
                    .expect("every failed id came from an input item");

                println!("[ERROR] Couldn't add '{}'", asset.name);
            }
        }

        // The asset, pixels included, drops here whether or not it was
        // blitted.
    }

    write_atlas(&atlas)?;

    println!(
        "Packed {} / {} images into {} ({} rotated, {} failed)",
        total - output.num_failed(),
        total,
        OUTPUT_PATH,
        output.num_rotated(),
        output.num_failed()
    );

    Ok(())
}

fn write_atlas(atlas: &Image) -> anyhow::Result<()> {
    let file = fs_err::File::create(OUTPUT_PATH)
        .with_context(|| format!("couldn't create {}", OUTPUT_PATH))?;

    atlas
        .encode_png(BufWriter::new(file))
        .with_context(|| format!("couldn't write {}", OUTPUT_PATH))?;

    Ok(())
}
