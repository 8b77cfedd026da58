use packtree::{InputItem, TreePacker};

fn main() {
    env_logger::init();

    let inputs: Vec<_> = [(64, 64), (128, 32), (32, 96), (16, 16), (96, 96)]
        .iter()
        .map(|&size| InputItem::new(size))
        .collect();

    let packer = TreePacker::new().atlas_size((256, 256)).padding(1);
    let result = packer.pack(inputs);

    println!("Pack result: {:#?}", result);
}
