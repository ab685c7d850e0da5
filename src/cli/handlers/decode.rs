use crate::cli::{
    args::DecodeArgs,
    config::resolve_codec,
    global::GlobalArgs,
    input::{read_input, write_output},
    text::{retain_symbols, strip_whitespace},
};
use basex::BasexConfig;

/// Decompressed output is usually a few times larger than its compressed form.
const DECOMPRESS_HINT_FACTOR: usize = 4;

pub fn handle(
    args: DecodeArgs,
    global: &GlobalArgs,
    config: &BasexConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let (kind, file) = resolve_codec(config, args.codec.as_deref(), args.file)?;
    let codec = kind.codec();

    // Step 1: Read input and drop line breaks
    let input = read_input(file.as_deref(), global)?;
    let mut text = strip_whitespace(&input);
    if args.ignore_garbage {
        let before = text.len();
        retain_symbols(&mut text, codec);
        log::debug!("ignored {} non-{} bytes", before - text.len(), codec.name());
    }

    // Step 2: Decode
    let mut data = codec.decode(&text)?;
    if global.verbose {
        eprintln!(
            "{}: {} -> {} bytes",
            codec.name(),
            text.len(),
            data.len()
        );
    }

    // Step 3: Decompress if requested
    if let Some(algo) = args.decompress {
        let decoded_len = data.len();
        data = basex::decompress(&data, algo, decoded_len * DECOMPRESS_HINT_FACTOR)?;
        if global.verbose {
            eprintln!("{algo}: {decoded_len} -> {} bytes", data.len());
        }
    }

    // Step 4: Output decoded result
    write_output(args.output.as_deref(), &data)
}
