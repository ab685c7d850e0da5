use crate::cli::{
    args::EncodeArgs,
    config::{get_compression_level, resolve_codec, resolve_compression},
    global::GlobalArgs,
    input::{read_input, write_output},
    text::wrap,
};
use basex::{BasexConfig, CodecKind};

pub fn handle(
    args: EncodeArgs,
    global: &GlobalArgs,
    config: &BasexConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let (kind, file) = resolve_codec(config, args.codec.as_deref(), args.file)?;
    let codec = kind.codec();

    // Step 1: Read input
    let input = read_input(file.as_deref(), global)?;
    let input_len = input.len();

    // Step 2: Compress if requested
    let data = match resolve_compression(config, args.compress) {
        Some(algo) => {
            let level = get_compression_level(config, args.level, algo);
            let compressed = basex::compress(&input, algo, level)?;
            if global.verbose {
                eprintln!(
                    "{algo} level {level}: {input_len} -> {} bytes",
                    compressed.len()
                );
            }
            compressed
        }
        None => input,
    };

    if kind == CodecKind::Base85 && data.len() % 4 != 0 {
        log::warn!(
            "base85 encodes the trailing {} byte(s) as a partial block that will not decode back unchanged",
            data.len() % 4
        );
    }

    // Step 3: Encode and wrap
    let encoded = codec.encode(&data);
    let cols = args.wrap.unwrap_or_else(|| config.wrap());
    let text = wrap(&encoded, cols);

    if global.verbose {
        let ratio = if input_len == 0 {
            0.0
        } else {
            encoded.len() as f64 / input_len as f64
        };
        eprintln!(
            "{}: {input_len} -> {} bytes ({ratio:.3}x)",
            codec.name(),
            encoded.len()
        );
    }

    // Step 4: Output encoded result
    write_output(args.output.as_deref(), &text)
}
