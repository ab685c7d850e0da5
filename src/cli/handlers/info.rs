use basex::{CodecKind, cpu_features};

/// Sample length for the expansion column; large enough that the constant
/// terms of each bound stop mattering.
const SAMPLE_LEN: usize = 1 << 20;

pub fn list_codecs() -> Result<(), Box<dyn std::error::Error>> {
    println!("Available codecs:\n");
    println!("  {:<10} {:<11} {:>9}", "NAME", "DECODING", "EXPANSION");

    for kind in CodecKind::ALL {
        let codec = kind.codec();
        let expansion = codec.encode_len(SAMPLE_LEN) as f64 / SAMPLE_LEN as f64;
        println!(
            "  {:<10} {:<11} {:>8.3}x",
            codec.name(),
            codec.policy().as_str(),
            expansion
        );
    }

    Ok(())
}

pub fn cpu_info() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", cpu_features());
    Ok(())
}
