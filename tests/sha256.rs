use anyhow::Result;
use shashasha::{Hasher, SHA3_256_BYTES, Sha3_256, b2h};

#[test]
fn sha256_empty_string() -> Result<()> {
    let mut hasher = Sha3_256::new();
    let mut result = [0u8; SHA3_256_BYTES];
    hasher.finalize(&mut result)?;
    assert_eq!(
        "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a",
        b2h(&result)
    );
    Ok(())
}

#[test]
fn sha256_with_update() -> Result<()> {
    let mut hasher = Sha3_256::new();
    let mut result = [0u8; SHA3_256_BYTES];
    hasher.update(b"Hello, world!")?;
    hasher.finalize(&mut result)?;
    assert_eq!(result.len(), SHA3_256_BYTES);
    assert_eq!(
        "f345a219da005ebe9c1a1eaad97bbf38a10c8473e41d0af7fb617caa0c6aa722",
        b2h(&result)
    );
    Ok(())
}

#[test]
fn sha256_streaming_matches_one_shot() -> Result<()> {
    let mut streamed = Sha3_256::default();
    streamed.update(b"Hello, ")?;
    streamed.update(b"world!")?;
    let mut streamed_out = [0u8; SHA3_256_BYTES];
    streamed.finalize(&mut streamed_out)?;

    let mut one_shot = Sha3_256::new();
    one_shot.update(b"Hello, world!")?;
    let mut one_shot_out = [0u8; SHA3_256_BYTES];
    one_shot.finalize(&mut one_shot_out)?;

    assert_eq!(streamed_out, one_shot_out);
    Ok(())
}
